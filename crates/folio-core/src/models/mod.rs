//! Data models for the virtual filesystem.
//!
//! - [`FsEntry`], [`EntryKind`] - Tree nodes
//! - [`Manifest`], [`FileEntry`], [`DirectoryEntry`] - Embedded tree description

mod filesystem;

pub use filesystem::{
    is_valid_entry_name, DirectoryEntry, EntryKind, FileEntry, FsEntry, Manifest,
};
