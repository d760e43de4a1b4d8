use hashlink::LinkedHashMap;
use serde::{Deserialize, Serialize};

// =============================================================================
// Manifest Types
// =============================================================================

/// Root manifest structure from `filesystem.json`.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Manifest {
    /// File entries, in display order
    pub files: Vec<FileEntry>,
    /// Directories that must exist even without files
    #[serde(default)]
    pub directories: Vec<DirectoryEntry>,
}

/// File entry from the manifest.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct FileEntry {
    /// File path relative to the root, e.g. `home/aathish/about.txt`
    pub path: String,
    /// File body; split on newlines when loaded
    #[serde(default)]
    pub content: String,
}

/// Directory entry from the manifest.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct DirectoryEntry {
    /// Directory path relative to the root, e.g. `usr/bin`
    pub path: String,
}

// =============================================================================
// Tree Nodes
// =============================================================================

/// Kind of a filesystem entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Directory,
}

/// Represents an entry in the virtual filesystem.
///
/// Children keep insertion order, which is also the listing order.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FsEntry {
    Directory {
        children: LinkedHashMap<String, FsEntry>,
    },
    File {
        content: Vec<String>,
    },
}

impl FsEntry {
    /// Create a file from its raw body.
    pub fn file(body: &str) -> Self {
        let content = if body.is_empty() {
            Vec::new()
        } else {
            body.split('\n').map(str::to_string).collect()
        };
        FsEntry::File { content }
    }

    /// Create an empty directory.
    pub fn directory() -> Self {
        FsEntry::Directory {
            children: LinkedHashMap::new(),
        }
    }

    pub fn kind(&self) -> EntryKind {
        match self {
            FsEntry::Directory { .. } => EntryKind::Directory,
            FsEntry::File { .. } => EntryKind::File,
        }
    }

    /// Check if this entry is a directory.
    pub fn is_directory(&self) -> bool {
        matches!(self, FsEntry::Directory { .. })
    }

    /// Check if this entry is a file.
    pub fn is_file(&self) -> bool {
        matches!(self, FsEntry::File { .. })
    }

    /// File lines (files only).
    pub fn content(&self) -> Option<&[String]> {
        match self {
            FsEntry::File { content } => Some(content),
            FsEntry::Directory { .. } => None,
        }
    }

    /// Child entries (directories only).
    pub fn children(&self) -> Option<&LinkedHashMap<String, FsEntry>> {
        match self {
            FsEntry::Directory { children } => Some(children),
            FsEntry::File { .. } => None,
        }
    }
}

/// Check that a name can be stored as a directory child.
///
/// `.` and `..` are resolved structurally and never stored.
pub fn is_valid_entry_name(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !name.contains('/')
}
