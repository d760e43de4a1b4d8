//! Core logic for the portfolio shell.
//!
//! This module provides:
//! - [`VirtualFs`] tree store and path resolution
//! - [`Command`] classification and [`execute_line`] execution
//! - [`registry`] static portfolio commands
//! - [`autocomplete`] and [`get_hint`] for tab completion

mod autocomplete;
mod commands;
pub mod error;
mod filesystem;
pub mod parser;
pub mod registry;

pub use autocomplete::{autocomplete, get_hint, AutocompleteResult};
pub use commands::{
    execute_command, execute_line, execute_shell, run_shell_command, Command, CommandResult,
    PathArg, ShellCommand,
};
pub use filesystem::{DirEntry, VirtualFs};
pub use parser::parse_input;
pub use registry::{get as run_static_command, StaticCommand};
