//! Virtual filesystem and command interpreter behind the portfolio terminal.
//!
//! The crate is pure: the tree is built once and never mutated, and every
//! command takes the working directory as input and returns the next one
//! in its [`CommandResult`]. Callers own session state.
//!
//! ```
//! use folio_core::{config::HOME_DIR, execute_line, VirtualFs};
//!
//! let fs = VirtualFs::portfolio();
//! let result = execute_line(&fs, "cd projects", HOME_DIR);
//! assert_eq!(result.navigate_to.as_deref(), Some("/home/aathish/projects"));
//! ```

pub mod config;
pub mod core;
pub mod models;

pub use crate::core::{
    autocomplete, execute_command, execute_line, get_hint, run_shell_command, run_static_command,
    AutocompleteResult, Command, CommandResult, DirEntry, VirtualFs,
};
pub use crate::core::error::{ManifestError, ShellError};
