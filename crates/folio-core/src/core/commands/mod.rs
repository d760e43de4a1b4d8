//! Command classification and execution.
//!
//! This module provides:
//! - `ShellCommand` for the filesystem commands (`ls`, `cd`, `cat`, `echo`, `pwd`)
//! - `Command` for a whole input line: clear, shell, static or unknown
//! - `CommandResult` for command execution results
//!
//! # Architecture
//!
//! Input is tokenized by the parser, classified into `Command`, then run
//! by `execute_command`. Nothing here holds state: the working directory
//! comes in as an argument and a new one goes out in the result.

mod execute;
mod result;

pub use execute::{execute_command, execute_line, execute_shell, run_shell_command};
pub use result::CommandResult;

use std::fmt;

use crate::core::registry::{self, StaticCommand};

// =============================================================================
// Path Argument Type
// =============================================================================

/// A path argument passed to a command (e.g., `cd foo`, `cat bar.md`).
///
/// Stored exactly as typed; diagnostics echo it back unchanged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathArg(String);

impl PathArg {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PathArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PathArg {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl PartialEq<&str> for PathArg {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

// =============================================================================
// Command Enums
// =============================================================================

/// Filesystem-aware shell command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShellCommand {
    Ls(Option<PathArg>),
    Cd(Option<PathArg>),
    Cat(Option<PathArg>),
    Echo(String),
    Pwd,
}

impl ShellCommand {
    pub const NAMES: [&'static str; 5] = ["ls", "cd", "cat", "echo", "pwd"];

    /// Parse a shell command by exact name. Extra path arguments are ignored,
    /// and an empty first argument counts as no argument.
    pub fn parse(name: &str, args: &[String]) -> Option<Self> {
        let first = || {
            args.first()
                .filter(|a| !a.is_empty())
                .map(|a| PathArg::new(a.as_str()))
        };
        let cmd = match name {
            "ls" => Self::Ls(first()),
            "cd" => Self::Cd(first()),
            "cat" => Self::Cat(first()),
            "echo" => Self::Echo(args.join(" ")),
            "pwd" => Self::Pwd,
            _ => return None,
        };
        Some(cmd)
    }
}

/// Parsed terminal command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Discard prior output; checked before the static registry
    Clear,
    Shell(ShellCommand),
    Static(StaticCommand),
    Unknown(String),
}

impl Command {
    /// All available command names, sorted, for completion.
    pub fn names() -> Vec<&'static str> {
        let mut names: Vec<&'static str> = ShellCommand::NAMES
            .into_iter()
            .chain(registry::names())
            .collect();
        names.sort_unstable();
        names.dedup();
        names
    }

    /// Classify a command from its name and arguments.
    ///
    /// Names match case-insensitively; arguments keep their case.
    pub fn parse(name: &str, args: &[String]) -> Self {
        let lower = name.to_lowercase();
        if lower == StaticCommand::Clear.name() {
            return Self::Clear;
        }
        if let Some(shell) = ShellCommand::parse(&lower, args) {
            return Self::Shell(shell);
        }
        match StaticCommand::from_name(&lower) {
            Some(cmd) => Self::Static(cmd),
            None => Self::Unknown(name.to_string()),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
