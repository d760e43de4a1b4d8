//! Command execution result type.

use serde::Serialize;

use crate::core::error::ShellError;

/// Result of executing a command.
///
/// Commands produce output lines and optionally hand back a new working
/// directory. Applying it is up to the caller.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CommandResult {
    /// Output lines to display
    pub output: Vec<String>,
    /// New working directory (e.g., for `cd`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub navigate_to: Option<String>,
    /// Discard prior output instead of appending (`clear`)
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub clear: bool,
}

impl CommandResult {
    /// Create a result with just output, no navigation.
    pub fn output(lines: Vec<String>) -> Self {
        Self {
            output: lines,
            ..Self::default()
        }
    }

    /// Create a result that changes the working directory.
    pub fn navigate(path: String) -> Self {
        Self {
            navigate_to: Some(path),
            ..Self::default()
        }
    }

    /// Create a result asking the caller to clear its screen.
    pub fn clear() -> Self {
        Self {
            clear: true,
            ..Self::default()
        }
    }

    /// Create an empty result (no output, no navigation).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Working directory after this result is applied.
    pub fn next_dir<'a>(&'a self, current: &'a str) -> &'a str {
        self.navigate_to.as_deref().unwrap_or(current)
    }
}

impl From<ShellError> for CommandResult {
    fn from(err: ShellError) -> Self {
        Self::output(err.into_lines())
    }
}
