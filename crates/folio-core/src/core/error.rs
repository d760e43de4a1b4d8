//! Error types for the core.
//!
//! - [`ShellError`] - Shell command diagnostics; `Display` is the line shown to the user
//! - [`ManifestError`] - Loading the filesystem manifest

use thiserror::Error;

/// Diagnostics produced by the shell commands.
///
/// Path payloads hold the argument exactly as the user typed it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShellError {
    #[error("ls: cannot access '{0}': No such file or directory")]
    ListNotFound(String),
    #[error("ls: cannot access '{0}': Not a directory")]
    ListNotDirectory(String),
    #[error("cd: no such file or directory: {0}")]
    ChangeDirNotFound(String),
    #[error("cd: not a directory: {0}")]
    ChangeDirNotDirectory(String),
    #[error("cat: missing file name")]
    MissingFileName,
    #[error("cat: {0}: No such file or directory")]
    CatNotFound(String),
    #[error("cat: {0}: Is a directory")]
    CatIsDirectory(String),
    #[error("{0}: command not found")]
    CommandNotFound(String),
}

impl ShellError {
    /// Render as output lines.
    pub fn into_lines(self) -> Vec<String> {
        vec![self.to_string()]
    }
}

/// Failure to load a filesystem manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("invalid manifest JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_echo_argument() {
        assert_eq!(
            ShellError::ListNotFound("nope".into()).to_string(),
            "ls: cannot access 'nope': No such file or directory"
        );
        assert_eq!(
            ShellError::ChangeDirNotDirectory("about.txt".into()).to_string(),
            "cd: not a directory: about.txt"
        );
        assert_eq!(
            ShellError::CatIsDirectory("skills".into()).to_string(),
            "cat: skills: Is a directory"
        );
        assert_eq!(ShellError::MissingFileName.to_string(), "cat: missing file name");
    }

    #[test]
    fn test_into_lines() {
        assert_eq!(
            ShellError::CommandNotFound("lls".into()).into_lines(),
            vec!["lls: command not found".to_string()]
        );
    }
}
