//! Terminal front end for the portfolio shell.
//!
//! [`Session`] owns the only mutable state, the working directory, and
//! applies the results returned by `folio-core`. [`run_repl`] drives a
//! session over any reader/writer pair.

use std::io::{self, BufRead, Write};

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use folio_core::config::{HOME_DIR, HOST_NAME, USER_NAME, WELCOME_BANNER};
use folio_core::{
    autocomplete, execute_line, get_hint, AutocompleteResult, CommandResult, VirtualFs,
};

/// ANSI sequence that clears the screen and homes the cursor.
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Inputs that end the interactive loop.
const EXIT_COMMANDS: &[&str] = &["exit", "quit"];

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("not a directory: {0}")]
    InvalidWorkingDir(String),
}

// =============================================================================
// Session
// =============================================================================

/// One terminal session over a shared filesystem.
#[derive(Debug, Clone)]
pub struct Session {
    fs: VirtualFs,
    current_dir: String,
}

/// JSON reply for one executed line.
#[derive(Debug, Serialize)]
pub struct Reply<'a> {
    #[serde(flatten)]
    pub result: &'a CommandResult,
    pub cwd: &'a str,
}

/// JSON reply for a completion request.
#[derive(Debug, Serialize)]
pub struct CompletionReply<'a> {
    pub completion: &'a AutocompleteResult,
    /// Suffix a line editor would show as ghost text.
    pub hint: Option<String>,
}

impl Session {
    /// Start a session in the home directory.
    pub fn new(fs: VirtualFs) -> Self {
        Self {
            fs,
            current_dir: HOME_DIR.to_string(),
        }
    }

    /// Start a session in `dir`, which must be an existing directory.
    pub fn with_dir(fs: VirtualFs, dir: &str) -> Result<Self, CliError> {
        if !dir.starts_with('/') || !fs.is_directory(dir) {
            return Err(CliError::InvalidWorkingDir(dir.to_string()));
        }
        Ok(Self {
            fs,
            current_dir: dir.to_string(),
        })
    }

    pub fn current_dir(&self) -> &str {
        &self.current_dir
    }

    /// Prompt string, with the home directory shown as `~`.
    ///
    /// `cd` keeps a trailing slash as typed, so `/home/aathish/` is home too.
    pub fn prompt(&self) -> String {
        let short = if self.current_dir.trim_end_matches('/') == HOME_DIR {
            "~"
        } else {
            self.current_dir.as_str()
        };
        format!("{}@{}:{}$ ", USER_NAME, HOST_NAME, short)
    }

    /// Run one input line and apply any directory change.
    pub fn submit(&mut self, line: &str) -> CommandResult {
        let result = execute_line(&self.fs, line, &self.current_dir);
        if let Some(dir) = &result.navigate_to {
            debug!(from = %self.current_dir, to = %dir, "session directory changed");
            self.current_dir = dir.clone();
        }
        result
    }

    /// Complete a partial line from the current directory.
    pub fn complete(&self, partial: &str) -> AutocompleteResult {
        autocomplete(&self.fs, partial, &self.current_dir)
    }

    /// Inline hint for a partial line, if one match extends it.
    pub fn hint(&self, partial: &str) -> Option<String> {
        get_hint(&self.fs, partial, &self.current_dir)
    }
}

// =============================================================================
// Rendering
// =============================================================================

/// Write a command result as plain text.
pub fn write_result<W: Write>(out: &mut W, result: &CommandResult) -> Result<(), CliError> {
    if result.clear {
        write!(out, "{}", CLEAR_SCREEN)?;
    }
    for line in &result.output {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

/// Write a command result and the resulting directory as one JSON line.
pub fn write_json<W: Write>(out: &mut W, result: &CommandResult, cwd: &str) -> Result<(), CliError> {
    serde_json::to_writer(&mut *out, &Reply { result, cwd })?;
    writeln!(out)?;
    Ok(())
}

/// Write a completion result and its hint as one JSON line.
pub fn write_completion_json<W: Write>(
    out: &mut W,
    completion: &AutocompleteResult,
    hint: Option<String>,
) -> Result<(), CliError> {
    serde_json::to_writer(&mut *out, &CompletionReply { completion, hint })?;
    writeln!(out)?;
    Ok(())
}

/// Write a completion result as plain text.
pub fn write_completion<W: Write>(out: &mut W, result: &AutocompleteResult) -> Result<(), CliError> {
    match result {
        AutocompleteResult::Single(line) => writeln!(out, "{}", line)?,
        AutocompleteResult::Multiple(common, candidates) => {
            writeln!(out, "{}", common)?;
            writeln!(out, "{}", candidates.join("  "))?;
        }
        AutocompleteResult::None => {}
    }
    Ok(())
}

// =============================================================================
// Interactive Loop
// =============================================================================

/// Run the interactive loop until EOF or an exit command.
pub fn run_repl<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    out: &mut W,
    json: bool,
) -> Result<(), CliError> {
    if !json {
        for line in WELCOME_BANNER.lines() {
            writeln!(out, "{}", line)?;
        }
        writeln!(out)?;
    }

    let mut lines = input.lines();
    loop {
        if !json {
            write!(out, "{}", session.prompt())?;
            out.flush()?;
        }

        let Some(line) = lines.next().transpose()? else {
            break;
        };
        let trimmed = line.trim();
        if EXIT_COMMANDS.contains(&trimmed) {
            break;
        }

        let result = session.submit(trimmed);
        if json {
            write_json(out, &result, session.current_dir())?;
        } else {
            write_result(out, &result)?;
        }
    }

    info!("session ended");
    Ok(())
}
