//! Tab completion for command names and paths.
//!
//! - Command names (e.g., "cle" -> "clear")
//! - Directory paths for `cd`, `ls`
//! - File and directory paths for `cat`
//!
//! A single match completes immediately; several matches return their
//! common prefix along with the candidates.

use serde::Serialize;

use crate::core::{Command, DirEntry, VirtualFs};

// ============================================================================
// Public Types
// ============================================================================

/// Result of an autocomplete attempt.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum AutocompleteResult {
    /// Single match - replace the input with this value.
    Single(String),
    /// Multiple matches - (common_prefix, all_matches).
    Multiple(String, Vec<String>),
    /// No matches found.
    None,
}

// ============================================================================
// Completion Context
// ============================================================================

/// Commands that accept directory paths as arguments.
const DIR_COMMANDS: &[&str] = &["cd", "ls"];

/// Commands that accept file paths as arguments.
const FILE_COMMANDS: &[&str] = &["cat"];

#[derive(Debug, Clone, Copy, PartialEq)]
enum CompletionMode {
    Command,
    DirectoryPath,
    FilePath,
    None,
}

impl CompletionMode {
    /// Determine completion mode from input.
    ///
    /// The command name ends at the first whitespace run; the rest, with
    /// leading whitespace dropped, is the partial argument.
    fn from_input(input: &str) -> (Self, Vec<&str>) {
        let Some((cmd, rest)) = input.split_once(char::is_whitespace) else {
            return (Self::Command, vec![input]);
        };
        let parts = vec![cmd, rest.trim_start()];

        let cmd_lower = parts[0].to_lowercase();
        let mode = if DIR_COMMANDS.contains(&cmd_lower.as_str()) {
            Self::DirectoryPath
        } else if FILE_COMMANDS.contains(&cmd_lower.as_str()) {
            Self::FilePath
        } else {
            Self::None
        };

        (mode, parts)
    }

    fn dirs_only(self) -> bool {
        matches!(self, Self::DirectoryPath)
    }
}

// ============================================================================
// Path Parsing
// ============================================================================

/// Partial path split into the typed directory and the name being completed.
struct ParsedPath<'a> {
    /// Directory prefix as typed (e.g., "projects/" or "").
    dir_part: &'a str,
    /// Name being completed.
    name_part: &'a str,
    /// Absolute directory to search.
    search_dir: String,
}

impl<'a> ParsedPath<'a> {
    fn parse(partial: &'a str, current_dir: &str) -> Self {
        let (dir_part, name_part) = match partial.rfind('/') {
            Some(idx) => (&partial[..=idx], &partial[idx + 1..]),
            None => ("", partial),
        };

        let search_dir = match dir_part {
            "" => current_dir.to_string(),
            "/" => "/".to_string(),
            dir => VirtualFs::resolve(current_dir, dir.trim_end_matches('/')),
        };

        Self {
            dir_part,
            name_part,
            search_dir,
        }
    }
}

// ============================================================================
// Public API
// ============================================================================

/// Perform autocomplete on Tab press.
pub fn autocomplete(fs: &VirtualFs, input: &str, current_dir: &str) -> AutocompleteResult {
    let input = input.trim_start();
    if input.is_empty() {
        return AutocompleteResult::None;
    }

    let (mode, parts) = CompletionMode::from_input(input);

    match mode {
        CompletionMode::Command => complete_command(parts[0]),
        CompletionMode::DirectoryPath | CompletionMode::FilePath => {
            complete_path(fs, parts[0], parts[1], current_dir, mode.dirs_only())
        }
        CompletionMode::None => AutocompleteResult::None,
    }
}

/// Ghost-text hint while typing: the suffix that would complete the input.
pub fn get_hint(fs: &VirtualFs, input: &str, current_dir: &str) -> Option<String> {
    let input = input.trim_start();
    if input.is_empty() {
        return None;
    }

    let (mode, parts) = CompletionMode::from_input(input);

    match mode {
        CompletionMode::Command => get_command_hint(parts[0]),
        CompletionMode::DirectoryPath | CompletionMode::FilePath => {
            get_path_hint(fs, parts[1], current_dir, mode.dirs_only())
        }
        CompletionMode::None => None,
    }
}

// ============================================================================
// Command Completion
// ============================================================================

fn complete_command(partial: &str) -> AutocompleteResult {
    let partial_lower = partial.to_lowercase();
    let matches: Vec<String> = Command::names()
        .into_iter()
        .filter(|cmd| cmd.starts_with(&partial_lower))
        .map(str::to_string)
        .collect();

    match matches.len() {
        0 => AutocompleteResult::None,
        1 => AutocompleteResult::Single(format!("{} ", matches[0])),
        _ => {
            let common = find_common_prefix(&matches);
            AutocompleteResult::Multiple(common, matches)
        }
    }
}

fn get_command_hint(partial: &str) -> Option<String> {
    let partial_lower = partial.to_lowercase();
    Command::names()
        .into_iter()
        .find(|cmd| cmd.starts_with(&partial_lower) && *cmd != partial_lower)
        .map(|cmd| cmd[partial_lower.len()..].to_string())
}

// ============================================================================
// Path Completion
// ============================================================================

fn complete_path(
    fs: &VirtualFs,
    cmd: &str,
    partial: &str,
    current_dir: &str,
    dirs_only: bool,
) -> AutocompleteResult {
    let parsed = ParsedPath::parse(partial, current_dir);
    let Some(entries) = fs.list_dir(&parsed.search_dir) else {
        return AutocompleteResult::None;
    };

    let matches = matching_entries(&entries, parsed.name_part, dirs_only);
    build_path_result(cmd, &parsed, &matches)
}

fn get_path_hint(fs: &VirtualFs, partial: &str, current_dir: &str, dirs_only: bool) -> Option<String> {
    let parsed = ParsedPath::parse(partial, current_dir);
    let entries = fs.list_dir(&parsed.search_dir)?;
    let matches = matching_entries(&entries, parsed.name_part, dirs_only);

    let name_lower = parsed.name_part.to_lowercase();
    matches
        .iter()
        .find(|entry| entry.name.to_lowercase() != name_lower)
        .and_then(|entry| {
            let rest = entry.name.get(parsed.name_part.len()..)?;
            let suffix = if entry.is_dir { "/" } else { "" };
            Some(format!("{}{}", rest, suffix))
        })
}

/// Entries whose name starts with `name_part` (case-insensitive).
fn matching_entries<'a>(entries: &'a [DirEntry], name_part: &str, dirs_only: bool) -> Vec<&'a DirEntry> {
    let name_lower = name_part.to_lowercase();
    entries
        .iter()
        .filter(|entry| !dirs_only || entry.is_dir)
        .filter(|entry| entry.name.to_lowercase().starts_with(&name_lower))
        .collect()
}

fn build_path_result(cmd: &str, parsed: &ParsedPath, matches: &[&DirEntry]) -> AutocompleteResult {
    match matches {
        [] => AutocompleteResult::None,
        [entry] => {
            let suffix = if entry.is_dir { "/" } else { " " };
            AutocompleteResult::Single(format!("{} {}{}{}", cmd, parsed.dir_part, entry.name, suffix))
        }
        _ => {
            let paths: Vec<String> = matches
                .iter()
                .map(|entry| format!("{}{}", parsed.dir_part, entry.name))
                .collect();
            let common = find_common_prefix(&paths);
            let display_names = matches.iter().map(|entry| entry.display_name()).collect();
            AutocompleteResult::Multiple(format!("{} {}", cmd, common), display_names)
        }
    }
}

// ============================================================================
// Utilities
// ============================================================================

/// Find the common prefix of multiple strings (case-insensitive).
fn find_common_prefix(strings: &[String]) -> String {
    let Some((first, rest)) = strings.split_first() else {
        return String::new();
    };

    let mut prefix_chars = first.chars().count();
    for s in rest {
        prefix_chars = first
            .chars()
            .zip(s.chars())
            .take(prefix_chars)
            .take_while(|(a, b)| a.to_lowercase().eq(b.to_lowercase()))
            .count();
    }

    first.chars().take(prefix_chars).collect()
}

// ============================================================================
// Tests
// ============================================================================
