//! Command execution logic.
//!
//! Runs parsed commands against the virtual filesystem and returns
//! results. Every failure becomes an output line; nothing is propagated.

use tracing::debug;

use crate::config::{EMPTY_DIRECTORY, EMPTY_FILE, HELP_HINT, HOME_DIR};
use crate::core::error::ShellError;
use crate::core::parser::parse_input;
use crate::core::VirtualFs;

use super::{Command, CommandResult, PathArg, ShellCommand};

/// Run one raw input line from `current_dir`.
///
/// Blank input yields an empty result.
pub fn execute_line(fs: &VirtualFs, input: &str, current_dir: &str) -> CommandResult {
    match parse_input(input) {
        Some(parsed) => execute_command(fs, Command::parse(&parsed.name, &parsed.args), current_dir),
        None => CommandResult::empty(),
    }
}

/// Execute a classified command.
///
/// `Clear` only sets the flag on the result; wiping the screen is the
/// caller's job.
pub fn execute_command(fs: &VirtualFs, cmd: Command, current_dir: &str) -> CommandResult {
    match cmd {
        Command::Clear => CommandResult::clear(),
        Command::Shell(shell) => execute_shell(fs, shell, current_dir),
        Command::Static(cmd) => CommandResult::output(cmd.lines()),
        Command::Unknown(name) => {
            debug!(command = %name, "unknown command");
            CommandResult::output(vec![
                ShellError::CommandNotFound(name).to_string(),
                HELP_HINT.to_string(),
            ])
        }
    }
}

/// Run a shell command by name.
///
/// Unrecognized names produce a single `command not found` line.
pub fn run_shell_command(
    fs: &VirtualFs,
    command: &str,
    args: &[String],
    current_dir: &str,
) -> CommandResult {
    match ShellCommand::parse(command, args) {
        Some(cmd) => execute_shell(fs, cmd, current_dir),
        None => ShellError::CommandNotFound(command.to_string()).into(),
    }
}

/// Execute a parsed shell command.
pub fn execute_shell(fs: &VirtualFs, cmd: ShellCommand, current_dir: &str) -> CommandResult {
    debug!(?cmd, cwd = current_dir, "executing shell command");

    let result = match cmd {
        ShellCommand::Ls(path) => execute_ls(fs, path.as_ref(), current_dir).map(CommandResult::output),
        ShellCommand::Cd(path) => execute_cd(fs, path.as_ref(), current_dir).map(CommandResult::navigate),
        ShellCommand::Cat(path) => execute_cat(fs, path.as_ref(), current_dir).map(CommandResult::output),
        ShellCommand::Echo(text) => Ok(CommandResult::output(vec![text])),
        ShellCommand::Pwd => Ok(CommandResult::output(vec![current_dir.to_string()])),
    };

    result.unwrap_or_else(CommandResult::from)
}

/// Execute `ls` command.
fn execute_ls(
    fs: &VirtualFs,
    path: Option<&PathArg>,
    current_dir: &str,
) -> Result<Vec<String>, ShellError> {
    let (target, typed) = match path {
        Some(p) => (VirtualFs::resolve(current_dir, p.as_str()), p.as_str()),
        None => (current_dir.to_string(), current_dir),
    };

    let entry = fs
        .lookup(&target)
        .ok_or_else(|| ShellError::ListNotFound(typed.to_string()))?;
    let children = entry
        .children()
        .ok_or_else(|| ShellError::ListNotDirectory(typed.to_string()))?;

    if children.is_empty() {
        return Ok(vec![EMPTY_DIRECTORY.to_string()]);
    }
    Ok(fs.list_directory(&target))
}

/// Execute `cd` command; returns the new working directory.
fn execute_cd(
    fs: &VirtualFs,
    path: Option<&PathArg>,
    current_dir: &str,
) -> Result<String, ShellError> {
    let Some(path) = path else {
        return Ok(HOME_DIR.to_string());
    };

    if *path == ".." {
        return Ok(VirtualFs::parent_of(current_dir));
    }

    let target = VirtualFs::resolve(current_dir, path.as_str());
    match fs.lookup(&target) {
        Some(entry) if entry.is_directory() => {
            debug!(from = current_dir, to = %target, "changing directory");
            Ok(target)
        }
        Some(_) => Err(ShellError::ChangeDirNotDirectory(path.to_string())),
        None => Err(ShellError::ChangeDirNotFound(path.to_string())),
    }
}

/// Execute `cat` command.
fn execute_cat(
    fs: &VirtualFs,
    file: Option<&PathArg>,
    current_dir: &str,
) -> Result<Vec<String>, ShellError> {
    let file = file.ok_or(ShellError::MissingFileName)?;
    let target = VirtualFs::resolve(current_dir, file.as_str());

    let entry = fs
        .lookup(&target)
        .ok_or_else(|| ShellError::CatNotFound(file.to_string()))?;
    let content = entry
        .content()
        .ok_or_else(|| ShellError::CatIsDirectory(file.to_string()))?;

    if content.is_empty() {
        return Ok(vec![EMPTY_FILE.to_string()]);
    }
    Ok(content.to_vec())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DirectoryEntry, FileEntry, Manifest};

    fn portfolio() -> VirtualFs {
        VirtualFs::portfolio()
    }

    fn run(fs: &VirtualFs, line: &str, cwd: &str) -> CommandResult {
        execute_line(fs, line, cwd)
    }

    #[test]
    fn test_ls_home() {
        let fs = portfolio();
        let result = run(&fs, "ls", HOME_DIR);
        assert_eq!(
            result.output,
            vec!["projects/", "skills/", "about.txt", "contact.txt"]
        );
        assert_eq!(result.navigate_to, None);
    }

    #[test]
    fn test_ls_relative_and_absolute() {
        let fs = portfolio();
        assert_eq!(
            run(&fs, "ls skills", HOME_DIR).output,
            vec!["frontend.txt", "backend.txt", "database.txt"]
        );
        assert_eq!(run(&fs, "ls /", "/usr/bin").output, vec!["home/", "usr/"]);
        assert_eq!(run(&fs, "ls ..", "/usr/bin").output, vec!["bin/"]);
    }

    #[test]
    fn test_ls_empty_directory() {
        let fs = portfolio();
        assert_eq!(run(&fs, "ls /usr/bin", HOME_DIR).output, vec!["(empty directory)"]);
        assert_eq!(run(&fs, "ls", "/usr/bin").output, vec!["(empty directory)"]);
    }

    #[test]
    fn test_ls_errors_echo_typed_path() {
        let fs = portfolio();
        assert_eq!(
            run(&fs, "ls nowhere", HOME_DIR).output,
            vec!["ls: cannot access 'nowhere': No such file or directory"]
        );
        assert_eq!(
            run(&fs, "ls about.txt", HOME_DIR).output,
            vec!["ls: cannot access 'about.txt': Not a directory"]
        );
    }

    #[test]
    fn test_cd_then_pwd() {
        let fs = portfolio();
        let result = run(&fs, "cd projects", HOME_DIR);
        assert!(result.output.is_empty());
        let cwd = result.next_dir(HOME_DIR).to_string();
        assert_eq!(cwd, "/home/aathish/projects");
        assert_eq!(run(&fs, "pwd", &cwd).output, vec![cwd.clone()]);
    }

    #[test]
    fn test_cd_home_and_parent() {
        let fs = portfolio();
        assert_eq!(
            run(&fs, "cd", "/usr/bin").navigate_to.as_deref(),
            Some("/home/aathish")
        );
        assert_eq!(run(&fs, "cd ..", HOME_DIR).navigate_to.as_deref(), Some("/home"));
        assert_eq!(run(&fs, "cd ..", "/").navigate_to.as_deref(), Some("/"));
        assert_eq!(run(&fs, "cd /usr", HOME_DIR).navigate_to.as_deref(), Some("/usr"));
    }

    #[test]
    fn test_cd_errors_keep_cwd() {
        let fs = portfolio();
        let result = run(&fs, "cd nonexistent", HOME_DIR);
        assert_eq!(result.output, vec!["cd: no such file or directory: nonexistent"]);
        assert_eq!(result.next_dir(HOME_DIR), HOME_DIR);

        let result = run(&fs, "cd about.txt", HOME_DIR);
        assert_eq!(result.output, vec!["cd: not a directory: about.txt"]);
        assert_eq!(result.navigate_to, None);
    }

    #[test]
    fn test_cd_success_implies_ls_listed_it() {
        let fs = portfolio();
        let listing = run(&fs, "ls", HOME_DIR).output;
        for name in ["projects", "skills"] {
            assert!(listing.contains(&format!("{name}/")));
            assert!(run(&fs, &format!("cd {name}"), HOME_DIR).navigate_to.is_some());
        }
    }

    #[test]
    fn test_cat_file() {
        let fs = portfolio();
        assert_eq!(
            run(&fs, "cat about.txt", HOME_DIR).output,
            vec!["Full Stack Developer passionate about creating innovative solutions"]
        );
        assert_eq!(
            run(&fs, "cat /home/aathish/contact.txt", "/").output,
            vec![
                "Email: your.email@example.com",
                "LinkedIn: linkedin.com/in/yourprofile"
            ]
        );
    }

    #[test]
    fn test_cat_errors() {
        let fs = portfolio();
        assert_eq!(run(&fs, "cat", HOME_DIR).output, vec!["cat: missing file name"]);
        assert_eq!(
            run(&fs, "cat missing.txt", HOME_DIR).output,
            vec!["cat: missing.txt: No such file or directory"]
        );
        assert_eq!(
            run(&fs, "cat skills", HOME_DIR).output,
            vec!["cat: skills: Is a directory"]
        );
    }

    #[test]
    fn test_empty_argument_counts_as_missing() {
        let fs = portfolio();
        assert_eq!(run(&fs, "cat \"\"", HOME_DIR).output, vec!["cat: missing file name"]);

        let result = run(&fs, "cd ''", "/usr/bin");
        assert!(result.output.is_empty());
        assert_eq!(result.navigate_to.as_deref(), Some(HOME_DIR));

        assert_eq!(run(&fs, "ls \"\"", "/usr").output, vec!["bin/"]);
    }

    #[test]
    fn test_cat_empty_file() {
        let fs = VirtualFs::from_manifest(&Manifest {
            files: vec![FileEntry {
                path: "notes.txt".to_string(),
                content: String::new(),
            }],
            directories: vec![DirectoryEntry {
                path: "void".to_string(),
            }],
        });
        assert_eq!(run(&fs, "cat notes.txt", "/").output, vec!["(empty file)"]);
        assert_eq!(run(&fs, "ls void", "/").output, vec!["(empty directory)"]);
    }

    #[test]
    fn test_echo() {
        let fs = portfolio();
        assert_eq!(run(&fs, "echo hello world", HOME_DIR).output, vec!["hello world"]);
        assert_eq!(run(&fs, "echo", HOME_DIR).output, vec![""]);
    }

    #[test]
    fn test_static_commands() {
        let fs = portfolio();
        assert_eq!(run(&fs, "whoami", HOME_DIR).output, vec!["aathish"]);
        assert_eq!(run(&fs, "help", HOME_DIR).output[0], "Available commands:");
    }

    #[test]
    fn test_clear_sets_flag() {
        let fs = portfolio();
        let result = run(&fs, "clear", HOME_DIR);
        assert!(result.clear);
        assert!(result.output.is_empty());
    }

    #[test]
    fn test_unknown_command_hint() {
        let fs = portfolio();
        assert_eq!(
            run(&fs, "lls", HOME_DIR).output,
            vec![
                "lls: command not found",
                "Type 'help' to see available commands."
            ]
        );
    }

    #[test]
    fn test_blank_line() {
        let fs = portfolio();
        assert_eq!(run(&fs, "   ", HOME_DIR), CommandResult::empty());
    }

    #[test]
    fn test_run_shell_command_contract() {
        let fs = portfolio();
        let result = run_shell_command(&fs, "cd", &["skills".to_string()], HOME_DIR);
        assert_eq!(result.navigate_to.as_deref(), Some("/home/aathish/skills"));

        let result = run_shell_command(&fs, "about", &[], HOME_DIR);
        assert_eq!(result.output, vec!["about: command not found"]);
    }
}
