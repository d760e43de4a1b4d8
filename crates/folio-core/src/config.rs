//! Application configuration.
//!
//! Centralizes the constants shared by the core and its callers.
//! Text assets are loaded at compile time using `include_str!`.

// =============================================================================
// Text Assets (loaded at compile time)
// =============================================================================

/// Welcome banner shown when a session starts.
pub const WELCOME_BANNER: &str = include_str!("../assets/text/banner.txt");

/// Help text for the `help` command.
pub const HELP_TEXT: &str = include_str!("../assets/text/help.txt");

/// Portfolio blocks, one per static command.
pub mod portfolio {
    pub const ABOUT: &str = include_str!("../assets/text/about.txt");
    pub const SKILLS: &str = include_str!("../assets/text/skills.txt");
    pub const PROJECTS: &str = include_str!("../assets/text/projects.txt");
    pub const EXPERIENCE: &str = include_str!("../assets/text/experience.txt");
    pub const EDUCATION: &str = include_str!("../assets/text/education.txt");
    pub const CONTACT: &str = include_str!("../assets/text/contact.txt");
    pub const SOCIAL: &str = include_str!("../assets/text/social.txt");
}

// =============================================================================
// Filesystem Configuration
// =============================================================================

/// Embedded manifest describing the virtual filesystem.
pub const FILESYSTEM_MANIFEST: &str = include_str!("../assets/filesystem.json");

/// Absolute path of the filesystem root.
pub const ROOT_DIR: &str = "/";

/// Home directory; default working directory and target of a bare `cd`.
pub const HOME_DIR: &str = "/home/aathish";

// =============================================================================
// Identity
// =============================================================================

/// User name reported by `whoami` and shown in the prompt.
pub const USER_NAME: &str = "aathish";

/// Host name shown in the prompt.
pub const HOST_NAME: &str = "portfolio";

// =============================================================================
// Output Sentinels
// =============================================================================

/// Line printed by `ls` for a directory without children.
pub const EMPTY_DIRECTORY: &str = "(empty directory)";

/// Line printed by `cat` for a file without content.
pub const EMPTY_FILE: &str = "(empty file)";

/// Second line appended to the not-found message for unknown commands.
pub const HELP_HINT: &str = "Type 'help' to see available commands.";

/// `chrono` format matching the browser's `Date.toString()` shape.
pub const DATE_FORMAT: &str = "%a %b %d %Y %H:%M:%S GMT%z";
