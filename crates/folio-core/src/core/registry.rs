//! Static portfolio commands.
//!
//! Each command maps to canned text or, for `date`, a value computed on
//! call. Every variant produces output through the same `lines()` shape.

use chrono::Local;

use crate::config::{portfolio, DATE_FORMAT, HELP_TEXT, USER_NAME};

/// Fixed commands whose output does not depend on the filesystem.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StaticCommand {
    Help,
    About,
    Skills,
    Projects,
    Experience,
    Education,
    Contact,
    Social,
    Whoami,
    Date,
    /// Produces nothing; the caller discards prior output instead.
    Clear,
}

impl StaticCommand {
    /// All static commands in declaration order.
    pub const ALL: [StaticCommand; 11] = [
        Self::Help,
        Self::About,
        Self::Skills,
        Self::Projects,
        Self::Experience,
        Self::Education,
        Self::Contact,
        Self::Social,
        Self::Whoami,
        Self::Date,
        Self::Clear,
    ];

    /// Look up a command by exact name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|cmd| cmd.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Help => "help",
            Self::About => "about",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Experience => "experience",
            Self::Education => "education",
            Self::Contact => "contact",
            Self::Social => "social",
            Self::Whoami => "whoami",
            Self::Date => "date",
            Self::Clear => "clear",
        }
    }

    /// Produce the command output.
    pub fn lines(self) -> Vec<String> {
        match self {
            Self::Help => text_lines(HELP_TEXT),
            Self::About => text_lines(portfolio::ABOUT),
            Self::Skills => text_lines(portfolio::SKILLS),
            Self::Projects => text_lines(portfolio::PROJECTS),
            Self::Experience => text_lines(portfolio::EXPERIENCE),
            Self::Education => text_lines(portfolio::EDUCATION),
            Self::Contact => text_lines(portfolio::CONTACT),
            Self::Social => text_lines(portfolio::SOCIAL),
            Self::Whoami => vec![USER_NAME.to_string()],
            Self::Date => vec![Local::now().format(DATE_FORMAT).to_string()],
            Self::Clear => Vec::new(),
        }
    }
}

fn text_lines(text: &str) -> Vec<String> {
    text.lines().map(str::to_string).collect()
}

/// Names of every static command.
pub fn names() -> impl Iterator<Item = &'static str> {
    StaticCommand::ALL.into_iter().map(StaticCommand::name)
}

/// Check whether a static command exists.
pub fn has(name: &str) -> bool {
    StaticCommand::from_name(name).is_some()
}

/// Run a static command by name; `None` if it does not exist.
pub fn get(name: &str) -> Option<Vec<String>> {
    StaticCommand::from_name(name).map(StaticCommand::lines)
}
