//! Collaborators supplied by the host environment: user-facing notices and
//! yes/no confirmation.

use std::io::{self, Write};

use crate::error::{CatalogError, Result};

/// Short message emitted after every mutation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Created,
    Updated,
    Deleted,
    Activated(String),
    Deactivated(String),
    Failed(String),
}

impl Notice {
    pub fn is_failure(&self) -> bool {
        matches!(self, Notice::Failed(_))
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Notice::Created => write!(f, "New therapy module created successfully!"),
            Notice::Updated => write!(f, "Therapy module updated successfully!"),
            Notice::Deleted => write!(f, "Therapy module deleted successfully!"),
            Notice::Activated(title) => write!(f, "{} activated", title),
            Notice::Deactivated(title) => write!(f, "{} deactivated", title),
            Notice::Failed(message) => write!(f, "{}", message),
        }
    }
}

pub trait Notifier {
    fn notify(&mut self, notice: &Notice);
}

/// Prints successes to stdout and failures to stderr.
#[derive(Debug, Default)]
pub struct TerminalNotifier {
    quiet: bool,
}

impl TerminalNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Suppress all output, for machine-readable modes.
    pub fn quiet() -> Self {
        Self { quiet: true }
    }
}

impl Notifier for TerminalNotifier {
    fn notify(&mut self, notice: &Notice) {
        if self.quiet {
            return;
        }
        if notice.is_failure() {
            eprintln!("{}", notice);
        } else {
            println!("{}", notice);
        }
    }
}

/// Collects notices in memory.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub notices: Vec<Notice>,
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, notice: &Notice) {
        self.notices.push(notice.clone());
    }
}

/// Blocking yes/no question.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> Result<bool>;
}

/// Answers every prompt with a fixed reply.
#[derive(Debug, Clone, Copy)]
pub struct FixedAnswer(pub bool);

impl Confirm for FixedAnswer {
    fn confirm(&mut self, _prompt: &str) -> Result<bool> {
        Ok(self.0)
    }
}

/// Asks on the terminal; refuses to guess when stdin is not interactive.
#[derive(Debug, Default)]
pub struct TerminalConfirm;

impl Confirm for TerminalConfirm {
    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        eprint!("{} [y/N] ", prompt);
        io::stderr().flush()?;

        if !atty::is(atty::Stream::Stdin) {
            eprintln!();
            return Err(CatalogError::Storage(
                "Use --force to delete in non-interactive mode".to_string(),
            ));
        }

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        Ok(input.trim().eq_ignore_ascii_case("y"))
    }
}

pub fn delete_prompt(title: &str) -> String {
    format!(
        "Are you sure you want to delete \"{}\"? This action cannot be undone.",
        title
    )
}
