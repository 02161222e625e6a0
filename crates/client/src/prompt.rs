//! How the optional status-change comment is obtained.
//!
//! Kept behind a trait so the commit-building logic in the store stays
//! testable without a terminal attached.

use std::io::{self, BufRead, Write};

use ideaflow_core::IdeaStatus;

/// Source of the optional comment attached to a status change.
pub trait CommentPrompt {
    /// Ask for a comment for the transition to `status`. `None` means the
    /// user skipped it.
    fn comment_for(&self, status: IdeaStatus) -> Option<String>;
}

/// Interactive prompt on stdin/stdout.
pub struct StdinPrompt;

impl CommentPrompt for StdinPrompt {
    fn comment_for(&self, status: IdeaStatus) -> Option<String> {
        print!("Add a comment for the change to \"{status}\" (press Enter to skip): ");
        io::stdout().flush().ok()?;

        let mut line = String::new();
        io::stdin().lock().read_line(&mut line).ok()?;

        let line = line.trim_end_matches(['\r', '\n']);
        if line.is_empty() {
            None
        } else {
            Some(line.to_string())
        }
    }
}
