//! Transient operation feedback.
//!
//! # Responsibility
//! - Print success/error styled feedback lines after add/toggle flows.
//! - Suppress feedback for silent outcomes.

use bookhub_core::ActionOutcome;
use std::io::{self, Write};

/// Feedback styling category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    fn tag(self) -> &'static str {
        match self {
            Self::Success => "ok",
            Self::Error => "error",
        }
    }
}

/// Prints one styled feedback line.
pub fn notify(out: &mut dyn Write, kind: NotificationKind, message: &str) -> io::Result<()> {
    writeln!(out, "[{}] {}", kind.tag(), message)
}

/// Prints feedback for an operation outcome; silent outcomes print nothing.
pub fn notify_outcome(out: &mut dyn Write, outcome: &ActionOutcome) -> io::Result<()> {
    if outcome.is_silent() {
        return Ok(());
    }

    let kind = if outcome.ok {
        NotificationKind::Success
    } else {
        NotificationKind::Error
    };
    notify(out, kind, &outcome.message)
}
