//! User notifications
//!
//! Short success/info/error messages shown after an action completes.

use serde::Serialize;
use std::fmt;
use std::io::Write;

use crate::api::ApiError;

/// Notice severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Info,
    Error,
}

impl NoticeLevel {
    pub fn icon(&self) -> &'static str {
        match self {
            NoticeLevel::Success => "✓",
            NoticeLevel::Info => "ℹ",
            NoticeLevel::Error => "✕",
        }
    }
}

/// A message for the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.level.icon(), self.message)
    }
}

impl From<&ApiError> for Notice {
    fn from(err: &ApiError) -> Self {
        if err.needs_login() {
            Notice::error(format!("{}. Run `fitfusion login`.", err))
        } else {
            Notice::error(err.to_string())
        }
    }
}

/// Something that can show notices to the user
pub trait Notifier {
    fn notify(&mut self, notice: Notice);

    fn success(&mut self, message: impl Into<String>)
    where
        Self: Sized,
    {
        self.notify(Notice::success(message));
    }

    fn info(&mut self, message: impl Into<String>)
    where
        Self: Sized,
    {
        self.notify(Notice::info(message));
    }

    fn error(&mut self, message: impl Into<String>)
    where
        Self: Sized,
    {
        self.notify(Notice::error(message));
    }
}

/// Prints notices to the terminal; errors go to stderr
#[derive(Debug, Default)]
pub struct TerminalNotifier {
    quiet: bool,
}

impl TerminalNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Suppress success and info notices, e.g. when stdout carries JSON or CSV
    pub fn quiet(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl Notifier for TerminalNotifier {
    fn notify(&mut self, notice: Notice) {
        match notice.level {
            NoticeLevel::Error => {
                tracing::debug!(message = %notice.message, "Error notice");
                let _ = writeln!(std::io::stderr(), "{}", notice);
            }
            _ if self.quiet => {
                tracing::debug!(level = ?notice.level, message = %notice.message, "Notice suppressed");
            }
            _ => {
                let _ = writeln!(std::io::stdout(), "{}", notice);
            }
        }
    }
}

/// Keeps notices in memory
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub notices: Vec<Notice>,
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_display() {
        assert_eq!(Notice::success("Goal added").to_string(), "✓ Goal added");
        assert_eq!(Notice::info("Nothing to do").to_string(), "ℹ Nothing to do");
        assert_eq!(Notice::error("Failed").to_string(), "✕ Failed");
    }

    #[test]
    fn test_notice_from_api_error() {
        let notice = Notice::from(&ApiError::Unauthorized);
        assert_eq!(notice.level, NoticeLevel::Error);
        assert!(notice.message.contains("fitfusion login"));

        let notice = Notice::from(&ApiError::EmailTaken);
        assert_eq!(notice.message, "Email is already registered.");
    }

    #[test]
    fn test_recording_notifier() {
        let mut notifier = RecordingNotifier::default();
        notifier.success("Saved");
        notifier.error("Oops");

        assert_eq!(
            notifier.notices,
            vec![Notice::success("Saved"), Notice::error("Oops")]
        );
    }
}
