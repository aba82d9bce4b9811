//! User-facing notification surface.
//!
//! The session reports every lifecycle point through [`Notifier`]. The app
//! renders whatever the notifier last received as a modal; tests record the
//! calls.

use std::time::Duration;

/// Modal/alert surface consumed by [`crate::session::SearchSession`].
///
/// At most one notice is visible at a time; each `show_*` call replaces the
/// current one.
pub trait Notifier {
    /// Blocking, non-dismissable progress indicator.
    fn show_blocking_progress(&self, title: &str, text: &str);

    /// Closes whatever notice is open.
    fn dismiss(&self);

    fn show_error(&self, title: &str, text: &str);

    fn show_info(&self, title: &str, text: &str);

    /// Brief confirmation without a confirm button, closed after `auto_dismiss`.
    fn show_success(&self, title: &str, text: &str, auto_dismiss: Duration);
}

/// Visual flavor of a [`Notice`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Progress,
    Error,
    Info,
    Success,
}

impl NoticeKind {
    /// CSS modifier used by the modal.
    pub fn css_modifier(self) -> &'static str {
        match self {
            NoticeKind::Progress => "progress",
            NoticeKind::Error => "error",
            NoticeKind::Info => "info",
            NoticeKind::Success => "success",
        }
    }
}

/// A notification as data, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Distinguishes two notices with identical text, so a pending
    /// auto-dismiss never closes a newer notice.
    pub id: u64,
    pub kind: NoticeKind,
    pub title: String,
    pub text: String,
    pub auto_dismiss: Option<Duration>,
}

impl Notice {
    /// Progress notices block the page; everything else can be closed.
    pub fn is_dismissable(&self) -> bool {
        self.kind != NoticeKind::Progress
    }

    /// Success notices hide their confirm button.
    pub fn shows_confirm_button(&self) -> bool {
        self.is_dismissable() && self.kind != NoticeKind::Success
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notice(kind: NoticeKind) -> Notice {
        Notice {
            id: 1,
            kind,
            title: "t".into(),
            text: "x".into(),
            auto_dismiss: None,
        }
    }

    #[test]
    fn test_progress_is_blocking() {
        let progress = notice(NoticeKind::Progress);
        assert!(!progress.is_dismissable());
        assert!(!progress.shows_confirm_button());
    }

    #[test]
    fn test_confirm_button_visibility() {
        assert!(notice(NoticeKind::Error).shows_confirm_button());
        assert!(notice(NoticeKind::Info).shows_confirm_button());
        assert!(!notice(NoticeKind::Success).shows_confirm_button());
        assert!(notice(NoticeKind::Success).is_dismissable());
    }
}
