//! [`Notifier`] backed by a Dioxus signal.
//!
//! Every call replaces the signal's value; `NoticeModal` renders it.

use dioxus::prelude::*;
use reelfind_core::notifier::{Notice, NoticeKind, Notifier};
use std::cell::Cell;
use std::time::Duration;

pub struct SignalNotifier {
    notice: Signal<Option<Notice>>,
    next_id: Cell<u64>,
}

impl SignalNotifier {
    pub fn new(notice: Signal<Option<Notice>>) -> Self {
        Self {
            notice,
            next_id: Cell::new(1),
        }
    }

    fn show(&self, kind: NoticeKind, title: &str, text: &str, auto_dismiss: Option<Duration>) {
        let id = self.next_id.get();
        self.next_id.set(id + 1);

        let mut notice = self.notice;
        notice.set(Some(Notice {
            id,
            kind,
            title: title.to_string(),
            text: text.to_string(),
            auto_dismiss,
        }));
    }
}

impl Notifier for SignalNotifier {
    fn show_blocking_progress(&self, title: &str, text: &str) {
        self.show(NoticeKind::Progress, title, text, None);
    }

    fn dismiss(&self) {
        let mut notice = self.notice;
        notice.set(None);
    }

    fn show_error(&self, title: &str, text: &str) {
        self.show(NoticeKind::Error, title, text, None);
    }

    fn show_info(&self, title: &str, text: &str) {
        self.show(NoticeKind::Info, title, text, None);
    }

    fn show_success(&self, title: &str, text: &str, auto_dismiss: Duration) {
        self.show(NoticeKind::Success, title, text, Some(auto_dismiss));
    }
}
