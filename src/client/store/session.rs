use dioxus::prelude::*;
use faqdesk::api::{SessionEnd, SessionListener};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Transient message shown at the bottom of the page until dismissed
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

/// Admin session state shared through context
///
/// `ended` is written by the API client when it ends a session; the navbar layout consumes it
/// with [`SessionState::take_ended`] and performs the redirect.
#[derive(Clone, Copy, PartialEq)]
pub struct SessionState {
    pub logged_in: Signal<bool>,
    pub ended: Signal<Option<SessionEnd>>,
    pub notices: Signal<Vec<Notice>>,
}

impl SessionState {
    pub fn new(logged_in: bool) -> Self {
        Self {
            logged_in: Signal::new(logged_in),
            ended: Signal::new(None),
            notices: Signal::new(Vec::new()),
        }
    }

    pub fn notify_success(mut self, message: impl Into<String>) {
        self.notices.write().push(Notice {
            kind: NoticeKind::Success,
            message: message.into(),
        });
    }

    pub fn notify_error(mut self, message: impl Into<String>) {
        self.notices.write().push(Notice {
            kind: NoticeKind::Error,
            message: message.into(),
        });
    }

    pub fn dismiss(mut self, index: usize) {
        let mut notices = self.notices.write();
        if index < notices.len() {
            notices.remove(index);
        }
    }

    pub fn clear_notices(mut self) {
        self.notices.write().clear();
    }

    /// Consumes a pending session end and queues its notice
    ///
    /// Returns the reason once; later calls return `None` until the session ends again.
    pub fn take_ended(mut self) -> Option<SessionEnd> {
        let reason = (self.ended)()?;

        self.ended.set(None);
        self.notify_error(reason.notice());

        Some(reason)
    }
}

impl SessionListener for SessionState {
    fn session_ended(&self, reason: SessionEnd) {
        let mut ended = self.ended;
        let mut logged_in = self.logged_in;

        logged_in.set(false);
        ended.set(Some(reason));
    }
}
