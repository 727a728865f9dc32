use std::cell::RefCell;

use faqdesk::api::{SessionEnd, SessionListener};

/// Records every session-end event in order
#[derive(Debug, Default)]
pub struct RecordingListener {
    events: RefCell<Vec<SessionEnd>>,
}

impl RecordingListener {
    pub fn events(&self) -> Vec<SessionEnd> {
        self.events.borrow().clone()
    }
}

impl SessionListener for RecordingListener {
    fn session_ended(&self, reason: SessionEnd) {
        self.events.borrow_mut().push(reason);
    }
}
