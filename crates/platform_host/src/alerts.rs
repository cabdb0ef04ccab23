//! Blocking user notices (alert and confirm dialogs).

use std::{cell::RefCell, collections::VecDeque, rc::Rc};

/// Host service for modal alert/confirm prompts.
///
/// Browser dialogs are synchronous, so unlike the storage contracts this trait is not async.
pub trait AlertService {
    /// Shows a message the user must acknowledge.
    fn alert(&self, message: &str);

    /// Asks a yes/no question. Returns `true` when the user accepts.
    fn confirm(&self, message: &str) -> bool;
}

#[derive(Debug, Clone, Copy, Default)]
/// Alert service that swallows alerts and accepts every confirmation.
pub struct NoopAlertService;

impl AlertService for NoopAlertService {
    fn alert(&self, _message: &str) {}

    fn confirm(&self, _message: &str) -> bool {
        true
    }
}

#[derive(Debug, Default)]
struct RecordedPrompts {
    alerts: Vec<String>,
    confirms: Vec<String>,
    answers: VecDeque<bool>,
}

#[derive(Debug, Clone, Default)]
/// Alert service that records prompts and replays scripted confirm answers.
///
/// Confirmations with no scripted answer are declined.
pub struct MemoryAlertService {
    inner: Rc<RefCell<RecordedPrompts>>,
}

impl MemoryAlertService {
    /// Queues the answer for the next [`AlertService::confirm`] call.
    pub fn answer_next_confirm(&self, accept: bool) {
        self.inner.borrow_mut().answers.push_back(accept);
    }

    /// Alerts shown so far.
    pub fn alerts(&self) -> Vec<String> {
        self.inner.borrow().alerts.clone()
    }

    /// Confirm prompts shown so far.
    pub fn confirms(&self) -> Vec<String> {
        self.inner.borrow().confirms.clone()
    }
}

impl AlertService for MemoryAlertService {
    fn alert(&self, message: &str) {
        self.inner.borrow_mut().alerts.push(message.to_string());
    }

    fn confirm(&self, message: &str) -> bool {
        let mut inner = self.inner.borrow_mut();
        inner.confirms.push(message.to_string());
        inner.answers.pop_front().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_alerts_record_and_replay() {
        let alerts = MemoryAlertService::default();
        alerts.answer_next_confirm(true);
        alerts.alert("saved");
        assert!(alerts.confirm("delete?"));
        assert!(!alerts.confirm("again?"));
        assert_eq!(alerts.alerts(), vec!["saved".to_string()]);
        assert_eq!(alerts.confirms().len(), 2);
    }
}
