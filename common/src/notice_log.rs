//! Bounded list of user-facing notices.

use crate::recommender_const::MAX_NOTICES;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct NoticeLog {
    notices: Vec<String>,
}

impl NoticeLog {
    /// Appends `message` unless it repeats the newest notice. The oldest
    /// notices are dropped past `MAX_NOTICES`. Returns false if nothing was added.
    pub fn push(&mut self, message: impl Into<String>) -> bool {
        let message = message.into();
        if self.notices.last() == Some(&message) {
            return false;
        }
        self.notices.push(message);
        if self.notices.len() > MAX_NOTICES {
            let overflow = self.notices.len() - MAX_NOTICES;
            self.notices.drain(..overflow);
        }
        true
    }

    pub fn dismiss(&mut self, index: usize) {
        if index < self.notices.len() {
            self.notices.remove(index);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.notices.iter()
    }

    pub fn len(&self) -> usize {
        self.notices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_failures_show_once() {
        let mut log = NoticeLog::default();
        assert!(log.push("Could not load modules: timed out"));
        assert!(!log.push("Could not load modules: timed out"));
        assert!(log.push("No matching topics found for \"xyz\""));
        assert!(log.push("Could not load modules: timed out"));
        assert_eq!(log.len(), 3);
    }

    #[test]
    fn oldest_notices_are_dropped_past_the_cap() {
        let mut log = NoticeLog::default();
        for i in 0..MAX_NOTICES + 2 {
            log.push(format!("failure {i}"));
        }
        assert_eq!(log.len(), MAX_NOTICES);
        assert_eq!(log.iter().next().map(String::as_str), Some("failure 2"));
    }

    #[test]
    fn dismiss_out_of_range_is_ignored() {
        let mut log = NoticeLog::default();
        log.push("a");
        log.dismiss(3);
        log.dismiss(0);
        assert!(log.is_empty());
    }
}
