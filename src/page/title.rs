//! Document title handling
//!
//! A [`TitleGuard`] writes a page's title on mount and restores the previous
//! one when dropped. With overlapping pages the last write wins.

use std::cell::RefCell;
use std::rc::Rc;

/// Where the document title lives
pub trait TitleSink {
    fn current(&self) -> String;
    fn set(&self, title: &str);
}

/// Holds a page's title for as long as the page is mounted
pub struct TitleGuard<S: TitleSink> {
    sink: S,
    previous: String,
}

impl<S: TitleSink> TitleGuard<S> {
    pub fn apply(sink: S, title: &str) -> Self {
        let previous = sink.current();
        sink.set(title);
        Self { sink, previous }
    }

    /// Title that will be restored on drop
    pub fn previous(&self) -> &str {
        &self.previous
    }
}

impl<S: TitleSink> Drop for TitleGuard<S> {
    fn drop(&mut self) {
        self.sink.set(&self.previous);
    }
}

/// In-memory title, shared between clones
#[derive(Debug, Clone, Default)]
pub struct MemoryTitle(Rc<RefCell<String>>);

impl MemoryTitle {
    pub fn new(initial: &str) -> Self {
        Self(Rc::new(RefCell::new(initial.to_string())))
    }
}

impl TitleSink for MemoryTitle {
    fn current(&self) -> String {
        self.0.borrow().clone()
    }

    fn set(&self, title: &str) {
        *self.0.borrow_mut() = title.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_restores_previous_title() {
        let document = MemoryTitle::new("Estate CRM");
        {
            let guard = TitleGuard::apply(document.clone(), "Client List | Dashboard - Estate CRM");
            assert_eq!(document.current(), "Client List | Dashboard - Estate CRM");
            assert_eq!(guard.previous(), "Estate CRM");
        }
        assert_eq!(document.current(), "Estate CRM");
    }

    #[test]
    fn test_overlapping_guards_last_write_wins() {
        let document = MemoryTitle::new("root");
        let first = TitleGuard::apply(document.clone(), "first");
        let second = TitleGuard::apply(document.clone(), "second");
        assert_eq!(document.current(), "second");

        // The outgoing page unmounts after the incoming one mounted
        drop(first);
        assert_eq!(document.current(), "root");
        drop(second);
        assert_eq!(document.current(), "first");
    }
}
