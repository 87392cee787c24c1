use std::cell::RefCell;
use std::rc::Rc;

/// Shared, cloneable event recorder for ordering assertions.
///
/// Fake tasks and completion observers append labelled events ("a:step",
/// "a:done", ...) and tests assert on counts and relative order. Cloning
/// is cheap and all clones share the same underlying list, so a clone
/// can be moved into an observer closure while the test keeps its own
/// handle.
#[derive(Clone, Default)]
pub struct EventLog {
    events: Rc<RefCell<Vec<String>>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, event: impl Into<String>) {
        self.events.borrow_mut().push(event.into());
    }

    pub fn events(&self) -> Vec<String> {
        self.events.borrow().clone()
    }

    /// Index of the first occurrence of `event`, if any.
    pub fn index_of(&self, event: &str) -> Option<usize> {
        self.events.borrow().iter().position(|e| e == event)
    }

    /// Number of occurrences of `event`.
    pub fn count_of(&self, event: &str) -> usize {
        self.events.borrow().iter().filter(|e| *e == event).count()
    }

    /// Whether the first occurrence of `a` precedes the first
    /// occurrence of `b`. Both events must be present.
    pub fn happened_before(&self, a: &str, b: &str) -> bool {
        match (self.index_of(a), self.index_of(b)) {
            (Some(ia), Some(ib)) => ia < ib,
            _ => false,
        }
    }
}
