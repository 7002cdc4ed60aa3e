//! Simple event bus for handing async results back to the owner of some state.
//!
//! The bus is single-threaded (WASM constraint) and uses interior mutability
//! via RefCell. Events are buffered and drained by the owner on each frame.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// Shared event bus, clone-cheap via Rc.
pub struct EventBus<E> {
    inner: Rc<RefCell<VecDeque<E>>>,
}

impl<E> EventBus<E> {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(VecDeque::new())),
        }
    }

    /// Publish an event. Called from callbacks and spawned futures.
    pub fn emit(&self, event: E) {
        self.inner.borrow_mut().push_back(event);
    }

    /// Drain all pending events in the order they were emitted.
    pub fn drain(&self) -> Vec<E> {
        self.inner.borrow_mut().drain(..).collect()
    }

    /// Check if there are pending events (useful for egui repaint triggers).
    pub fn has_pending(&self) -> bool {
        !self.inner.borrow().is_empty()
    }
}

impl<E> Clone for EventBus<E> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<E> Default for EventBus<E> {
    fn default() -> Self {
        Self::new()
    }
}
