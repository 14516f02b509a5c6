//! Simple event bus for decoupled communication between the session machine,
//! its async collaborators, and the UI.
//!
//! The bus is single-threaded (WASM constraint) and uses interior mutability
//! via RefCell. Items are buffered and drained by the app on each frame.
//! Two buses exist at runtime: machine → UI (`SessionEvent`) and
//! timers/collaborator tasks → machine (`Input`).

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// Shared event bus: clone-cheap via Rc.
pub struct EventBus<E> {
    inner: Rc<RefCell<VecDeque<E>>>,
}

impl<E> EventBus<E> {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(VecDeque::new())),
        }
    }

    /// Publish an item.
    pub fn emit(&self, event: E) {
        self.inner.borrow_mut().push_back(event);
    }

    /// Drain all pending items in arrival order.
    pub fn drain(&self) -> Vec<E> {
        self.inner.borrow_mut().drain(..).collect()
    }

    /// Check if there are pending items (useful for egui repaint triggers).
    pub fn has_pending(&self) -> bool {
        !self.inner.borrow().is_empty()
    }
}

// Manual impl: cloning the handle must not require `E: Clone`.
impl<E> Clone for EventBus<E> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<E> Default for EventBus<E> {
    fn default() -> Self {
        Self::new()
    }
}
