use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

use super::types::{ContactAction, ContactFormState};

/// Where the controller keeps its form state.
///
/// `update` must apply the closure as a single step; the submit guard relies
/// on reading and changing the status without another task interleaving.
pub trait FormStore: Clone + 'static {
    fn update<R>(&self, f: impl FnOnce(&mut ContactFormState) -> R) -> R;

    fn snapshot(&self) -> ContactFormState;

    fn dispatch(&self, action: ContactAction) {
        self.update(|state| state.reduce_in_place(action));
    }
}

// Component-owned state: writes notify every reader of the signal
impl FormStore for Signal<ContactFormState> {
    fn update<R>(&self, f: impl FnOnce(&mut ContactFormState) -> R) -> R {
        let mut signal = *self;
        signal.with_mut(f)
    }

    fn snapshot(&self) -> ContactFormState {
        (*self.peek()).clone()
    }
}

/// Plain shared state for use outside a Dioxus runtime.
#[derive(Clone, Default)]
pub struct LocalFormStore(Rc<RefCell<ContactFormState>>);

impl LocalFormStore {
    pub fn new(state: ContactFormState) -> Self {
        Self(Rc::new(RefCell::new(state)))
    }
}

impl FormStore for LocalFormStore {
    fn update<R>(&self, f: impl FnOnce(&mut ContactFormState) -> R) -> R {
        f(&mut self.0.borrow_mut())
    }

    fn snapshot(&self) -> ContactFormState {
        self.0.borrow().clone()
    }
}
