mod bus;
mod handlers;

use std::cell::RefCell;
use std::rc::Rc;

use crate::state::EditorState;

pub use bus::ObserverBus;
pub use handlers::HistoryLogger;

/// Receives every new editor state after a dispatch.
///
/// Observers are notified unconditionally; each decides for itself whether
/// the new state is worth acting on.
pub trait StateObserver {
    fn state_changed(&mut self, state: &EditorState);
}

/// Lets the owner of an observer keep a handle to it after subscribing.
impl<T: StateObserver> StateObserver for Rc<RefCell<T>> {
    fn state_changed(&mut self, state: &EditorState) {
        self.borrow_mut().state_changed(state);
    }
}
