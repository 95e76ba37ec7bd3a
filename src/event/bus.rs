use crate::event::StateObserver;
use crate::state::EditorState;

/// Broadcasts editor states to registered observers, in subscription order.
#[derive(Default)]
pub struct ObserverBus {
    observers: Vec<Box<dyn StateObserver>>,
}

impl std::fmt::Debug for ObserverBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverBus")
            .field("observers", &format!("<{} observers>", self.observers.len()))
            .finish()
    }
}

impl ObserverBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, observer: Box<dyn StateObserver>) {
        self.observers.push(observer);
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    pub fn emit(&mut self, state: &EditorState) {
        for observer in &mut self.observers {
            observer.state_changed(state);
        }
    }
}
