//! The session controller.
//!
//! Owns the authoritative [`EditorState`], routes pointer drags into the
//! active tool and pushes every new state to its observers. Everything runs
//! on one thread: a dispatch completes (reduce, swap, notify) before the next
//! event is looked at.

use std::cell::Cell;
use std::rc::Rc;

use log::debug;

use crate::error::EditorError;
use crate::event::{ObserverBus, StateObserver};
use crate::history::HistoryReducer;
use crate::picture::Position;
use crate::state::{Action, EditorState};
use crate::tools::{Drag, ToolOutput};
use crate::util::time;

/// Source of timestamps for undo coalescing, in milliseconds.
pub trait Clock {
    fn now_millis(&self) -> u64;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        time::now_millis()
    }
}

/// A clock that only moves when told to. Clones share the same time.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<u64>>,
}

impl ManualClock {
    pub fn new(start: u64) -> Self {
        Self {
            now: Rc::new(Cell::new(start)),
        }
    }

    pub fn set(&self, millis: u64) {
        self.now.set(millis);
    }

    pub fn advance(&self, millis: u64) {
        self.now.set(self.now.get() + millis);
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> u64 {
        self.now.get()
    }
}

pub struct Session {
    state: EditorState,
    reducer: HistoryReducer,
    drag: Option<Drag>,
    clock: Box<dyn Clock>,
    observers: ObserverBus,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("tool", &self.state.tool)
            .field("history", &self.state.history.len())
            .field("dragging", &self.drag.is_some())
            .field("observers", &self.observers)
            .finish()
    }
}

impl Session {
    pub fn new(state: EditorState, reducer: HistoryReducer) -> Self {
        Self::with_clock(state, reducer, SystemClock)
    }

    pub fn with_clock(state: EditorState, reducer: HistoryReducer, clock: impl Clock + 'static) -> Self {
        Self {
            state,
            reducer,
            drag: None,
            clock: Box::new(clock),
            observers: ObserverBus::new(),
        }
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Registers an observer and immediately shows it the current state.
    pub fn subscribe(&mut self, mut observer: impl StateObserver + 'static) {
        observer.state_changed(&self.state);
        self.observers.subscribe(Box::new(observer));
    }

    /// Reduces `action` into a new state and notifies every observer.
    ///
    /// On error the state is left untouched and nobody is notified.
    pub fn dispatch(&mut self, action: Action) -> Result<(), EditorError> {
        let now = self.clock.now_millis();
        self.state = self.reducer.reduce(&self.state, action, now)?;
        self.observers.emit(&self.state);
        Ok(())
    }

    pub fn undo(&mut self) -> Result<(), EditorError> {
        self.dispatch(Action::undo())
    }

    /// Pointer pressed at `pos`: starts the configured tool.
    pub fn pointer_down(&mut self, pos: Position) -> Result<(), EditorError> {
        let tool = self.state.tool;
        debug!("Starting {tool} at ({}, {})", pos.x, pos.y);
        let start = tool.tool().start(pos, &self.state);
        self.drag = start.drag;
        self.apply(start.output)
    }

    /// Pointer moved with the button held. Ignored when no drag is active.
    pub fn pointer_move(&mut self, pos: Position) -> Result<(), EditorError> {
        let Some(drag) = &self.drag else {
            return Ok(());
        };
        let output = drag.update(pos, &self.state);
        self.apply(output)
    }

    /// Pointer released: the drag ends, nothing is rolled back.
    pub fn pointer_up(&mut self) {
        self.drag = None;
    }

    fn apply(&mut self, output: ToolOutput) -> Result<(), EditorError> {
        match output.into_action() {
            Some(action) => self.dispatch(action),
            None => Ok(()),
        }
    }
}
