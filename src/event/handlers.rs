use log::debug;

use crate::event::StateObserver;
use crate::state::EditorState;
use crate::tools::ToolId;

/// Logs tool switches and undo depth changes.
#[derive(Debug, Default)]
pub struct HistoryLogger {
    tool: Option<ToolId>,
    depth: usize,
}

impl HistoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Undo depth seen in the last state.
    pub fn depth(&self) -> usize {
        self.depth
    }
}

impl StateObserver for HistoryLogger {
    fn state_changed(&mut self, state: &EditorState) {
        if self.tool != Some(state.tool) {
            debug!("Active tool: {}", state.tool);
            self.tool = Some(state.tool);
        }
        if self.depth != state.history.len() {
            debug!("Undo depth {} -> {}", self.depth, state.history.len());
            self.depth = state.history.len();
        }
    }
}
