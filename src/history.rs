//! Undo history with stroke coalescing.
//!
//! Picture changes arriving within [`COALESCE_WINDOW_MS`] of the current
//! checkpoint extend the same undo step, so a whole drag undoes at once.
//!
//! ```text
//!            picture, window elapsed            picture, inside window
//!   ┌──────┐ ─────────────────────────► ┌────────────┐ ◄──────────────┐
//!   │ idle │    (push old picture)      │ mid-stroke │ ───────────────┘
//!   └──────┘ ◄───────────────────────── └────────────┘
//!               window elapsed / undo
//! ```

use log::debug;

use crate::error::EditorError;
use crate::state::{Action, EditorState};

/// Picture changes closer together than this share one undo step.
pub const COALESCE_WINDOW_MS: u64 = 1000;

/// Default number of undo steps kept.
pub const DEFAULT_HISTORY_LIMIT: usize = 100;

/// Pure state transition function, parameterised by the history bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryReducer {
    limit: usize,
}

impl Default for HistoryReducer {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}

impl HistoryReducer {
    /// `limit` is the maximum number of pictures kept for undo.
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Folds `action` into `state` at time `now` (milliseconds).
    pub fn reduce(
        &self,
        state: &EditorState,
        action: Action,
        now: u64,
    ) -> Result<EditorState, EditorError> {
        if action.undo {
            if action.tool.is_some() || action.color.is_some() || action.picture.is_some() {
                return Err(EditorError::MalformedAction(
                    "undo cannot be combined with other changes".to_owned(),
                ));
            }
            return Ok(undo(state));
        }

        let mut next = state.clone();
        if let Some(picture) = action.picture {
            if checkpoint_due(state.last_checkpoint, now) {
                debug!("Recording undo checkpoint at {now}ms");
                next.history.insert(0, state.picture.clone());
                next.history.truncate(self.limit);
                next.last_checkpoint = Some(now);
            }
            next.picture = picture;
        }
        if let Some(tool) = action.tool {
            next.tool = tool;
        }
        if let Some(color) = action.color {
            next.color = color;
        }
        Ok(next)
    }
}

fn undo(state: &EditorState) -> EditorState {
    let Some((previous, rest)) = state.history.split_first() else {
        return state.clone();
    };
    EditorState {
        tool: state.tool,
        color: state.color,
        picture: previous.clone(),
        history: rest.to_vec(),
        last_checkpoint: None,
    }
}

fn checkpoint_due(last_checkpoint: Option<u64>, now: u64) -> bool {
    match last_checkpoint {
        None => true,
        Some(at) => now.saturating_sub(at) > COALESCE_WINDOW_MS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::picture::{Color, Edit, Picture};
    use crate::tools::ToolId;

    fn start_state() -> EditorState {
        EditorState::new(
            ToolId::Draw,
            Color::BLACK,
            Picture::empty(4, 4, Color::WHITE).unwrap(),
        )
    }

    fn painted(state: &EditorState, x: usize) -> Picture {
        state.picture.with_edits(&[Edit::new(x, 0, Color::BLACK)])
    }

    #[test]
    fn test_checkpoint_window_is_strict() {
        assert!(checkpoint_due(None, 0));
        assert!(!checkpoint_due(Some(5_000), 6_000));
        assert!(checkpoint_due(Some(5_000), 6_001));
    }

    #[test]
    fn test_history_is_bounded() {
        let reducer = HistoryReducer::new(2);
        let mut state = start_state();
        for step in 0..4u64 {
            let picture = painted(&state, step as usize);
            state = reducer.reduce(&state, Action::picture(picture), step * 2_000).unwrap();
        }
        assert_eq!(state.history.len(), 2);
    }

    #[test]
    fn test_undo_with_other_fields_is_malformed() {
        let reducer = HistoryReducer::default();
        let action = Action::undo().with_color(Color::WHITE);
        let result = reducer.reduce(&start_state(), action, 0);
        assert!(matches!(result, Err(EditorError::MalformedAction(_))));
    }

    #[test]
    fn test_undo_resets_checkpoint() {
        let reducer = HistoryReducer::default();
        let state = start_state();
        let state = reducer.reduce(&state, Action::picture(painted(&state, 0)), 10_000).unwrap();
        let state = reducer.reduce(&state, Action::undo(), 10_100).unwrap();
        assert_eq!(state.last_checkpoint, None);

        // Right after an undo the next edit opens a fresh step.
        let state = reducer.reduce(&state, Action::picture(painted(&state, 1)), 10_200).unwrap();
        assert_eq!(state.history.len(), 1);
    }
}
