use super::{Drag, Tool, ToolStart, draw_step};
use crate::picture::{Color, Edit, Picture, Position};
use crate::state::EditorState;

/// Paints the single cell under the pointer, on press and on every move.
#[derive(Debug, Clone, Copy, Default)]
pub struct DrawTool;

impl Tool for DrawTool {
    fn start(&self, pos: Position, state: &EditorState) -> ToolStart {
        ToolStart {
            output: draw_step(pos, state),
            drag: Some(Drag::Draw),
        }
    }
}

/// One edit for the cell at `pos`, or none when `pos` is off the picture.
pub fn draw_edits(picture: &Picture, pos: Position, color: Color) -> Vec<Edit> {
    picture
        .cell(pos)
        .map(|(x, y)| vec![Edit::new(x, y, color)])
        .unwrap_or_default()
}
