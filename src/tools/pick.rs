use super::{Tool, ToolOutput, ToolStart};
use crate::picture::Position;
use crate::state::EditorState;

/// Samples the color under the pointer and makes it the drawing color.
#[derive(Debug, Clone, Copy, Default)]
pub struct PickTool;

impl Tool for PickTool {
    fn start(&self, pos: Position, state: &EditorState) -> ToolStart {
        let output = state
            .picture
            .cell(pos)
            .and_then(|(x, y)| state.picture.pixel_at(x, y).ok())
            .map_or(ToolOutput::Nothing, ToolOutput::PickColor);
        ToolStart { output, drag: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::picture::{Color, Edit, Picture};
    use crate::tools::ToolId;

    #[test]
    fn test_pick_samples_cell() {
        let teal = Color::rgb(0, 128, 128);
        let picture = Picture::empty(3, 3, Color::WHITE)
            .unwrap()
            .with_edits(&[Edit::new(2, 1, teal)]);
        let state = EditorState::new(ToolId::Pick, Color::BLACK, picture);
        let start = PickTool.start(Position::new(2, 1), &state);
        assert_eq!(start.output, ToolOutput::PickColor(teal));
    }

    #[test]
    fn test_pick_off_picture() {
        let state = EditorState::new(
            ToolId::Pick,
            Color::BLACK,
            Picture::empty(3, 3, Color::WHITE).unwrap(),
        );
        assert_eq!(PickTool.start(Position::new(7, 7), &state).output, ToolOutput::Nothing);
    }
}
