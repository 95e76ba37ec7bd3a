use super::{Drag, Tool, ToolOutput, ToolStart};
use crate::picture::{Color, Edit, Picture, Position};
use crate::state::EditorState;

/// Axis-aligned filled rectangle between the press position and the pointer.
#[derive(Debug, Clone, Copy, Default)]
pub struct RectangleTool;

impl Tool for RectangleTool {
    fn start(&self, pos: Position, state: &EditorState) -> ToolStart {
        let output = if state.picture.contains(pos) {
            ToolOutput::paint(
                &state.picture,
                rectangle_edits(&state.picture, pos, pos, state.color),
            )
        } else {
            ToolOutput::Nothing
        };
        ToolStart {
            output,
            drag: Some(Drag::Rectangle {
                start: pos,
                base: state.picture.clone(),
                color: state.color,
            }),
        }
    }
}

/// Every cell in the inclusive rectangle spanned by `a` and `b`, clipped to
/// the picture.
pub fn rectangle_edits(picture: &Picture, a: Position, b: Position, color: Color) -> Vec<Edit> {
    let Some((x0, x1)) = clip_span(a.x, b.x, picture.width()) else {
        return Vec::new();
    };
    let Some((y0, y1)) = clip_span(a.y, b.y, picture.height()) else {
        return Vec::new();
    };
    let mut edits = Vec::with_capacity((x1 - x0 + 1) * (y1 - y0 + 1));
    for y in y0..=y1 {
        for x in x0..=x1 {
            edits.push(Edit::new(x, y, color));
        }
    }
    edits
}

/// Normalizes `a..=b` and clips it to `0..len`.
fn clip_span(a: i32, b: i32, len: usize) -> Option<(usize, usize)> {
    let lo = i64::from(a.min(b)).max(0);
    let hi = i64::from(a.max(b)).min(i64::try_from(len).unwrap_or(i64::MAX) - 1);
    (lo <= hi).then(|| (lo as usize, hi as usize))
}
