use super::{Drag, Tool, ToolOutput, ToolStart};
use crate::picture::{Color, Edit, Picture, Position};
use crate::state::EditorState;

/// Filled circle centred on the press position, radius following the pointer.
#[derive(Debug, Clone, Copy, Default)]
pub struct CircleTool;

impl Tool for CircleTool {
    fn start(&self, pos: Position, state: &EditorState) -> ToolStart {
        let output = if state.picture.contains(pos) {
            ToolOutput::paint(
                &state.picture,
                circle_edits(&state.picture, pos, pos, state.color),
            )
        } else {
            ToolOutput::Nothing
        };
        ToolStart {
            output,
            drag: Some(Drag::Circle {
                start: pos,
                base: state.picture.clone(),
                color: state.color,
            }),
        }
    }
}

/// Every cell whose center is within `|edge - center|` of `center`, clipped
/// to the picture.
///
/// Distances are compared squared in `i128`, so the test is exact on integer
/// cells and cannot overflow for any pair of `i32` positions.
pub fn circle_edits(picture: &Picture, center: Position, edge: Position, color: Color) -> Vec<Edit> {
    let (cx, cy) = (i128::from(center.x), i128::from(center.y));
    let (dx, dy) = (i128::from(edge.x) - cx, i128::from(edge.y) - cy);
    let radius_sq = dx * dx + dy * dy;
    let reach = (radius_sq as f64).sqrt().ceil() as i128 + 1;

    let x_range = (cx - reach).max(0)..=(cx + reach).min(last_index(picture.width()));
    let y_range = (cy - reach).max(0)..=(cy + reach).min(last_index(picture.height()));

    let mut edits = Vec::new();
    for y in y_range {
        for x in x_range.clone() {
            let (ox, oy) = (x - cx, y - cy);
            if ox * ox + oy * oy <= radius_sq {
                // Both ranges are clipped to the picture.
                edits.push(Edit::new(x as usize, y as usize, color));
            }
        }
    }
    edits
}

fn last_index(len: usize) -> i128 {
    i128::try_from(len).unwrap_or(i128::MAX) - 1
}
