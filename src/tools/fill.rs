use std::collections::VecDeque;

use super::{Tool, ToolOutput, ToolStart};
use crate::picture::{Color, Edit, Picture, Position};
use crate::state::EditorState;

/// Flood fill of the 4-connected region under the pointer.
#[derive(Debug, Clone, Copy, Default)]
pub struct FillTool;

impl Tool for FillTool {
    fn start(&self, pos: Position, state: &EditorState) -> ToolStart {
        let edits = flood_fill(&state.picture, pos, state.color);
        let output = if edits.is_empty() {
            ToolOutput::Nothing
        } else {
            ToolOutput::paint(&state.picture, edits)
        };
        ToolStart { output, drag: None }
    }
}

/// Breadth-first fill from `pos` over cells matching the start cell's color.
///
/// Each cell is queued at most once, so the result has no duplicates and at
/// most `width * height` edits. Filling a region with its own color yields
/// the region unchanged in value.
pub fn flood_fill(picture: &Picture, pos: Position, color: Color) -> Vec<Edit> {
    let Some((sx, sy)) = picture.cell(pos) else {
        return Vec::new();
    };
    let (width, height) = picture.dimensions();
    let pixels = picture.pixels();
    let target = pixels[sx + sy * width];

    let mut queued = vec![false; width * height];
    let mut queue = VecDeque::new();
    let mut edits = Vec::new();

    queued[sx + sy * width] = true;
    queue.push_back((sx, sy));

    while let Some((x, y)) = queue.pop_front() {
        edits.push(Edit::new(x, y, color));

        let neighbors = [
            (x.checked_sub(1), Some(y)),
            (Some(x + 1), Some(y)),
            (Some(x), y.checked_sub(1)),
            (Some(x), Some(y + 1)),
        ];
        for (nx, ny) in neighbors {
            let (Some(nx), Some(ny)) = (nx, ny) else {
                continue;
            };
            if nx >= width || ny >= height {
                continue;
            }
            let index = nx + ny * width;
            if !queued[index] && pixels[index] == target {
                queued[index] = true;
                queue.push_back((nx, ny));
            }
        }
    }
    edits
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::rgb(255, 0, 0);

    /// 5x5 white picture with a black vertical wall at x = 2.
    fn walled() -> Picture {
        let wall: Vec<_> = (0..5).map(|y| Edit::new(2, y, Color::BLACK)).collect();
        Picture::empty(5, 5, Color::WHITE).unwrap().with_edits(&wall)
    }

    #[test]
    fn test_fill_stops_at_wall() {
        let picture = walled();
        let edits = flood_fill(&picture, Position::new(0, 0), RED);
        assert_eq!(edits.len(), 10);
        assert!(edits.iter().all(|e| e.x < 2));
    }

    #[test]
    fn test_fill_is_not_diagonal() {
        let picture = Picture::empty(2, 2, Color::WHITE)
            .unwrap()
            .with_edits(&[Edit::new(1, 0, Color::BLACK), Edit::new(0, 1, Color::BLACK)]);
        let edits = flood_fill(&picture, Position::new(0, 0), RED);
        assert_eq!(edits, vec![Edit::new(0, 0, RED)]);
    }

    #[test]
    fn test_fill_off_picture() {
        assert!(flood_fill(&walled(), Position::new(-1, 0), RED).is_empty());
    }

    #[test]
    fn test_fill_with_same_color_is_value_noop() {
        let picture = walled();
        let edits = flood_fill(&picture, Position::new(4, 4), Color::WHITE);
        assert_eq!(edits.len(), 10);
        assert_eq!(picture.with_edits(&edits), picture);
    }
}
