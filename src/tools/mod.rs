use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::picture::{Color, Edit, Picture, Position};
use crate::state::{Action, EditorState};

mod circle;
mod draw;
mod fill;
mod pick;
mod rectangle;

pub use circle::{CircleTool, circle_edits};
pub use draw::{DrawTool, draw_edits};
pub use fill::{FillTool, flood_fill};
pub use pick::PickTool;
pub use rectangle::{RectangleTool, rectangle_edits};

/// What a single tool step wants to change.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolOutput {
    /// Apply `edits` on top of `base`.
    Paint { base: Picture, edits: Vec<Edit> },
    /// Switch the drawing color.
    PickColor(Color),
    /// Nothing to do for this step (e.g. the pointer is off the picture).
    Nothing,
}

impl ToolOutput {
    pub fn paint(base: &Picture, edits: Vec<Edit>) -> Self {
        Self::Paint {
            base: base.clone(),
            edits,
        }
    }

    /// The action this output should dispatch, if any.
    pub fn into_action(self) -> Option<Action> {
        match self {
            Self::Paint { base, edits } => Some(Action::picture(base.with_edits(&edits))),
            Self::PickColor(color) => Some(Action::color(color)),
            Self::Nothing => None,
        }
    }
}

/// Result of pressing the pointer with a tool.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolStart {
    pub output: ToolOutput,
    /// Continuation invoked on each pointer move while the button is held.
    /// `None` for single-shot tools.
    pub drag: Option<Drag>,
}

/// A tool: turns a pointer press into edits and an optional drag continuation.
pub trait Tool: Send + Sync {
    fn start(&self, pos: Position, state: &EditorState) -> ToolStart;
}

/// Continuation of a pointer drag.
///
/// Shape variants remember the picture and color from when the drag began
/// and recompute from scratch on every move, so dragging back shrinks the
/// shape instead of leaving a trail.
#[derive(Debug, Clone, PartialEq)]
pub enum Drag {
    Draw,
    Rectangle {
        start: Position,
        base: Picture,
        color: Color,
    },
    Circle {
        start: Position,
        base: Picture,
        color: Color,
    },
}

impl Drag {
    pub fn update(&self, pos: Position, state: &EditorState) -> ToolOutput {
        match self {
            Self::Draw => draw_step(pos, state),
            Self::Rectangle { start, base, color } => {
                if !base.contains(pos) {
                    return ToolOutput::Nothing;
                }
                ToolOutput::paint(base, rectangle_edits(base, *start, pos, *color))
            }
            Self::Circle { start, base, color } => {
                if !base.contains(pos) {
                    return ToolOutput::Nothing;
                }
                ToolOutput::paint(base, circle_edits(base, *start, pos, *color))
            }
        }
    }
}

pub(crate) fn draw_step(pos: Position, state: &EditorState) -> ToolOutput {
    let edits = draw_edits(&state.picture, pos, state.color);
    if edits.is_empty() {
        ToolOutput::Nothing
    } else {
        ToolOutput::paint(&state.picture, edits)
    }
}

static DRAW: DrawTool = DrawTool;
static FILL: FillTool = FillTool;
static RECTANGLE: RectangleTool = RectangleTool;
static PICK: PickTool = PickTool;
static CIRCLE: CircleTool = CircleTool;

/// Identifies a tool. The enum is the lookup key for the tool set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolId {
    #[default]
    Draw,
    Fill,
    Rectangle,
    Pick,
    Circle,
}

impl ToolId {
    pub const ALL: [ToolId; 5] = [
        ToolId::Draw,
        ToolId::Fill,
        ToolId::Rectangle,
        ToolId::Pick,
        ToolId::Circle,
    ];

    pub fn tool(self) -> &'static dyn Tool {
        match self {
            ToolId::Draw => &DRAW,
            ToolId::Fill => &FILL,
            ToolId::Rectangle => &RECTANGLE,
            ToolId::Pick => &PICK,
            ToolId::Circle => &CIRCLE,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ToolId::Draw => "draw",
            ToolId::Fill => "fill",
            ToolId::Rectangle => "rectangle",
            ToolId::Pick => "pick",
            ToolId::Circle => "circle",
        }
    }

    /// Keyboard shortcut: the first letter of the tool name.
    pub fn shortcut(self) -> char {
        match self {
            ToolId::Draw => 'd',
            ToolId::Fill => 'f',
            ToolId::Rectangle => 'r',
            ToolId::Pick => 'p',
            ToolId::Circle => 'c',
        }
    }

    pub fn from_shortcut(key: char) -> Option<ToolId> {
        let key = key.to_ascii_lowercase();
        Self::ALL.into_iter().find(|tool| tool.shortcut() == key)
    }
}

impl fmt::Display for ToolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ToolId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tool| tool.name() == s)
            .ok_or_else(|| format!("unknown tool {s:?}"))
    }
}
