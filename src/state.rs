use crate::picture::{Color, Picture};
use crate::tools::ToolId;

/// The complete, immutable editor state.
///
/// Every user action produces a new value through
/// [`HistoryReducer::reduce`](crate::history::HistoryReducer::reduce); nothing
/// mutates an existing one.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorState {
    pub tool: ToolId,
    pub color: Color,
    pub picture: Picture,
    /// Earlier pictures, most recent first.
    pub history: Vec<Picture>,
    /// When the current undo step began, in milliseconds. `None` forces the
    /// next picture change to open a new step.
    pub last_checkpoint: Option<u64>,
}

impl EditorState {
    pub fn new(tool: ToolId, color: Color, picture: Picture) -> Self {
        Self {
            tool,
            color,
            picture,
            history: Vec::new(),
            last_checkpoint: None,
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }
}

/// A request to change the editor state.
///
/// Fields that are `None` are left as they are. `undo` must not be combined
/// with any other field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Action {
    pub tool: Option<ToolId>,
    pub color: Option<Color>,
    pub picture: Option<Picture>,
    pub undo: bool,
}

impl Action {
    pub fn picture(picture: Picture) -> Self {
        Self {
            picture: Some(picture),
            ..Default::default()
        }
    }

    pub fn tool(tool: ToolId) -> Self {
        Self {
            tool: Some(tool),
            ..Default::default()
        }
    }

    pub fn color(color: Color) -> Self {
        Self {
            color: Some(color),
            ..Default::default()
        }
    }

    pub fn undo() -> Self {
        Self {
            undo: true,
            ..Default::default()
        }
    }

    pub fn with_tool(mut self, tool: ToolId) -> Self {
        self.tool = Some(tool);
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.tool.is_none() && self.color.is_none() && self.picture.is_none() && !self.undo
    }
}
