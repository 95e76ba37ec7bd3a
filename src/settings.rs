use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::{EditorError, FileResult};
use crate::history::{DEFAULT_HISTORY_LIMIT, HistoryReducer};
use crate::picture::{Color, Picture};
use crate::state::EditorState;
use crate::tools::ToolId;

/// User-facing configuration.
///
/// Persisted through eframe storage between runs, and optionally read from a
/// JSON file. Missing fields fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Picture width in cells.
    pub width: usize,
    /// Picture height in cells.
    pub height: usize,
    /// Fill color of a fresh picture.
    pub background: Color,
    /// Initial drawing color.
    pub color: Color,
    /// Initial tool.
    pub tool: ToolId,
    /// Undo steps kept.
    pub history_limit: usize,
    /// Display pixels per cell.
    pub cell_size: f32,
    /// Imported images are cropped to this many cells per axis.
    pub max_import: usize,
    /// Where the Save button writes the PNG.
    pub export_path: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: 60,
            height: 30,
            background: Color::LIGHT_GRAY,
            color: Color::BLACK,
            tool: ToolId::Draw,
            history_limit: DEFAULT_HISTORY_LIMIT,
            cell_size: 10.0,
            max_import: 100,
            export_path: PathBuf::from("pixel-art.png"),
        }
    }
}

impl Settings {
    pub fn load_json(path: impl AsRef<Path>) -> FileResult<Self> {
        let path = path.as_ref();
        let settings: Settings = serde_json::from_str(&fs::read_to_string(path)?)?;
        settings.validate()?;
        info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn save_json(&self, path: impl AsRef<Path>) -> FileResult<()> {
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), EditorError> {
        if self.width == 0 || self.height == 0 {
            return Err(EditorError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.history_limit == 0 {
            return Err(EditorError::InvalidSettings(
                "history_limit must be at least 1".to_owned(),
            ));
        }
        if self.max_import == 0 {
            return Err(EditorError::InvalidSettings(
                "max_import must be at least 1".to_owned(),
            ));
        }
        if !self.cell_size.is_finite() || self.cell_size <= 0.0 {
            return Err(EditorError::InvalidSettings(format!(
                "cell_size must be positive and finite, got {}",
                self.cell_size
            )));
        }
        Ok(())
    }

    /// The startup state: blank picture, empty history.
    pub fn initial_state(&self) -> Result<EditorState, EditorError> {
        let picture = Picture::empty(self.width, self.height, self.background)?;
        Ok(EditorState::new(self.tool, self.color, picture))
    }

    pub fn reducer(&self) -> HistoryReducer {
        HistoryReducer::new(self.history_limit)
    }
}
