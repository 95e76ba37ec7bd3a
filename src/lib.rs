#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod canvas;
pub mod components;
pub mod error;
pub mod event;
pub mod file_handler;
pub mod history;
pub mod panels;
pub mod picture;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod state;
pub mod tools;
pub mod util;

pub use app::PixelEditorApp;
pub use error::{EditorError, FileError};
pub use history::{COALESCE_WINDOW_MS, HistoryReducer};
pub use picture::{Color, Edit, Picture, Position};
pub use renderer::{IncrementalRenderer, Surface};
pub use session::{Clock, ManualClock, Session, SystemClock};
pub use settings::Settings;
pub use state::{Action, EditorState};
pub use tools::{Drag, Tool, ToolId, ToolOutput, ToolStart};
