use std::cell::RefCell;
use std::rc::Rc;

use egui;

use crate::canvas::CanvasView;
use crate::error::EditorError;
use crate::event::HistoryLogger;
use crate::file_handler::{self, FileHandler};
use crate::panels::{central_panel, tools_panel};
use crate::picture::Position;
use crate::session::Session;
use crate::settings::Settings;
use crate::state::{Action, EditorState};
use crate::tools::ToolId;

pub struct PixelEditorApp {
    settings: Settings,
    session: Session,
    canvas: Rc<RefCell<CanvasView>>,
    file_handler: FileHandler,
    /// Cell under the pointer when the last drag event was handled.
    last_cell: Option<Position>,
    status: Option<String>,
}

impl PixelEditorApp {
    /// Called once before the first frame.
    ///
    /// `settings` overrides whatever was persisted from the previous run.
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Option<Settings>) -> Result<Self, EditorError> {
        let settings = settings
            .or_else(|| cc.storage.and_then(|storage| eframe::get_value(storage, eframe::APP_KEY)))
            .unwrap_or_default();
        Self::from_settings(settings)
    }

    pub fn from_settings(settings: Settings) -> Result<Self, EditorError> {
        let settings = match settings.validate() {
            Ok(()) => settings,
            Err(err) => {
                log::warn!("Ignoring invalid settings: {err}");
                Settings::default()
            }
        };

        let canvas = Rc::new(RefCell::new(CanvasView::new()));
        let mut session = Session::new(settings.initial_state()?, settings.reducer());
        session.subscribe(canvas.clone());
        session.subscribe(HistoryLogger::new());

        Ok(Self {
            settings,
            session,
            canvas,
            file_handler: FileHandler::new(),
            last_cell: None,
            status: None,
        })
    }

    pub fn state(&self) -> &EditorState {
        self.session.state()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn canvas(&self) -> &Rc<RefCell<CanvasView>> {
        &self.canvas
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn dispatch(&mut self, action: Action) {
        if let Err(err) = self.session.dispatch(action) {
            log::error!("Rejected action: {err}");
        }
    }

    pub fn select_tool(&mut self, tool: ToolId) {
        log::info!("Tool selected: {tool}");
        self.dispatch(Action::tool(tool));
    }

    pub fn undo(&mut self) {
        self.dispatch(Action::undo());
    }

    /// Writes the current picture to the configured export path.
    pub fn export_png(&mut self) {
        let path = self.settings.export_path.clone();
        self.status = Some(match file_handler::save_png(&self.state().picture, &path) {
            Ok(()) => format!("Saved {}", path.display()),
            Err(err) => {
                log::error!("Failed to save {}: {err}", path.display());
                format!("Save failed: {err}")
            }
        });
    }

    /// Pointer events in cell coordinates, already translated by the canvas.
    pub fn pointer_down(&mut self, cell: Position) {
        self.last_cell = Some(cell);
        if let Err(err) = self.session.pointer_down(cell) {
            log::error!("Tool start failed: {err}");
        }
    }

    pub fn pointer_move(&mut self, cell: Position) {
        if self.last_cell == Some(cell) {
            return;
        }
        self.last_cell = Some(cell);
        if let Err(err) = self.session.pointer_move(cell) {
            log::error!("Tool drag failed: {err}");
        }
    }

    pub fn pointer_up(&mut self) {
        self.last_cell = None;
        self.session.pointer_up();
    }

    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        if !self.file_handler.check_for_dropped_files(ctx) {
            return;
        }
        for picture in self.file_handler.take_pictures(self.settings.max_import) {
            self.status = Some(format!("Imported {}x{}", picture.width(), picture.height()));
            self.dispatch(Action::picture(picture));
        }
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        if ctx.input_mut(|i| i.consume_key(egui::Modifiers::COMMAND, egui::Key::Z)) {
            self.undo();
        }
        let picked = ctx.input(|i| {
            i.events.iter().rev().find_map(|event| match event {
                egui::Event::Text(text) if !i.modifiers.command => {
                    text.chars().next().and_then(ToolId::from_shortcut)
                }
                _ => None,
            })
        });
        if let Some(tool) = picked {
            self.select_tool(tool);
        }
    }
}

impl eframe::App for PixelEditorApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        let state = self.session.state();
        self.settings.tool = state.tool;
        self.settings.color = state.color;
        eframe::set_value(storage, eframe::APP_KEY, &self.settings);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_dropped_files(ctx);
        self.handle_shortcuts(ctx);

        tools_panel(self, ctx);
        central_panel(self, ctx);
    }
}
