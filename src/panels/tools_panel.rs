use egui;

use crate::PixelEditorApp;
use crate::components::ToolButton;
use crate::picture::Color;
use crate::state::Action;
use crate::tools::ToolId;

pub fn tools_panel(app: &mut PixelEditorApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(false)
        .default_width(120.0)
        .show(ctx, |ui| {
            ui.heading("Tools");

            let active_tool = app.state().tool;
            ui.horizontal_wrapped(|ui| {
                for tool in ToolId::ALL {
                    if ToolButton::new(tool, tool == active_tool).show(ui).clicked() {
                        app.select_tool(tool);
                    }
                }
            });
            ui.separator();

            ui.horizontal(|ui| {
                ui.label("Color:");
                let mut color: egui::Color32 = app.state().color.into();
                if egui::color_picker::color_edit_button_srgba(
                    ui,
                    &mut color,
                    egui::color_picker::Alpha::Opaque,
                )
                .changed()
                {
                    app.dispatch(Action::color(Color::from(color)));
                }
            });
            ui.separator();

            let can_undo = app.state().can_undo();
            if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                app.undo();
            }
            ui.label(format!("Undo steps: {}", app.state().history.len()));
            ui.separator();

            if ui.button("Save PNG").clicked() {
                app.export_png();
            }
            ui.label("Drop an image to import it.");
            if let Some(status) = app.status() {
                ui.small(status);
            }
        });
}
