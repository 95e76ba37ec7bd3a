use egui;

use crate::PixelEditorApp;
use crate::picture::Position;

pub fn central_panel(app: &mut PixelEditorApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let cell_size = app.settings().cell_size;
        let (width, height) = app.state().picture.dimensions();
        let canvas_size = egui::vec2(width as f32, height as f32) * cell_size;

        egui::ScrollArea::both().show(ui, |ui| {
            let (response, painter) = ui.allocate_painter(canvas_size, egui::Sense::drag());
            let rect = response.rect;

            // Translate screen coordinates into cell coordinates.
            let to_cell = |pos: egui::Pos2| {
                let cell = (pos - rect.min) / cell_size;
                Position::new(cell.x.floor() as i32, cell.y.floor() as i32)
            };
            if let Some(pos) = response.interact_pointer_pos() {
                if response.drag_started() {
                    app.pointer_down(to_cell(pos));
                } else if response.dragged() {
                    app.pointer_move(to_cell(pos));
                }
            }
            if response.drag_stopped() {
                app.pointer_up();
            }

            if let Some(texture) = app.canvas().borrow_mut().upload(ctx) {
                let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
                painter.image(texture, rect, uv, egui::Color32::WHITE);
            }
        });
    });
}
