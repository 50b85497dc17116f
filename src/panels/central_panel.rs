use egui::{CursorIcon, Sense};

use crate::SketchApp;
use crate::brush::BrushMode;

/// The canvas: sizes the surface to the available rect, routes pointer
/// input into stroke operations and paints the presented texture.
pub fn central_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none())
        .show(ctx, |ui| {
            let (response, painter) =
                ui.allocate_painter(ui.available_size_before_wrap(), Sense::click_and_drag());
            let rect = response.rect;

            // Resize-and-restore before any input lands on the surface; on
            // the first frame this performs the initial sizing.
            let size = [
                rect.width().round().max(0.0) as usize,
                rect.height().round().max(0.0) as usize,
            ];
            app.sketch_mut().handle_resize(size);

            if let Some(pointer) = response.interact_pointer_pos() {
                let local = (pointer - rect.min).to_pos2();
                if response.drag_started() {
                    app.sketch_mut().begin_stroke(local);
                } else if response.dragged() {
                    app.sketch_mut().continue_stroke(local);
                }
            }
            if response.drag_stopped() {
                app.sketch_mut().end_stroke();
            }

            if response.hovered() {
                let cursor = match app.sketch().settings().mode() {
                    BrushMode::Paint => CursorIcon::Crosshair,
                    BrushMode::Erase => CursorIcon::Grabbing,
                };
                ctx.set_cursor_icon(cursor);
            }

            app.paint_canvas(ctx, &painter, rect);
        });
}
