use crate::SketchApp;
use crate::brush::BrushMode;

/// Left-hand control strip: export, width cycling, color picker, erase
/// toggle, undo/redo.
pub fn tools_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(false)
        .default_width(160.0)
        .show(ctx, |ui| {
            ui.heading("Sketchpad");
            ui.separator();

            if ui.button("⬇ Download").clicked() {
                app.export();
            }

            ui.separator();

            let width_label = app.sketch().settings().width_label();
            if ui.button(format!("✏ {width_label}")).clicked() {
                app.cycle_width();
            }

            ui.horizontal(|ui| {
                ui.label("Color:");
                let mut color = app.sketch().settings().color();
                let picker = egui::color_picker::color_edit_button_srgba(
                    ui,
                    &mut color,
                    egui::color_picker::Alpha::Opaque,
                );
                if picker.changed() {
                    app.sketch_mut().set_color(color);
                }
            });
            let settings = app.sketch().settings();
            ui.colored_label(settings.color(), settings.color_hex());

            ui.separator();

            let toggle_label = match app.sketch().settings().mode() {
                BrushMode::Paint => "⌫ Erase",
                BrushMode::Erase => "🖌 Paint",
            };
            if ui.button(toggle_label).clicked() {
                app.toggle_eraser();
            }

            ui.separator();

            ui.horizontal(|ui| {
                let can_undo = app.sketch().can_undo();
                let can_redo = app.sketch().can_redo();

                if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                    app.undo();
                }
                if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
                    app.redo();
                }
            });
        });
}
