use egui::{Key, KeyboardShortcut, Modifiers};
use log::{error, info};

use crate::brush::BrushSettings;
use crate::export;
use crate::panels;
use crate::renderer::SurfacePresenter;
use crate::sketch::Sketch;

/// Shortcuts mirrored by the side-panel buttons.
const UNDO_SHORTCUT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Z);
const REDO_SHORTCUT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Y);
const REDO_SHIFT_SHORTCUT: KeyboardShortcut =
    KeyboardShortcut::new(Modifiers::COMMAND.plus(Modifiers::SHIFT), Key::Z);

/// Top-level eframe application: owns the sketch model and the texture
/// presenter. Brush settings are persisted between runs; sketch content is
/// not.
pub struct SketchApp {
    sketch: Sketch,
    presenter: SurfacePresenter,
}

impl SketchApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings = cc
            .storage
            .and_then(|storage| eframe::get_value::<BrushSettings>(storage, eframe::APP_KEY))
            .unwrap_or_default();

        // The surface takes its real dimensions from the first frame's
        // canvas rect.
        Self {
            sketch: Sketch::new([0, 0], settings),
            presenter: SurfacePresenter::new(),
        }
    }

    pub fn sketch(&self) -> &Sketch {
        &self.sketch
    }

    pub fn sketch_mut(&mut self) -> &mut Sketch {
        &mut self.sketch
    }

    pub fn undo(&mut self) {
        self.sketch.undo();
    }

    pub fn redo(&mut self) {
        self.sketch.redo();
    }

    pub fn toggle_eraser(&mut self) {
        self.sketch.toggle_eraser();
        info!("brush mode: {:?}", self.sketch.settings().mode());
    }

    pub fn cycle_width(&mut self) {
        let width = self.sketch.cycle_width();
        info!("line width: {width} px");
    }

    /// Exports the surface as `new-sketch.jpg`; failures are logged and the
    /// app keeps running.
    pub fn export(&mut self) {
        match export::export_sketch(self.sketch.surface()) {
            Ok(path) => info!("sketch saved as {}", path.display()),
            Err(err) => error!("export failed: {err}"),
        }
    }

    /// Paints the surface into the canvas rect.
    pub(crate) fn paint_canvas(
        &mut self,
        ctx: &egui::Context,
        painter: &egui::Painter,
        rect: egui::Rect,
    ) {
        self.presenter.present(ctx, painter, rect, self.sketch.surface());
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        // Check the shift variant before plain Ctrl+Z consumes the key.
        if ctx.input_mut(|i| {
            i.consume_shortcut(&REDO_SHIFT_SHORTCUT) || i.consume_shortcut(&REDO_SHORTCUT)
        }) {
            self.redo();
        }
        if ctx.input_mut(|i| i.consume_shortcut(&UNDO_SHORTCUT)) {
            self.undo();
        }
    }
}

impl eframe::App for SketchApp {
    /// Called by the framework to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self.sketch.settings());
    }

    /// Called each time the UI needs repainting.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_shortcuts(ctx);
        panels::tools_panel(self, ctx);
        panels::central_panel(self, ctx);
    }
}
