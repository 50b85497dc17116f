use egui::{Color32, Pos2};
use log::debug;

use crate::brush::{BrushMode, BrushSettings};
use crate::history::SnapshotHistory;
use crate::input::PointerTracker;
use crate::surface::{Snapshot, Surface};

/// The whole drawing model: surface, pointer state, brush settings and
/// snapshot history, plus the canonical post-stroke snapshot the resize
/// handler repaints from.
///
/// One instance is owned by the application; panels receive it by reference.
pub struct Sketch {
    surface: Surface,
    tracker: PointerTracker,
    history: SnapshotHistory,
    settings: BrushSettings,
    current_state: Snapshot,
    stroke_dirty: bool,
}

impl Sketch {
    pub fn new(size: [usize; 2], settings: BrushSettings) -> Self {
        let surface = Surface::new(size);
        let current_state = surface.snapshot();
        Self {
            surface,
            tracker: PointerTracker::default(),
            history: SnapshotHistory::new(),
            settings,
            current_state,
            stroke_dirty: false,
        }
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn settings(&self) -> &BrushSettings {
        &self.settings
    }

    pub fn history(&self) -> &SnapshotHistory {
        &self.history
    }

    pub fn is_drawing(&self) -> bool {
        self.tracker.is_active()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Starts a stroke at `pos` (surface coordinates).
    pub fn begin_stroke(&mut self, pos: Pos2) {
        self.tracker.begin(pos);
        self.stroke_dirty = false;
    }

    /// Extends the active stroke to `pos`, rasterizing one segment with the
    /// active color and width. No-op while no stroke is active.
    pub fn continue_stroke(&mut self, pos: Pos2) {
        if !self.tracker.is_active() {
            return;
        }
        if self.surface.width() == 0 || self.surface.height() == 0 {
            // Not sized yet; nothing to rasterize or record.
            self.tracker.advance(pos);
            return;
        }
        let from = self.tracker.last_pos();
        self.surface.stroke_segment(
            from,
            pos,
            self.settings.active_color(),
            self.settings.line_width() as f32,
        );
        self.tracker.advance(pos);
        self.stroke_dirty = true;
    }

    /// Finishes the active stroke. If it drew anything, one coalesced
    /// snapshot is recorded: on the undo stack for paint strokes, on the
    /// redo stack for erase strokes. The canonical current state is
    /// re-captured either way, and paint-mode settings are remembered for
    /// erase-exit restoration.
    pub fn end_stroke(&mut self) {
        if !self.tracker.is_active() {
            return;
        }
        self.tracker.end();
        let snapshot = self.surface.snapshot();
        if self.stroke_dirty {
            match self.settings.mode() {
                BrushMode::Paint => self.history.push_undo(snapshot.clone()),
                BrushMode::Erase => self.history.push_redo(snapshot.clone()),
            }
            self.stroke_dirty = false;
        }
        self.current_state = snapshot;
        self.settings.remember_paint_settings();
    }

    /// Steps back to the previous recorded state; silent no-op on empty
    /// history.
    pub fn undo(&mut self) {
        if self.history.undo(&mut self.surface) {
            self.current_state = self.surface.snapshot();
        } else {
            debug!("undo ignored: nothing recorded");
        }
    }

    /// Re-applies the most recently undone state; silent no-op when there is
    /// none.
    pub fn redo(&mut self) {
        if self.history.redo(&mut self.surface) {
            self.current_state = self.surface.snapshot();
        } else {
            debug!("redo ignored: nothing to re-apply");
        }
    }

    /// Applies a new canvas size: the surface reallocates (dropping all
    /// pixels, as a native canvas does) and the canonical state is painted
    /// back, cropped or padded to fit. No-op when the size is unchanged.
    pub fn handle_resize(&mut self, size: [usize; 2]) {
        if size == self.surface.size() {
            return;
        }
        debug!("surface resize {:?} -> {:?}", self.surface.size(), size);
        self.surface.resize(size);
        self.surface.restore(&self.current_state);
        self.current_state = self.surface.snapshot();
    }

    /// Flips between paint and erase mode.
    pub fn toggle_eraser(&mut self) {
        self.settings.toggle_mode();
    }

    /// Advances the line width one step, wrapping 10 back to 1.
    pub fn cycle_width(&mut self) -> u32 {
        self.settings.cycle_width()
    }

    /// Applies a color-picker selection as the paint color.
    pub fn set_color(&mut self, color: Color32) {
        self.settings.set_color(color);
    }
}
