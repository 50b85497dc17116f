use egui::Pos2;

/// Tracks whether a stroke is in progress and the last pointer position.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerTracker {
    active: bool,
    last: Pos2,
}

impl PointerTracker {
    /// Marks a stroke as active starting at `pos`.
    pub fn begin(&mut self, pos: Pos2) {
        self.active = true;
        self.last = pos;
    }

    /// Moves the last-seen position to `pos`.
    pub fn advance(&mut self, pos: Pos2) {
        self.last = pos;
    }

    /// Marks the stroke as finished.
    pub fn end(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn last_pos(&self) -> Pos2 {
        self.last
    }
}
