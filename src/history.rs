use std::collections::VecDeque;

use crate::surface::{Snapshot, Surface};

/// Default bound on either history stack.
pub const DEFAULT_CAPACITY: usize = 64;

/// Capacity-bounded undo/redo stacks of full-surface snapshots.
///
/// One snapshot is recorded per completed stroke. Paint strokes land on the
/// undo stack; erase strokes land on the redo stack, keeping them out of the
/// undo sequence used for paint actions. When a push exceeds the capacity
/// the oldest entry is dropped.
pub struct SnapshotHistory {
    undo_stack: VecDeque<Snapshot>,
    redo_stack: VecDeque<Snapshot>,
    capacity: usize,
}

impl SnapshotHistory {
    /// Creates an empty history with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty history bounded at `capacity` entries per stack.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            undo_stack: VecDeque::new(),
            redo_stack: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    /// Records the post-stroke state of a completed paint stroke.
    pub fn push_undo(&mut self, snapshot: Snapshot) {
        if self.undo_stack.len() >= self.capacity {
            self.undo_stack.pop_front();
        }
        self.undo_stack.push_back(snapshot);
    }

    /// Records the post-stroke state of a completed erase stroke.
    pub fn push_redo(&mut self, snapshot: Snapshot) {
        if self.redo_stack.len() >= self.capacity {
            self.redo_stack.pop_front();
        }
        self.redo_stack.push_back(snapshot);
    }

    /// Steps the surface back to the previous recorded state. The popped
    /// snapshot moves to the redo stack; the surface is repainted from the
    /// new undo top, or cleared when none remains.
    ///
    /// Returns false, leaving the surface untouched, when nothing is
    /// recorded.
    pub fn undo(&mut self, surface: &mut Surface) -> bool {
        let Some(snapshot) = self.undo_stack.pop_back() else {
            return false;
        };
        self.push_redo(snapshot);
        match self.undo_stack.back() {
            Some(previous) => surface.restore(previous),
            None => surface.clear(),
        }
        true
    }

    /// Re-applies the most recently undone state and records a fresh capture
    /// of the restored surface as a new undo entry, so an undo right after
    /// returns to the just-redone state.
    ///
    /// Returns false, leaving the surface untouched, when the redo stack is
    /// empty.
    pub fn redo(&mut self, surface: &mut Surface) -> bool {
        let Some(snapshot) = self.redo_stack.pop_back() else {
            return false;
        };
        surface.restore(&snapshot);
        self.push_undo(surface.snapshot());
        true
    }

    /// Returns true if there are states that can be undone.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Returns true if there are states that can be redone.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drops all recorded states.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

impl Default for SnapshotHistory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{Color32, pos2};

    fn painted_surface(color: Color32) -> Surface {
        let mut surface = Surface::new([16, 16]);
        surface.stroke_segment(pos2(2.0, 8.0), pos2(14.0, 8.0), color, 2.0);
        surface
    }

    #[test]
    fn undo_on_empty_history_leaves_surface_alone() {
        let mut history = SnapshotHistory::new();
        let mut surface = painted_surface(Color32::RED);
        let before = surface.snapshot();

        assert!(!history.undo(&mut surface));
        assert_eq!(surface.snapshot(), before);
    }

    #[test]
    fn redo_on_empty_history_leaves_surface_alone() {
        let mut history = SnapshotHistory::new();
        let mut surface = painted_surface(Color32::RED);
        let before = surface.snapshot();

        assert!(!history.redo(&mut surface));
        assert_eq!(surface.snapshot(), before);
    }

    #[test]
    fn undo_past_oldest_state_clears_the_surface() {
        let mut history = SnapshotHistory::new();
        let mut surface = painted_surface(Color32::RED);
        history.push_undo(surface.snapshot());

        assert!(history.undo(&mut surface));
        assert_eq!(surface.snapshot(), Surface::new([16, 16]).snapshot());

        // Nothing left to undo.
        assert!(!history.undo(&mut surface));
    }

    #[test]
    fn redo_records_a_fresh_undo_entry() {
        let mut history = SnapshotHistory::new();
        let mut surface = painted_surface(Color32::RED);
        history.push_undo(surface.snapshot());
        let painted = surface.snapshot();

        history.undo(&mut surface);
        assert!(history.can_redo());

        history.redo(&mut surface);
        assert_eq!(surface.snapshot(), painted);
        assert_eq!(history.undo_len(), 1);
        assert!(!history.can_redo());

        // The fresh entry supports another undo back past the redone state.
        history.undo(&mut surface);
        assert_eq!(surface.snapshot(), Surface::new([16, 16]).snapshot());
    }

    #[test]
    fn pushes_beyond_capacity_drop_the_oldest() {
        let mut history = SnapshotHistory::with_capacity(3);
        let mut surface = Surface::new([8, 8]);

        for i in 0..5 {
            surface.stroke_segment(pos2(i as f32, 0.0), pos2(i as f32, 7.0), Color32::BLACK, 1.0);
            history.push_undo(surface.snapshot());
        }

        assert_eq!(history.undo_len(), 3);
        assert_eq!(history.capacity(), 3);
    }
}
