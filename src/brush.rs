use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::surface::BACKGROUND;

/// Smallest and largest selectable line widths; cycling wraps between them.
pub const MIN_LINE_WIDTH: u32 = 1;
pub const MAX_LINE_WIDTH: u32 = 10;

/// Fixed width applied while erasing.
pub const ERASE_WIDTH: u32 = 15;

/// The two drawing modes. Erase strokes rasterize the background color and
/// keep their snapshots out of the undo stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrushMode {
    Paint,
    Erase,
}

/// Active brush configuration, plus the paint settings restored when erase
/// mode ends.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct BrushSettings {
    color: Color32,
    line_width: u32,
    mode: BrushMode,
    prev_color: Color32,
    prev_line_width: u32,
}

impl Default for BrushSettings {
    fn default() -> Self {
        Self {
            color: Color32::BLACK,
            line_width: MIN_LINE_WIDTH,
            mode: BrushMode::Paint,
            prev_color: Color32::BLACK,
            prev_line_width: MIN_LINE_WIDTH,
        }
    }
}

impl BrushSettings {
    /// The paint color, regardless of mode.
    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn line_width(&self) -> u32 {
        self.line_width
    }

    pub fn mode(&self) -> BrushMode {
        self.mode
    }

    pub fn is_erasing(&self) -> bool {
        self.mode == BrushMode::Erase
    }

    /// Color strokes actually rasterize in: the picked color while painting,
    /// the background while erasing.
    pub fn active_color(&self) -> Color32 {
        match self.mode {
            BrushMode::Paint => self.color,
            BrushMode::Erase => BACKGROUND,
        }
    }

    /// Sets the paint color. Erase strokes are unaffected until the mode
    /// flips back.
    pub fn set_color(&mut self, color: Color32) {
        self.color = color;
    }

    /// Advances the width one step, wrapping 10 back to 1. Returns the new
    /// width.
    pub fn cycle_width(&mut self) -> u32 {
        self.line_width = if self.line_width >= MAX_LINE_WIDTH {
            MIN_LINE_WIDTH
        } else {
            self.line_width + 1
        };
        self.line_width
    }

    /// Captures the current paint settings for restoration on erase exit.
    /// No-op while erasing.
    pub fn remember_paint_settings(&mut self) {
        if self.mode == BrushMode::Paint {
            self.prev_color = self.color;
            self.prev_line_width = self.line_width;
        }
    }

    /// Flips between paint and erase. Entering erase records the paint
    /// settings and applies the fixed erase width; leaving restores the
    /// recorded settings verbatim.
    pub fn toggle_mode(&mut self) {
        match self.mode {
            BrushMode::Paint => {
                self.remember_paint_settings();
                self.mode = BrushMode::Erase;
                self.line_width = ERASE_WIDTH;
            }
            BrushMode::Erase => {
                self.mode = BrushMode::Paint;
                self.color = self.prev_color;
                self.line_width = self.prev_line_width;
            }
        }
    }

    /// Label for the width-cycling button.
    pub fn width_label(&self) -> String {
        format!("{} px", self.line_width)
    }

    /// Hex form of the paint color, shown next to the picker.
    pub fn color_hex(&self) -> String {
        format!(
            "#{:02x}{:02x}{:02x}",
            self.color.r(),
            self.color.g(),
            self.color.b()
        )
    }
}
