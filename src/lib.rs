#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod brush;
pub mod export;
pub mod history;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod sketch;
pub mod surface;

pub use app::SketchApp;
pub use brush::{BrushMode, BrushSettings};
pub use export::ExportError;
pub use history::SnapshotHistory;
pub use input::PointerTracker;
pub use renderer::SurfacePresenter;
pub use sketch::Sketch;
pub use surface::{Snapshot, Surface};
