use egui::{Color32, pos2};
use sketchpad::brush::{BrushMode, BrushSettings, ERASE_WIDTH};
use sketchpad::sketch::Sketch;
use sketchpad::surface::BACKGROUND;

fn new_sketch() -> Sketch {
    Sketch::new([60, 40], BrushSettings::default())
}

#[test]
fn erase_toggle_round_trip_restores_paint_settings() {
    let mut sketch = new_sketch();

    // Red 3 px stroke: pointer-up records these as the paint settings.
    sketch.set_color(Color32::RED);
    sketch.cycle_width();
    sketch.cycle_width();
    assert_eq!(sketch.settings().line_width(), 3);

    sketch.begin_stroke(pos2(5.0, 20.0));
    sketch.continue_stroke(pos2(40.0, 20.0));
    sketch.end_stroke();

    sketch.toggle_eraser();
    assert_eq!(sketch.settings().mode(), BrushMode::Erase);
    assert_eq!(sketch.settings().line_width(), ERASE_WIDTH);
    assert_eq!(sketch.settings().active_color(), BACKGROUND);

    sketch.toggle_eraser();
    assert_eq!(sketch.settings().mode(), BrushMode::Paint);
    assert_eq!(sketch.settings().color(), Color32::RED);
    assert_eq!(sketch.settings().line_width(), 3);
}

#[test]
fn toggle_round_trip_without_a_completed_stroke_still_restores() {
    let mut sketch = new_sketch();

    sketch.set_color(Color32::BLUE);
    sketch.cycle_width(); // 2 px, never drawn with

    sketch.toggle_eraser();
    sketch.toggle_eraser();

    assert_eq!(sketch.settings().color(), Color32::BLUE);
    assert_eq!(sketch.settings().line_width(), 2);
}

#[test]
fn erase_stroke_paints_the_background_color() {
    let mut sketch = new_sketch();

    sketch.begin_stroke(pos2(5.0, 20.0));
    sketch.continue_stroke(pos2(50.0, 20.0));
    sketch.end_stroke();
    assert_eq!(sketch.surface().pixel(25, 20), Color32::BLACK);

    sketch.toggle_eraser();
    sketch.begin_stroke(pos2(25.0, 5.0));
    sketch.continue_stroke(pos2(25.0, 35.0));
    sketch.end_stroke();

    assert_eq!(sketch.surface().pixel(25, 20), BACKGROUND);
}

#[test]
fn color_picked_while_erasing_never_reaches_the_surface() {
    let mut sketch = new_sketch();

    sketch.toggle_eraser();
    sketch.set_color(Color32::BLUE);
    assert_eq!(sketch.settings().active_color(), BACKGROUND);

    sketch.begin_stroke(pos2(5.0, 20.0));
    sketch.continue_stroke(pos2(50.0, 20.0));
    sketch.end_stroke();
    assert_eq!(sketch.surface().pixel(25, 20), BACKGROUND);

    // Leaving erase mode restores the recorded paint settings; a pick made
    // mid-erase is superseded by the restore.
    sketch.toggle_eraser();
    assert_eq!(sketch.settings().color(), Color32::BLACK);
}

#[test]
fn width_cycling_wraps_ten_back_to_one() {
    let mut sketch = new_sketch();
    assert_eq!(sketch.settings().line_width(), 1);

    for n in 1..=12u32 {
        let width = sketch.cycle_width();
        assert_eq!(width, ((1 + n - 1) % 10) + 1, "after {n} cycles");
    }
}
