//! Tests for the value controller.

use a11y_widgets::value::{ProgressValue, SliderValue, ValueRange};

fn slider(min: i64, max: i64, step: i64) -> SliderValue {
    SliderValue::new(ValueRange::new(min, max), step, min)
}

// ============================================================================
// ValueRange
// ============================================================================

#[test]
fn test_range_percent() {
    let range = ValueRange::new(0, 100);
    assert_eq!(range.percent(0), 0);
    assert_eq!(range.percent(42), 42);
    assert_eq!(range.percent(100), 100);

    let range = ValueRange::new(10, 40);
    assert_eq!(range.percent(20), 33);
}

#[test]
fn test_range_clamp() {
    let range = ValueRange::new(-5, 5);
    assert_eq!(range.clamp(-10), -5);
    assert_eq!(range.clamp(3), 3);
    assert_eq!(range.clamp(10), 5);
}

// ============================================================================
// Slider snapping
// ============================================================================

#[test]
fn test_snap_rounds_at_two_thirds_of_step() {
    let s = slider(0, 100, 10);
    assert_eq!(s.snap(6), 0);
    assert_eq!(s.snap(7), 10);
    assert_eq!(s.snap(10), 10);
    assert_eq!(s.snap(46), 40);
    assert_eq!(s.snap(47), 50);
}

#[test]
fn test_snap_out_of_range_goes_to_bound() {
    let s = slider(0, 100, 10);
    assert_eq!(s.snap(-3), 0);
    assert_eq!(s.snap(250), 100);
}

#[test]
fn test_snap_is_relative_to_min() {
    let s = slider(5, 50, 10);
    assert_eq!(s.snap(11), 5);
    assert_eq!(s.snap(12), 15);
}

#[test]
fn test_snap_past_max_gives_max() {
    // Grid from 0 by 10 ends at 90, max is 98.
    let s = slider(0, 98, 10);
    assert_eq!(s.snap(93), 90);
    assert_eq!(s.snap(97), 98);
    assert_eq!(s.snap(98), 98);
}

#[test]
fn test_slider_set_reports_change() {
    let mut s = slider(0, 100, 10);
    assert!(s.set(20));
    assert_eq!(s.value(), 20);
    assert!(!s.set(21));
    assert_eq!(s.value(), 20);
}

#[test]
fn test_slider_initial_value_snaps() {
    let s = SliderValue::new(ValueRange::new(0, 100), 10, 38);
    assert_eq!(s.value(), 40);
    assert_eq!(s.percent(), 40);
}

#[test]
fn test_value_at_fraction() {
    let s = slider(0, 200, 1);
    assert_eq!(s.value_at(0.0), 0);
    assert_eq!(s.value_at(0.25), 50);
    assert_eq!(s.value_at(1.0), 200);
    assert_eq!(s.value_at(-1.0), 0);
    assert_eq!(s.value_at(3.0), 200);
    assert_eq!(s.value_at(f64::NAN), 0);
}

#[test]
fn test_full_i64_range() {
    let s = slider(i64::MIN, i64::MAX, 10);
    // The span is 2^64 - 1, so max sits 5 past the last grid point.
    assert_eq!(s.snap(i64::MAX - 1), i64::MAX - 5);
    assert_eq!(s.snap(i64::MIN + 7), i64::MIN + 10);
    assert_eq!(s.value_at(0.5), 0);
    assert_eq!(s.value_at(1.0), i64::MAX);

    let s = SliderValue::new(ValueRange::new(i64::MIN, i64::MAX), 10, i64::MAX - 1);
    assert_eq!(s.value(), i64::MAX - 5);
    assert_eq!(s.step_up(), i64::MAX);
    assert_eq!(s.step_down(), i64::MAX - 15);
    assert_eq!(s.percent(), 99);
}

#[test]
fn test_step_up_and_down_stay_in_range() {
    let s = slider(-3, 3, 4);
    assert_eq!(s.step_down(), -3);
    assert_eq!(s.step_up(), 1);

    let s = SliderValue::new(ValueRange::new(-3, 3), 4, 3);
    assert_eq!(s.value(), 3);
    assert_eq!(s.step_up(), 3);
    assert_eq!(s.step_down(), 1);
}

// ============================================================================
// Progress
// ============================================================================

#[test]
fn test_progress_completes_once() {
    let mut p = ProgressValue::new(ValueRange::new(0, 100));
    let first = p.set(100);
    assert!(first.changed);
    assert!(first.completed);
    assert!(p.is_complete());

    let second = p.set(100);
    assert!(!second.changed);
    assert!(!second.completed);
}

#[test]
fn test_progress_ignores_decreases() {
    let mut p = ProgressValue::new(ValueRange::new(0, 100));
    p.set(60);
    let update = p.set(30);
    assert!(!update.changed);
    assert_eq!(p.value(), 60);
}

#[test]
fn test_progress_clamps_past_max() {
    let mut p = ProgressValue::new(ValueRange::new(0, 100));
    assert!(p.set(500).completed);
    assert_eq!(p.value(), 100);
    assert_eq!(p.percent(), 100);
}

#[test]
fn test_progress_reset() {
    let mut p = ProgressValue::new(ValueRange::new(0, 100));
    p.set(100);
    assert!(p.reset());
    assert_eq!(p.value(), 0);
    assert!(!p.is_complete());
    assert!(!p.reset());

    // Completes again after a reset.
    assert!(p.set(100).completed);
}
