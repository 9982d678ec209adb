use std::time::Instant;

use a11y_widgets::config::SortableConfig;
use a11y_widgets::focus;
use a11y_widgets::item::{ElementKind, Source};
use a11y_widgets::registry::WidgetRegistry;
use a11y_widgets::reorder::{self, DropSide};
use a11y_widgets::state::WidgetState;
use a11y_widgets::widgets;

fn sortable(labels: &[&str]) -> WidgetState {
    let mut registry = WidgetRegistry::new();
    let id = registry.register(widgets::WidgetKind::Sortable);
    let source = Source::with_labels(ElementKind::List, labels);
    widgets::build(id, SortableConfig::new().into(), &source, Instant::now()).unwrap()
}

fn labels(state: &WidgetState) -> Vec<&str> {
    state.items().iter().map(|i| i.label()).collect()
}

fn five() -> WidgetState {
    sortable(&["0", "1", "2", "3", "4"])
}

// ============================================================================
// Keyboard moves
// ============================================================================

#[test]
fn test_move_item_by_swaps_neighbours() {
    let mut state = five();
    assert!(reorder::move_item_by(&mut state, 2, 1));
    assert_eq!(labels(&state), vec!["0", "1", "3", "2", "4"]);

    let positions: Vec<usize> = state
        .items()
        .iter()
        .map(|i| i.position().pos_in_set)
        .collect();
    assert_eq!(positions, vec![1, 2, 3, 4, 5]);
    for (i, item) in state.items().iter().enumerate() {
        assert_eq!(item.index(), i);
        assert_eq!(item.position().set_size, 5);
    }
}

#[test]
fn test_move_item_by_at_ends_is_noop() {
    let mut state = five();
    state.take_dirty();
    assert!(!reorder::move_item_by(&mut state, 0, -1));
    assert!(!reorder::move_item_by(&mut state, 4, 1));
    assert_eq!(labels(&state), vec!["0", "1", "2", "3", "4"]);
    assert!(!state.take_dirty());
}

#[test]
fn test_move_item_by_rejects_large_deltas() {
    let mut state = five();
    assert!(!reorder::move_item_by(&mut state, 0, 2));
    assert!(!reorder::move_item_by(&mut state, 9, -1));
}

#[test]
fn test_focus_follows_moved_item() {
    let mut state = five();
    focus::focus_path(&mut state, &[1]);
    reorder::move_item_by(&mut state, 1, 1);

    assert_eq!(state.focus(), Some(&[2][..]));
    assert_eq!(state.focused_item().unwrap().label(), "1");
}

#[test]
fn test_keys_survive_moves() {
    let mut state = five();
    let key = reorder::key_at(&state, 0).unwrap();
    reorder::move_item_by(&mut state, 0, 1);
    reorder::move_item_by(&mut state, 1, 1);
    assert_eq!(reorder::index_of(&state, key), Some(2));
}

// ============================================================================
// Pointer drag
// ============================================================================

#[test]
fn test_drop_side_from_offset() {
    assert_eq!(DropSide::from_offset(2.0, 10.0), DropSide::Before);
    assert_eq!(DropSide::from_offset(5.0, 10.0), DropSide::Before);
    assert_eq!(DropSide::from_offset(6.0, 10.0), DropSide::After);
}

#[test]
fn test_drag_forward_after_target() {
    let mut state = five();
    reorder::begin_drag(&mut state, 0);
    assert_eq!(
        reorder::drag_over(&mut state, 3, 8.0, 10.0),
        Some(DropSide::After)
    );
    assert!(reorder::commit_drop(&mut state));
    assert_eq!(labels(&state), vec!["1", "2", "3", "0", "4"]);
    assert!(state.drag().is_none());
}

#[test]
fn test_drag_forward_before_target() {
    let mut state = five();
    reorder::begin_drag(&mut state, 0);
    reorder::drag_over(&mut state, 3, 1.0, 10.0);
    assert!(reorder::commit_drop(&mut state));
    assert_eq!(labels(&state), vec!["1", "2", "0", "3", "4"]);
}

#[test]
fn test_drag_backward() {
    let mut state = five();
    reorder::begin_drag(&mut state, 4);
    reorder::drag_over(&mut state, 1, 1.0, 10.0);
    assert!(reorder::commit_drop(&mut state));
    assert_eq!(labels(&state), vec!["0", "4", "1", "2", "3"]);
}

#[test]
fn test_drop_next_to_itself_is_noop() {
    let mut state = five();
    reorder::begin_drag(&mut state, 2);
    reorder::drag_over(&mut state, 1, 9.0, 10.0);
    assert!(!reorder::commit_drop(&mut state));
    assert_eq!(labels(&state), vec!["0", "1", "2", "3", "4"]);

    reorder::begin_drag(&mut state, 2);
    reorder::drag_over(&mut state, 2, 1.0, 10.0);
    assert!(!reorder::commit_drop(&mut state));
    assert!(state.drag().is_none());
}

#[test]
fn test_drop_without_target_is_noop() {
    let mut state = five();
    reorder::begin_drag(&mut state, 2);
    assert!(!reorder::commit_drop(&mut state));
    assert!(!reorder::commit_drop(&mut state));
}

#[test]
fn test_cancel_drag_changes_nothing() {
    let mut state = five();
    reorder::begin_drag(&mut state, 0);
    reorder::drag_over(&mut state, 4, 9.0, 10.0);
    assert!(reorder::cancel_drag(&mut state));
    assert!(!reorder::cancel_drag(&mut state));
    assert!(!reorder::commit_drop(&mut state));
    assert_eq!(labels(&state), vec!["0", "1", "2", "3", "4"]);
}

#[test]
fn test_drag_over_without_drag() {
    let mut state = five();
    assert_eq!(reorder::drag_over(&mut state, 1, 1.0, 10.0), None);
}

#[test]
fn test_drag_session_tracks_identity() {
    let mut state = five();
    reorder::begin_drag(&mut state, 1);
    reorder::drag_over(&mut state, 3, 1.0, 10.0);

    let drag = state.drag().copied().unwrap();
    assert_eq!(Some(drag.source()), reorder::key_at(&state, 1));
    assert_eq!(
        drag.target(),
        Some((reorder::key_at(&state, 3).unwrap(), DropSide::Before))
    );
}
