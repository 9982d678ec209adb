use std::time::Instant;

use a11y_widgets::config::SortableConfig;
use a11y_widgets::input::{Input, Key, Modifiers};
use a11y_widgets::item::{self, ElementKind, Source};
use a11y_widgets::registry::WidgetRegistry;
use a11y_widgets::state::WidgetState;
use a11y_widgets::widgets::{self, WidgetKind, sortable};

fn fruit() -> WidgetState {
    let mut registry = WidgetRegistry::new();
    let id = registry.register(WidgetKind::Sortable);
    let source = Source::with_labels(ElementKind::List, &["Apple", "Banana", "Cherry", "Date"]);
    widgets::build(id, SortableConfig::new().into(), &source, Instant::now()).unwrap()
}

fn labels(state: &WidgetState) -> Vec<&str> {
    state.items().iter().map(|i| i.label()).collect()
}

fn press(state: &mut WidgetState, key: Key, modifiers: Modifiers) {
    widgets::dispatch(state, Input::Key(key), modifiers, None, Instant::now());
}

fn pointer(state: &mut WidgetState, input: Input, origin: Option<&[usize]>) {
    widgets::dispatch(state, input, Modifiers::NONE, origin, Instant::now());
}

#[test]
fn test_accessible_label() {
    let state = fruit();
    assert_eq!(
        sortable::accessible_label(&state.items()[1]),
        "Banana 2 of 4 movable"
    );
}

#[test]
fn test_arrows_move_focus_only() {
    let mut state = fruit();
    press(&mut state, Key::Down, Modifiers::NONE);
    press(&mut state, Key::Down, Modifiers::NONE);
    assert_eq!(state.current_index(), Some(2));
    press(&mut state, Key::Up, Modifiers::NONE);
    assert_eq!(state.current_index(), Some(1));
    assert_eq!(labels(&state), vec!["Apple", "Banana", "Cherry", "Date"]);
}

#[test]
fn test_primary_arrows_move_item() {
    let mut state = fruit();
    press(&mut state, Key::Down, Modifiers::ctrl());
    assert_eq!(labels(&state), vec!["Banana", "Apple", "Cherry", "Date"]);
    assert_eq!(state.focused_item().unwrap().label(), "Apple");

    press(&mut state, Key::Down, Modifiers::meta());
    assert_eq!(labels(&state), vec!["Banana", "Cherry", "Apple", "Date"]);

    press(&mut state, Key::Up, Modifiers::ctrl());
    assert_eq!(labels(&state), vec!["Banana", "Apple", "Cherry", "Date"]);
    assert_eq!(
        sortable::accessible_label(state.focused_item().unwrap()),
        "Apple 2 of 4 movable"
    );
}

#[test]
fn test_move_past_ends_is_ignored() {
    let mut state = fruit();
    press(&mut state, Key::Up, Modifiers::ctrl());
    assert_eq!(labels(&state), vec!["Apple", "Banana", "Cherry", "Date"]);
}

#[test]
fn test_key_on_origin_item() {
    let mut state = fruit();
    widgets::dispatch(
        &mut state,
        Input::Key(Key::Down),
        Modifiers::ctrl(),
        Some(&[2]),
        Instant::now(),
    );
    assert_eq!(labels(&state), vec!["Apple", "Banana", "Date", "Cherry"]);
    assert_eq!(state.current_index(), Some(3));
    assert_eq!(item::focusable_count(state.items()), 1);
}

#[test]
fn test_pointer_drag() {
    let mut state = fruit();
    pointer(&mut state, Input::DragStart, Some(&[3]));
    pointer(
        &mut state,
        Input::DragOver {
            offset: 1.0,
            extent: 20.0,
        },
        Some(&[0]),
    );
    pointer(&mut state, Input::Drop, None);
    assert_eq!(labels(&state), vec!["Date", "Apple", "Banana", "Cherry"]);
    assert!(state.drag().is_none());

    for (i, item) in state.items().iter().enumerate() {
        assert_eq!(item.position().pos_in_set, i + 1);
    }
}

#[test]
fn test_pointer_drag_cancel() {
    let mut state = fruit();
    pointer(&mut state, Input::DragStart, Some(&[0]));
    pointer(
        &mut state,
        Input::DragOver {
            offset: 15.0,
            extent: 20.0,
        },
        Some(&[2]),
    );
    pointer(&mut state, Input::DragCancel, None);
    pointer(&mut state, Input::Drop, None);
    assert_eq!(labels(&state), vec!["Apple", "Banana", "Cherry", "Date"]);
}
