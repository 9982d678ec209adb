//! Sortable list: arrow keys move focus, primary modifier + arrow moves the
//! item, pointer drag moves it any distance.

use crate::config::{SortableConfig, WidgetConfig};
use crate::error::WidgetError;
use crate::focus::{self, Direction};
use crate::input::{Input, LogicalAction};
use crate::item::{Item, Source};
use crate::registry::WidgetId;
use crate::reorder;
use crate::state::WidgetState;
use crate::widgets::Response;

pub(crate) fn build(
    id: WidgetId,
    config: SortableConfig,
    source: &Source,
) -> Result<WidgetState, WidgetError> {
    let mut items = source.build_items();
    reorder::renumber(&mut items);

    let mut state = WidgetState::new(id, WidgetConfig::Sortable(config), items);
    if !state.items.is_empty() {
        focus::set_focus(&mut state, vec![0]);
    }
    Ok(state)
}

/// Label announcing an item's place in the list, e.g. `"Apples 2 of 5 movable"`.
pub fn accessible_label(item: &Item) -> String {
    let position = item.position();
    format!(
        "{} {} of {} movable",
        item.label(),
        position.pos_in_set,
        position.set_size
    )
}

/// The item the input acts on: the origin when given, else the focus stop.
fn acting_index(state: &WidgetState, origin: Option<&[usize]>) -> Option<usize> {
    match origin {
        Some(&[index]) if index < state.items.len() => Some(index),
        Some(_) => None,
        None => state.current_index(),
    }
}

pub(crate) fn on_action(
    state: &mut WidgetState,
    action: LogicalAction,
    origin: Option<&[usize]>,
) -> Response {
    let Some(index) = acting_index(state, origin) else {
        return Response::default();
    };
    focus::focus_path(state, &[index]);

    match action {
        LogicalAction::Next(_) => {
            focus::move_focus(state, Direction::Next);
        }
        LogicalAction::Previous(_) => {
            focus::move_focus(state, Direction::Previous);
        }
        LogicalAction::MoveNext => {
            reorder::move_item_by(state, index, 1);
        }
        LogicalAction::MovePrevious => {
            reorder::move_item_by(state, index, -1);
        }
        _ => {}
    }
    Response::default()
}

pub(crate) fn on_input(state: &mut WidgetState, input: Input, origin: Option<&[usize]>) -> Response {
    match (input, origin) {
        (Input::DragStart, Some(&[index])) => {
            reorder::begin_drag(state, index);
        }
        (Input::DragOver { offset, extent }, Some(&[index])) => {
            reorder::drag_over(state, index, offset, extent);
        }
        (Input::Drop, _) => {
            reorder::commit_drop(state);
        }
        (Input::DragCancel, _) => {
            reorder::cancel_drag(state);
        }
        _ => {}
    }
    Response::default()
}
