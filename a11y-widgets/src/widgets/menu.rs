//! Menubar with single-open submenus.
//!
//! The top level is navigated with left/right, submenus with up/down.
//! Space opens a submenu and enters it, Escape closes the submenu the
//! focus is in, Enter activates. Tab, activation and window resizes close
//! everything.

use crate::config::{MenuConfig, WidgetConfig};
use crate::disclosure;
use crate::error::WidgetError;
use crate::focus::{self, Direction};
use crate::input::{Axis, Input, LogicalAction};
use crate::item::{self, Source};
use crate::registry::WidgetId;
use crate::reorder;
use crate::state::WidgetState;
use crate::widgets::{Response, take_initial_selection};

pub(crate) fn build(
    id: WidgetId,
    config: MenuConfig,
    source: &Source,
) -> Result<WidgetState, WidgetError> {
    let mut items = source.build_items();
    reorder::renumber(&mut items);

    let mut state = WidgetState::new(id, WidgetConfig::Menu(config), items);
    if state.items.is_empty() {
        return Ok(state);
    }

    // Submenus start closed, so a preselected entry is reached through its
    // top-level ancestor.
    let top = take_initial_selection(&mut state)
        .and_then(|path| path.first().copied())
        .unwrap_or(0);
    focus::set_focus(&mut state, vec![top]);
    Ok(state)
}

/// Activate the item at `path`: every submenu closes and the item is
/// reported to the adapter.
pub fn activate(state: &mut WidgetState, path: &[usize]) -> Response {
    if item::get(&state.items, path).is_none() {
        return Response::default();
    }
    log::debug!("{}: activated {:?}", state.id(), path);
    disclosure::collapse_all(state);
    Response {
        activated: Some(path.to_vec()),
        ..Default::default()
    }
}

pub(crate) fn on_action(state: &mut WidgetState, action: LogicalAction) -> Response {
    let Some(current) = state.focus.clone() else {
        return Response::default();
    };
    let depth = current.len();

    match action {
        LogicalAction::Next(Axis::Horizontal) if depth == 1 => {
            focus::move_focus(state, Direction::Next);
        }
        LogicalAction::Previous(Axis::Horizontal) if depth == 1 => {
            focus::move_focus(state, Direction::Previous);
        }
        LogicalAction::Next(Axis::Vertical) if depth > 1 => {
            focus::move_focus(state, Direction::Next);
        }
        LogicalAction::Previous(Axis::Vertical) if depth > 1 => {
            focus::move_focus(state, Direction::Previous);
        }
        LogicalAction::Expand => {
            // Entering requires the submenu open, so leaves stay put.
            disclosure::expand(state, &current);
            focus::move_focus_into(state, 0);
        }
        LogicalAction::Cancel if depth > 1 => {
            disclosure::collapse(state, &current[..depth - 1]);
        }
        LogicalAction::Activate => return activate(state, &current),
        LogicalAction::Leave => {
            disclosure::collapse_all(state);
        }
        _ => {}
    }
    Response::default()
}

pub(crate) fn on_input(state: &mut WidgetState, input: Input, origin: Option<&[usize]>) -> Response {
    match (input, origin) {
        (Input::Click, Some(path)) => return activate(state, path),
        (Input::PointerEnter, Some(path)) => {
            disclosure::expand(state, path);
        }
        (Input::PointerLeave, Some(path)) => {
            disclosure::collapse(state, path);
        }
        (Input::Resize, _) => {
            disclosure::collapse_all(state);
        }
        _ => {}
    }
    Response::default()
}
