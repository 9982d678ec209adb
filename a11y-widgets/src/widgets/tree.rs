//! Tree menu: visible-order navigation, independent branches, selection
//! follows focus.

use crate::config::{TreeMenuConfig, WidgetConfig};
use crate::disclosure;
use crate::error::WidgetError;
use crate::focus::{self, Direction};
use crate::input::{Input, LogicalAction};
use crate::item::{self, Source};
use crate::registry::WidgetId;
use crate::reorder;
use crate::state::WidgetState;
use crate::widgets::{Response, take_initial_selection};

pub(crate) fn build(
    id: WidgetId,
    config: TreeMenuConfig,
    source: &Source,
) -> Result<WidgetState, WidgetError> {
    let expand_all = config.expand_all;
    let mut items = source.build_items();
    reorder::renumber(&mut items);

    let mut state = WidgetState::new(id, WidgetConfig::TreeMenu(config), items);
    if expand_all {
        disclosure::expand_all(&mut state);
    }
    if state.items.is_empty() {
        return Ok(state);
    }

    // A preselected item inside a collapsed branch opens the branch.
    match take_initial_selection(&mut state) {
        Some(path) => {
            for depth in 1..path.len() {
                disclosure::expand(&mut state, &path[..depth]);
            }
            focus::set_focus(&mut state, path);
        }
        None => {
            focus::set_focus(&mut state, vec![0]);
        }
    }
    Ok(state)
}

/// Select the item at `path`, making it the focus stop. Hidden items are
/// ignored.
pub fn select_item(state: &mut WidgetState, path: &[usize]) -> bool {
    if !item::is_visible(&state.items, path) {
        return false;
    }
    let already = item::get(&state.items, path).is_some_and(|i| i.is_selected());
    let moved = focus::focus_path(state, path);
    if already {
        return moved;
    }

    item::walk_mut(&mut state.items, &mut |item| item.selected = false);
    if let Some(target) = item::get_mut(&mut state.items, path) {
        target.selected = true;
    }
    log::trace!("{}: selected {:?}", state.id(), path);
    state.mark_dirty();
    true
}

pub(crate) fn on_action(state: &mut WidgetState, action: LogicalAction) -> Response {
    let Some(current) = state.focus.clone() else {
        return Response::default();
    };

    let direction = match action {
        LogicalAction::Next(_) => Some(Direction::Next),
        LogicalAction::Previous(_) => Some(Direction::Previous),
        LogicalAction::First => Some(Direction::First),
        LogicalAction::Last => Some(Direction::Last),
        _ => None,
    };
    if let Some(direction) = direction {
        if focus::move_focus(state, direction)
            && let Some(path) = state.focus.clone()
        {
            select_item(state, &path);
        }
        return Response::default();
    }

    match action {
        LogicalAction::Expand => {
            disclosure::expand(state, &current);
        }
        LogicalAction::Collapse => {
            disclosure::collapse(state, &current);
        }
        LogicalAction::Toggle => {
            disclosure::toggle(state, &current);
        }
        _ => {}
    }
    Response::default()
}

pub(crate) fn on_input(state: &mut WidgetState, input: Input, origin: Option<&[usize]>) -> Response {
    if let (Input::Click, Some(path)) = (input, origin)
        && item::is_visible(&state.items, path)
    {
        disclosure::toggle(state, path);
        select_item(state, path);
    }
    Response::default()
}
