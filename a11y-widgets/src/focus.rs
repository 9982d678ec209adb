//! Roving focus controller.
//!
//! A widget has exactly one focusable item whenever it has items at all.
//! Every function here keeps that invariant: the new focus stop is
//! promoted, everything else is demoted.

use crate::item::{self, ItemPath};
use crate::state::WidgetState;

/// Direction of a focus move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Next,
    Previous,
    First,
    Last,
}

/// What happens when focus moves past either end of a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Boundary {
    /// Past the end continues at the other end.
    Wrap,
    /// Moving past an end does nothing.
    Clamp,
}

/// Which items a focus move walks over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavScope {
    /// Siblings of the focused item (menubar, submenu, flat lists).
    Siblings,
    /// All visible items in display order (tree).
    Visible,
}

/// Compute the index reached by moving from `index` in a collection of `len`.
///
/// Returns `None` when the move is blocked at a clamped boundary.
pub fn step(index: usize, len: usize, direction: Direction, boundary: Boundary) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let last = len - 1;
    match (direction, boundary) {
        (Direction::First, _) => Some(0),
        (Direction::Last, _) => Some(last),
        (Direction::Next, _) if index < last => Some(index + 1),
        (Direction::Next, Boundary::Wrap) => Some(0),
        (Direction::Previous, _) if index > 0 => Some(index - 1),
        (Direction::Previous, Boundary::Wrap) => Some(last),
        _ => None,
    }
}

/// Move focus in `direction` using the widget's scope and boundary policy.
///
/// Returns true if focus changed. Empty widgets are a no-op.
pub fn move_focus(state: &mut WidgetState, direction: Direction) -> bool {
    let Some(current) = state.focus.clone() else {
        return false;
    };
    let kind = state.kind();
    let boundary = kind.boundary();

    let target = match kind.nav_scope() {
        NavScope::Siblings => {
            let Some(len) = item::siblings(&state.items, &current).map(|s| s.len()) else {
                return false;
            };
            let Some((&index, parent)) = current.split_last() else {
                return false;
            };
            let Some(next) = step(index, len, direction, boundary) else {
                return false;
            };
            let mut path = parent.to_vec();
            path.push(next);
            path
        }
        NavScope::Visible => {
            let visible = item::visible_paths(&state.items);
            let Some(index) = visible.iter().position(|p| *p == current) else {
                return false;
            };
            let Some(next) = step(index, visible.len(), direction, boundary) else {
                return false;
            };
            visible[next].clone()
        }
    };

    log::trace!("{}: move focus {:?} to {:?}", state.id(), direction, target);
    set_focus(state, target)
}

/// Enter the child level of the focused item, focusing child `index`.
///
/// The focused item must be expanded. An index past the last child focuses
/// the last child.
pub fn move_focus_into(state: &mut WidgetState, index: usize) -> bool {
    let Some(current) = state.focus.clone() else {
        return false;
    };
    let Some(item) = item::get(&state.items, &current) else {
        return false;
    };
    if !item.expanded || item.children.is_empty() {
        return false;
    }
    let mut path = current;
    path.push(index.min(item.children.len() - 1));
    set_focus(state, path)
}

/// Return focus from a nested level to its parent item.
pub fn move_focus_out(state: &mut WidgetState) -> bool {
    let Some(mut path) = state.focus.clone() else {
        return false;
    };
    if path.len() < 2 {
        return false;
    }
    path.pop();
    set_focus(state, path)
}

/// Put focus on the item at `path`.
///
/// Paths that do not exist or are hidden inside a collapsed branch are
/// ignored.
pub fn focus_path(state: &mut WidgetState, path: &[usize]) -> bool {
    set_focus(state, path.to_vec())
}

/// Focus `path`, demoting every other item. Returns true if focus moved.
pub(crate) fn set_focus(state: &mut WidgetState, path: ItemPath) -> bool {
    if !item::is_visible(&state.items, &path) {
        return false;
    }
    if state.focus.as_ref() == Some(&path) {
        return false;
    }

    item::walk_mut(&mut state.items, &mut |item| item.focusable = false);
    if let Some(item) = item::get_mut(&mut state.items, &path) {
        item.focusable = true;
    }
    state.focus = Some(path);
    state.mark_dirty();
    true
}

/// Re-derive the focus path from the focusable flag after items moved.
pub(crate) fn resync(state: &mut WidgetState) {
    fn find(items: &[item::Item], path: &mut ItemPath) -> Option<ItemPath> {
        for (i, item) in items.iter().enumerate() {
            path.push(i);
            if item.focusable {
                return Some(path.clone());
            }
            if let Some(found) = find(&item.children, path) {
                return Some(found);
            }
            path.pop();
        }
        None
    }
    state.focus = find(&state.items, &mut Vec::new());
}
