//! Reorder controller for sortable lists.
//!
//! Items move either one slot at a time from the keyboard or any distance by
//! pointer drag. Items are moved, never cloned, so keys survive every
//! reorder. Position metadata is recomputed after each move.

use crate::focus;
use crate::item::{self, Item, ItemKey, Position};
use crate::state::WidgetState;

/// Which side of the hovered target the dragged item lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DropSide {
    Before,
    After,
}

impl DropSide {
    /// Resolve the side from the pointer offset within a target of `extent`.
    pub fn from_offset(offset: f32, extent: f32) -> Self {
        if offset > extent / 2.0 {
            DropSide::After
        } else {
            DropSide::Before
        }
    }
}

/// Transient state of a pointer drag. Lives from `begin_drag` until the
/// drop or cancel, whichever comes first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    source: ItemKey,
    target: Option<(ItemKey, DropSide)>,
}

impl DragSession {
    pub fn source(&self) -> ItemKey {
        self.source
    }

    /// The hovered target and the side the item would land on.
    pub fn target(&self) -> Option<(ItemKey, DropSide)> {
        self.target
    }
}

/// Recompute index and position metadata for every item.
pub fn renumber(items: &mut [Item]) {
    fn renumber_level(items: &mut [Item], level: usize) {
        let set_size = items.len();
        for (i, item) in items.iter_mut().enumerate() {
            item.index = i;
            item.position = Position {
                level,
                pos_in_set: i + 1,
                set_size,
            };
            renumber_level(&mut item.children, level + 1);
        }
    }
    renumber_level(items, 1);
}

/// Swap the item at `index` with its neighbour `delta` (−1 or +1) slots away.
///
/// Moves past either end, and deltas other than ±1, are ignored.
pub fn move_item_by(state: &mut WidgetState, index: usize, delta: isize) -> bool {
    if delta != 1 && delta != -1 {
        return false;
    }
    let Some(target) = index.checked_add_signed(delta) else {
        return false;
    };
    if index >= state.items.len() || target >= state.items.len() {
        return false;
    }

    state.items.swap(index, target);
    finish_move(state);
    log::debug!("{}: moved item {} to {}", state.id(), index, target);
    true
}

/// Start dragging the item at `index`, replacing any drag in progress.
pub fn begin_drag(state: &mut WidgetState, index: usize) -> bool {
    let Some(source) = state.items.get(index).map(|i| i.key()) else {
        return false;
    };
    log::trace!("{}: drag start on {}", state.id(), index);
    state.drag = Some(DragSession {
        source,
        target: None,
    });
    true
}

/// The dragged item hovers the item at `target`.
///
/// Returns the side it would be dropped on, or `None` without an active
/// drag or for a target that does not exist.
pub fn drag_over(
    state: &mut WidgetState,
    target: usize,
    offset: f32,
    extent: f32,
) -> Option<DropSide> {
    let key = state.items.get(target)?.key();
    let drag = state.drag.as_mut()?;
    let side = DropSide::from_offset(offset, extent);
    drag.target = Some((key, side));
    Some(side)
}

/// Drop the dragged item next to the last hovered target.
///
/// The drag session ends whatever the outcome. Dropping onto the dragged
/// item itself, or without ever hovering a target, changes nothing.
pub fn commit_drop(state: &mut WidgetState) -> bool {
    let Some(drag) = state.drag.take() else {
        return false;
    };
    let Some((target_key, side)) = drag.target else {
        return false;
    };
    if target_key == drag.source {
        return false;
    }
    let Some(from) = state.items.iter().position(|i| i.key() == drag.source) else {
        return false;
    };
    let Some(target) = state.items.iter().position(|i| i.key() == target_key) else {
        return false;
    };

    let mut to = match side {
        DropSide::Before => target,
        DropSide::After => target + 1,
    };
    // Removing the source shifts everything after it one slot left.
    if from < to {
        to -= 1;
    }
    if from == to {
        return false;
    }

    let moved = state.items.remove(from);
    state.items.insert(to, moved);
    finish_move(state);
    log::debug!("{}: dropped item {} at {}", state.id(), from, to);
    true
}

/// Abandon the drag in progress. Nothing has moved yet, so nothing is undone.
pub fn cancel_drag(state: &mut WidgetState) -> bool {
    let cancelled = state.drag.take().is_some();
    if cancelled {
        log::trace!("{}: drag cancelled", state.id());
    }
    cancelled
}

fn finish_move(state: &mut WidgetState) {
    renumber(&mut state.items);
    focus::resync(state);
    state.mark_dirty();
}

/// Key of the item at `index`, for callers tracking identity across moves.
pub fn key_at(state: &WidgetState, index: usize) -> Option<ItemKey> {
    state.items.get(index).map(Item::key)
}

/// Current index of the item with `key`.
pub fn index_of(state: &WidgetState, key: ItemKey) -> Option<usize> {
    item::find_key(&state.items, key).and_then(|p| p.first().copied())
}
