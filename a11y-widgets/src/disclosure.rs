//! Disclosure controller: expand/collapse state of nested items.
//!
//! Collapsing a node always collapses its whole subtree, and pulls focus
//! back to the node when it was inside, so a hidden branch never holds the
//! focus stop.

use crate::focus;
use crate::item::{self, Item};
use crate::state::WidgetState;

/// How many sibling branches may be open at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisclosurePolicy {
    /// Opening a branch closes its open siblings (menu).
    SingleOpen,
    /// Branches open and close independently (tree).
    MultiOpen,
}

/// Expand the item at `path`. Leaves and already expanded items are a no-op.
pub fn expand(state: &mut WidgetState, path: &[usize]) -> bool {
    let Some(target) = item::get(&state.items, path) else {
        return false;
    };
    if target.expanded || !target.has_children() {
        return false;
    }

    if state.kind().disclosure() == Some(DisclosurePolicy::SingleOpen) {
        let Some((&index, parent)) = path.split_last() else {
            return false;
        };
        let open: Vec<usize> = item::siblings(&state.items, path)
            .map(|siblings| {
                siblings
                    .iter()
                    .enumerate()
                    .filter(|(i, s)| *i != index && s.expanded)
                    .map(|(i, _)| i)
                    .collect()
            })
            .unwrap_or_default();
        for sibling in open {
            let mut sibling_path = parent.to_vec();
            sibling_path.push(sibling);
            collapse(state, &sibling_path);
        }
    }

    if let Some(target) = item::get_mut(&mut state.items, path) {
        target.expanded = true;
    }
    log::trace!("{}: expanded {:?}", state.id(), path);
    state.mark_dirty();
    true
}

/// Collapse the item at `path` and every branch below it.
pub fn collapse(state: &mut WidgetState, path: &[usize]) -> bool {
    let Some(target) = item::get_mut(&mut state.items, path) else {
        return false;
    };
    if !target.expanded {
        return false;
    }
    collapse_subtree(target);

    let focus_inside = state
        .focus
        .as_ref()
        .is_some_and(|f| f.len() > path.len() && f.starts_with(path));
    if focus_inside {
        focus::set_focus(state, path.to_vec());
    }

    log::trace!("{}: collapsed {:?}", state.id(), path);
    state.mark_dirty();
    true
}

/// Flip the item at `path` between expanded and collapsed.
pub fn toggle(state: &mut WidgetState, path: &[usize]) -> bool {
    match item::get(&state.items, path) {
        Some(target) if target.expanded => collapse(state, path),
        Some(_) => expand(state, path),
        None => false,
    }
}

/// Collapse every branch. Focus returns to the top-level ancestor of the
/// focused item.
pub fn collapse_all(state: &mut WidgetState) -> bool {
    let mut changed = false;
    for item in &mut state.items {
        if item.expanded || has_expanded_descendant(item) {
            collapse_subtree(item);
            changed = true;
        }
    }

    if let Some(top) = state.focus.as_ref().and_then(|f| f.first().copied()) {
        changed |= focus::set_focus(state, vec![top]);
    }

    if changed {
        log::trace!("{}: collapsed all", state.id());
        state.mark_dirty();
    }
    changed
}

/// Expand every branch that has children.
pub fn expand_all(state: &mut WidgetState) -> bool {
    let mut changed = false;
    item::walk_mut(&mut state.items, &mut |item| {
        if item.has_children() && !item.expanded {
            item.expanded = true;
            changed = true;
        }
    });
    if changed {
        state.mark_dirty();
    }
    changed
}

fn collapse_subtree(item: &mut Item) {
    item.expanded = false;
    item::walk_mut(&mut item.children, &mut |child| child.expanded = false);
}

fn has_expanded_descendant(item: &Item) -> bool {
    let mut found = false;
    item::walk(&item.children, &mut |child| found |= child.expanded);
    found
}
