//! Tabs: selection follows focus, exactly one panel visible.

use crate::config::{TabsConfig, WidgetConfig};
use crate::error::WidgetError;
use crate::focus::{self, Direction};
use crate::input::{Input, LogicalAction};
use crate::item::Source;
use crate::registry::WidgetId;
use crate::reorder;
use crate::state::WidgetState;
use crate::widgets::{Response, WidgetKind};

pub(crate) fn build(
    id: WidgetId,
    config: TabsConfig,
    source: &Source,
) -> Result<WidgetState, WidgetError> {
    if source.items.is_empty() {
        return Err(WidgetError::EmptySource(WidgetKind::Tabs));
    }

    let mut items = source.build_items();
    reorder::renumber(&mut items);
    // Panels without a title get a numbered tab.
    for (i, item) in items.iter_mut().enumerate() {
        if item.label().trim().is_empty() {
            item.set_label(format!("Tab {}", i + 1));
        }
        item.selected = false;
    }

    let initial = config.selected_index.min(items.len() - 1);
    let mut state = WidgetState::new(id, WidgetConfig::Tabs(config), items);
    select_tab(&mut state, initial);
    Ok(state)
}

/// Select tab `index`: its panel is shown, every other panel hidden, and the
/// tab becomes the focus stop. Indexes past the end are ignored.
pub fn select_tab(state: &mut WidgetState, index: usize) -> bool {
    if index >= state.items.len() {
        return false;
    }
    if state.selected_index() == Some(index) && state.current_index() == Some(index) {
        return false;
    }

    for (i, item) in state.items.iter_mut().enumerate() {
        item.selected = i == index;
    }
    focus::set_focus(state, vec![index]);
    log::debug!("{}: selected tab {}", state.id(), index);
    state.mark_dirty();
    true
}

/// Whether the panel belonging to tab `index` is hidden.
pub fn is_panel_hidden(state: &WidgetState, index: usize) -> bool {
    state.items.get(index).is_none_or(|tab| !tab.is_selected())
}

pub(crate) fn on_action(state: &mut WidgetState, action: LogicalAction) -> Response {
    let direction = match action {
        LogicalAction::Next(_) => Direction::Next,
        LogicalAction::Previous(_) => Direction::Previous,
        LogicalAction::First => Direction::First,
        LogicalAction::Last => Direction::Last,
        _ => return Response::default(),
    };
    if focus::move_focus(state, direction)
        && let Some(index) = state.current_index()
    {
        select_tab(state, index);
    }
    Response::default()
}

pub(crate) fn on_input(state: &mut WidgetState, input: Input, origin: Option<&[usize]>) -> Response {
    if let (Input::Click, Some(&[index])) = (input, origin) {
        select_tab(state, index);
    }
    Response::default()
}
