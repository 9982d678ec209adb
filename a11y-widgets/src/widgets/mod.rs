//! Widget kinds and the per-widget handlers built on the controllers.

pub mod carousel;
pub mod menu;
pub mod progress;
pub mod slider;
pub mod sortable;
pub mod tabs;
pub mod tree;

use std::time::Instant;

use crate::config::WidgetConfig;
use crate::disclosure::DisclosurePolicy;
use crate::error::WidgetError;
use crate::focus::{Boundary, NavScope};
use crate::input::{Input, LogicalAction, Modifiers, resolve_action};
use crate::item::{ElementKind, ItemPath, Source};
use crate::registry::WidgetId;
use crate::state::WidgetState;

/// The widgets this crate drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum WidgetKind {
    Carousel,
    Menu,
    ProgressBar,
    Slider,
    Sortable,
    Tabs,
    TreeMenu,
}

impl WidgetKind {
    /// Prefix for instance ids (`carousel0`, `pb1`, ...).
    pub fn id_prefix(&self) -> &'static str {
        match self {
            WidgetKind::Carousel => "carousel",
            WidgetKind::Menu => "menu",
            WidgetKind::ProgressBar => "pb",
            WidgetKind::Slider => "slider",
            WidgetKind::Sortable => "sortable_",
            WidgetKind::Tabs => "tabs",
            WidgetKind::TreeMenu => "tree",
        }
    }

    /// Whether focus moves wrap around at the ends.
    pub fn boundary(&self) -> Boundary {
        match self {
            WidgetKind::Carousel | WidgetKind::Tabs => Boundary::Wrap,
            _ => Boundary::Clamp,
        }
    }

    pub fn nav_scope(&self) -> NavScope {
        match self {
            WidgetKind::TreeMenu => NavScope::Visible,
            _ => NavScope::Siblings,
        }
    }

    /// Disclosure policy for widgets with nested items.
    pub fn disclosure(&self) -> Option<DisclosurePolicy> {
        match self {
            WidgetKind::Menu => Some(DisclosurePolicy::SingleOpen),
            WidgetKind::TreeMenu => Some(DisclosurePolicy::MultiOpen),
            _ => None,
        }
    }

    /// Element kinds the widget can be attached to.
    pub fn accepts(&self) -> &'static [ElementKind] {
        match self {
            WidgetKind::Slider => &[ElementKind::TextInput],
            WidgetKind::Menu | WidgetKind::Sortable | WidgetKind::TreeMenu => &[ElementKind::List],
            WidgetKind::Carousel | WidgetKind::Tabs => &[ElementKind::Container],
            WidgetKind::ProgressBar => &[ElementKind::Generic, ElementKind::Container],
        }
    }

    pub(crate) fn check_element(&self, found: ElementKind) -> Result<(), WidgetError> {
        let accepted = self.accepts();
        if accepted.contains(&found) {
            Ok(())
        } else {
            Err(WidgetError::IncompatibleElement {
                kind: *self,
                expected: accepted[0],
                found,
            })
        }
    }
}

impl std::fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            WidgetKind::Carousel => "carousel",
            WidgetKind::Menu => "menu",
            WidgetKind::ProgressBar => "progress bar",
            WidgetKind::Slider => "slider",
            WidgetKind::Sortable => "sortable list",
            WidgetKind::Tabs => "tabs",
            WidgetKind::TreeMenu => "tree menu",
        };
        f.write_str(name)
    }
}

/// Side effects of handling one input that go beyond re-rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Response {
    /// An item was activated (menu).
    pub activated: Option<ItemPath>,
    /// The widget asks the adapter to move keyboard focus off it (carousel Escape).
    pub release_focus: bool,
}

/// Build the state for a new widget instance.
///
/// Validation happens before anything is allocated, so an error leaves
/// nothing behind.
pub fn build(
    id: WidgetId,
    config: WidgetConfig,
    source: &Source,
    now: Instant,
) -> Result<WidgetState, WidgetError> {
    let kind = config.kind();
    kind.check_element(source.element)?;
    log::debug!("building {} from {} items", id, source.items.len());

    match config {
        WidgetConfig::Carousel(c) => carousel::build(id, c, source, now),
        WidgetConfig::Menu(c) => menu::build(id, c, source),
        WidgetConfig::ProgressBar(c) => progress::build(id, c),
        WidgetConfig::Slider(c) => slider::build(id, c),
        WidgetConfig::Sortable(c) => sortable::build(id, c, source),
        WidgetConfig::Tabs(c) => tabs::build(id, c, source),
        WidgetConfig::TreeMenu(c) => tree::build(id, c, source),
    }
}

/// Route one input to the widget's handler.
///
/// Keys go through the key map first; unmapped keys are ignored.
pub fn dispatch(
    state: &mut WidgetState,
    input: Input,
    modifiers: Modifiers,
    origin: Option<&[usize]>,
    now: Instant,
) -> Response {
    let kind = state.kind();
    if let Input::Key(key) = input {
        let Some(action) = resolve_action(key, modifiers, kind) else {
            log::trace!("{}: unmapped key {:?}", state.id(), key);
            return Response::default();
        };
        log::debug!("{}: {:?} -> {:?}", state.id(), key, action);
        return on_action(state, action, origin);
    }

    match kind {
        WidgetKind::Carousel => carousel::on_input(state, input, origin, now),
        WidgetKind::Menu => menu::on_input(state, input, origin),
        WidgetKind::ProgressBar => Response::default(),
        WidgetKind::Slider => slider::on_input(state, input),
        WidgetKind::Sortable => sortable::on_input(state, input, origin),
        WidgetKind::Tabs => tabs::on_input(state, input, origin),
        WidgetKind::TreeMenu => tree::on_input(state, input, origin),
    }
}

/// Apply a logical action to the widget.
pub fn on_action(
    state: &mut WidgetState,
    action: LogicalAction,
    origin: Option<&[usize]>,
) -> Response {
    match state.kind() {
        WidgetKind::Carousel => carousel::on_action(state, action),
        WidgetKind::Menu => menu::on_action(state, action),
        WidgetKind::ProgressBar => progress::on_action(state, action),
        WidgetKind::Slider => slider::on_action(state, action),
        WidgetKind::Sortable => sortable::on_action(state, action, origin),
        WidgetKind::Tabs => tabs::on_action(state, action),
        WidgetKind::TreeMenu => tree::on_action(state, action),
    }
}

/// First selected item in display order, clearing any later selection marks.
pub(crate) fn take_initial_selection(state: &mut WidgetState) -> Option<ItemPath> {
    let selected = state.selected()?;
    let keep = state.item(&selected).map(|i| i.key());
    crate::item::walk_mut(&mut state.items, &mut |item| {
        if Some(item.key()) != keep {
            item.selected = false;
        }
    });
    Some(selected)
}
