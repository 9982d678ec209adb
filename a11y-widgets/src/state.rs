//! Per-instance widget state.

use crate::config::WidgetConfig;
use crate::item::{self, Item, ItemPath};
use crate::live::Announcement;
use crate::registry::WidgetId;
use crate::reorder::DragSession;
use crate::timer::AutoAdvance;
use crate::value::{ProgressValue, SliderValue, Value};
use crate::widgets::WidgetKind;
use crate::widgets::carousel::SlideTransition;

/// Everything one widget instance knows about itself.
///
/// Created once from a declarative source, mutated in place by the
/// controllers and dropped when the widget is detached. Controllers receive
/// it explicitly as `&mut WidgetState`; the adapter only ever sees `&`.
#[derive(Debug)]
pub struct WidgetState {
    id: WidgetId,
    config: WidgetConfig,
    /// Items (flat or nested).
    pub(crate) items: Vec<Item>,
    /// Roving focus pointer.
    pub(crate) focus: Option<ItemPath>,
    /// Slider / progress value.
    pub(crate) value: Option<Value>,
    /// Carousel auto-advance.
    pub(crate) timer: Option<AutoAdvance>,
    /// Pointer reorder in progress.
    pub(crate) drag: Option<DragSession>,
    /// Last carousel slide change.
    pub(crate) transition: Option<SlideTransition>,
    /// Whether the widget currently acts as a polite live region.
    pub(crate) live_region: bool,
    /// Announcements not yet handed to the adapter.
    pub(crate) pending: Vec<Announcement>,
    /// Dirty flag for re-render.
    pub(crate) dirty: bool,
}

impl WidgetState {
    pub(crate) fn new(id: WidgetId, config: WidgetConfig, items: Vec<Item>) -> Self {
        Self {
            id,
            config,
            items,
            focus: None,
            value: None,
            timer: None,
            drag: None,
            transition: None,
            live_region: false,
            pending: Vec::new(),
            dirty: true,
        }
    }

    pub fn id(&self) -> WidgetId {
        self.id
    }

    pub fn kind(&self) -> WidgetKind {
        self.config.kind()
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    // -------------------------------------------------------------------------
    // Items
    // -------------------------------------------------------------------------

    /// Top-level items.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the item at a path.
    pub fn item(&self, path: &[usize]) -> Option<&Item> {
        item::get(&self.items, path)
    }

    /// Paths of all visible items in display order.
    pub fn visible_paths(&self) -> Vec<ItemPath> {
        item::visible_paths(&self.items)
    }

    // -------------------------------------------------------------------------
    // Focus and selection
    // -------------------------------------------------------------------------

    /// Path of the item holding the roving focus.
    pub fn focus(&self) -> Option<&[usize]> {
        self.focus.as_deref()
    }

    /// Index of the focused item among its siblings.
    pub fn current_index(&self) -> Option<usize> {
        self.focus.as_ref().and_then(|p| p.last().copied())
    }

    pub fn focused_item(&self) -> Option<&Item> {
        self.focus.as_ref().and_then(|p| item::get(&self.items, p))
    }

    /// Path of the first selected item in display order.
    pub fn selected(&self) -> Option<ItemPath> {
        fn find(items: &[Item], prefix: &mut ItemPath) -> Option<ItemPath> {
            for (i, item) in items.iter().enumerate() {
                prefix.push(i);
                if item.selected {
                    return Some(prefix.clone());
                }
                if let Some(found) = find(&item.children, prefix) {
                    return Some(found);
                }
                prefix.pop();
            }
            None
        }
        find(&self.items, &mut Vec::new())
    }

    /// Index of the selected top-level item (tabs, carousel).
    pub fn selected_index(&self) -> Option<usize> {
        self.items.iter().position(|i| i.selected)
    }

    // -------------------------------------------------------------------------
    // Widget specific parts
    // -------------------------------------------------------------------------

    pub fn slider(&self) -> Option<&SliderValue> {
        match &self.value {
            Some(Value::Slider(v)) => Some(v),
            _ => None,
        }
    }

    pub fn progress(&self) -> Option<&ProgressValue> {
        match &self.value {
            Some(Value::Progress(v)) => Some(v),
            _ => None,
        }
    }

    pub fn timer(&self) -> Option<&AutoAdvance> {
        self.timer.as_ref()
    }

    pub fn drag(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    /// The most recent carousel slide change.
    pub fn transition(&self) -> Option<SlideTransition> {
        self.transition
    }

    /// Whether the widget should currently be exposed as a polite live region.
    pub fn is_live_region(&self) -> bool {
        self.live_region
    }

    // -------------------------------------------------------------------------
    // Change tracking
    // -------------------------------------------------------------------------

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Check if the state changed since the last check.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Drain queued announcements.
    pub fn take_announcements(&mut self) -> Vec<Announcement> {
        std::mem::take(&mut self.pending)
    }
}
