//! Host: owns every widget instance and talks to the presentation adapter.
//!
//! The adapter forwards input through [`Host::dispatch`] and receives a
//! render call after each state change plus any announcements the change
//! produced. Each widget's state is owned here exclusively; adapters only
//! get shared borrows during callbacks.

use std::collections::HashMap;
use std::time::Instant;

use crate::config::WidgetConfig;
use crate::error::WidgetError;
use crate::input::{Input, Modifiers};
use crate::item::{self, Item, Source};
use crate::live::Politeness;
use crate::registry::{WidgetId, WidgetRegistry};
use crate::state::WidgetState;
use crate::value;
use crate::widgets::{self, Response, WidgetKind, carousel, progress};

/// The external presentation layer.
pub trait Adapter {
    /// Reflect the widget's state in the presentation (visuals and semantics).
    fn render(&mut self, id: WidgetId, state: &WidgetState);

    /// Put `text` into the widget's announcement region.
    fn announce(&mut self, id: WidgetId, text: &str, politeness: Politeness);

    /// A menu item was activated.
    fn activated(&mut self, _id: WidgetId, _item: &Item) {}

    /// The widget gave up keyboard focus; move it elsewhere.
    fn release_focus(&mut self, _id: WidgetId) {}
}

/// Owns widget states, the id registry and the adapter.
pub struct Host<A: Adapter> {
    adapter: A,
    registry: WidgetRegistry,
    widgets: HashMap<WidgetId, WidgetState>,
}

impl<A: Adapter> Host<A> {
    pub fn new(adapter: A) -> Self {
        Self {
            adapter,
            registry: WidgetRegistry::new(),
            widgets: HashMap::new(),
        }
    }

    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    pub fn adapter_mut(&mut self) -> &mut A {
        &mut self.adapter
    }

    pub fn registry(&self) -> &WidgetRegistry {
        &self.registry
    }

    /// Build a widget from its declarative source and render it once.
    pub fn build(
        &mut self,
        config: impl Into<WidgetConfig>,
        source: &Source,
    ) -> Result<WidgetId, WidgetError> {
        self.build_at(config, source, Instant::now())
    }

    /// Like [`Host::build`], with an explicit clock for timers.
    pub fn build_at(
        &mut self,
        config: impl Into<WidgetConfig>,
        source: &Source,
        now: Instant,
    ) -> Result<WidgetId, WidgetError> {
        let config = config.into();
        let id = self.registry.register(config.kind());
        let state = match widgets::build(id, config, source, now) {
            Ok(state) => state,
            Err(e) => {
                log::warn!("failed to build {}: {}", id, e);
                self.registry.release(id);
                return Err(e);
            }
        };
        self.widgets.insert(id, state);
        self.flush(id, Response::default());
        Ok(id)
    }

    /// Tear a widget down and release its id.
    pub fn detach(&mut self, id: WidgetId) -> Result<(), WidgetError> {
        self.widgets
            .remove(&id)
            .ok_or(WidgetError::UnknownWidget(id))?;
        self.registry.release(id);
        Ok(())
    }

    pub fn state(&self, id: WidgetId) -> Option<&WidgetState> {
        self.widgets.get(&id)
    }

    /// Ids of all live widgets, sorted.
    pub fn ids(&self) -> Vec<WidgetId> {
        let mut ids: Vec<_> = self.widgets.keys().copied().collect();
        ids.sort();
        ids
    }

    /// Forward one input event to a widget.
    pub fn dispatch(
        &mut self,
        id: WidgetId,
        input: Input,
        modifiers: Modifiers,
        origin: Option<&[usize]>,
    ) -> Result<(), WidgetError> {
        self.dispatch_at(id, input, modifiers, origin, Instant::now())
    }

    /// Like [`Host::dispatch`], with an explicit clock for timers.
    pub fn dispatch_at(
        &mut self,
        id: WidgetId,
        input: Input,
        modifiers: Modifiers,
        origin: Option<&[usize]>,
        now: Instant,
    ) -> Result<(), WidgetError> {
        let state = self
            .widgets
            .get_mut(&id)
            .ok_or(WidgetError::UnknownWidget(id))?;
        let response = widgets::dispatch(state, input, modifiers, origin, now);
        self.flush(id, response);
        Ok(())
    }

    /// Run an operation on a widget's state, then render and announce.
    ///
    /// This is how callers reach the controllers directly, e.g.
    /// `host.apply(id, |s| reorder::move_item_by(s, 2, 1))`.
    pub fn apply<R>(
        &mut self,
        id: WidgetId,
        op: impl FnOnce(&mut WidgetState) -> R,
    ) -> Result<R, WidgetError> {
        let state = self
            .widgets
            .get_mut(&id)
            .ok_or(WidgetError::UnknownWidget(id))?;
        let result = op(state);
        self.flush(id, Response::default());
        Ok(result)
    }

    /// Set a slider or progress value programmatically.
    pub fn set_value(&mut self, id: WidgetId, n: i64) -> Result<bool, WidgetError> {
        self.apply(id, |state| value::set_value(state, n))
    }

    /// Reset a progress bar.
    pub fn reset(&mut self, id: WidgetId) -> Result<bool, WidgetError> {
        self.apply(id, progress::reset)
    }

    /// Fire due carousel timers. Returns how many widgets advanced.
    pub fn tick(&mut self, now: Instant) -> usize {
        let mut advanced = 0;
        for id in self.ids() {
            if id.kind() != WidgetKind::Carousel {
                continue;
            }
            let fired = self
                .widgets
                .get_mut(&id)
                .is_some_and(|state| carousel::tick(state, now));
            if fired {
                advanced += 1;
                self.flush(id, Response::default());
            }
        }
        advanced
    }

    /// Earliest pending timer deadline, for adapters that sleep between ticks.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.widgets
            .values()
            .filter_map(|state| state.timer().and_then(|t| t.deadline()))
            .min()
    }

    fn flush(&mut self, id: WidgetId, response: Response) {
        let Some(state) = self.widgets.get_mut(&id) else {
            return;
        };
        let announcements = state.take_announcements();
        if state.take_dirty() {
            self.adapter.render(id, state);
        }
        for announcement in announcements {
            self.adapter
                .announce(id, &announcement.text, announcement.politeness);
        }
        if let Some(path) = response.activated
            && let Some(item) = item::get(state.items(), &path)
        {
            self.adapter.activated(id, item);
        }
        if response.release_focus {
            self.adapter.release_focus(id);
        }
    }
}
