//! Carousel: one active slide, wrap-around navigation, auto-advance.

use std::time::Instant;

use crate::config::{CarouselConfig, WidgetConfig};
use crate::error::WidgetError;
use crate::focus::{self, Boundary, Direction};
use crate::input::{Input, LogicalAction};
use crate::item::Source;
use crate::registry::WidgetId;
use crate::reorder;
use crate::state::WidgetState;
use crate::timer::AutoAdvance;
use crate::widgets::{Response, WidgetKind};

/// Where to go from the active slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlideTarget {
    Left,
    Right,
    Index(usize),
}

/// Direction the outgoing slide leaves in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlideDirection {
    Left,
    Right,
}

/// A completed slide change, for the adapter to animate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideTransition {
    pub from: usize,
    pub to: usize,
    pub direction: SlideDirection,
}

pub(crate) fn build(
    id: WidgetId,
    config: CarouselConfig,
    source: &Source,
    now: Instant,
) -> Result<WidgetState, WidgetError> {
    if source.items.is_empty() {
        return Err(WidgetError::EmptySource(WidgetKind::Carousel));
    }

    let mut items = source.build_items();
    reorder::renumber(&mut items);
    let timer = config.interval().map(|interval| {
        let mut timer = AutoAdvance::new(interval);
        timer.start(now);
        timer
    });

    let mut state = WidgetState::new(id, WidgetConfig::Carousel(config), items);
    for item in &mut state.items {
        item.selected = false;
    }
    state.items[0].selected = true;
    focus::set_focus(&mut state, vec![0]);
    state.timer = timer;
    Ok(state)
}

/// Show another slide.
///
/// `Left`/`Right` step one slide and wrap at either end. For an explicit
/// index the direction is `Left` when moving forward, or when wrapping from
/// the first slide to the last, and `Right` otherwise. Going to the active
/// slide, or to an index past the end, does nothing.
pub fn goto_slide(state: &mut WidgetState, target: SlideTarget) -> Option<SlideTransition> {
    let len = state.items.len();
    let from = state.selected_index()?;

    let (to, direction) = match target {
        SlideTarget::Left => (
            focus::step(from, len, Direction::Previous, Boundary::Wrap)?,
            SlideDirection::Left,
        ),
        SlideTarget::Right => (
            focus::step(from, len, Direction::Next, Boundary::Wrap)?,
            SlideDirection::Right,
        ),
        SlideTarget::Index(n) => {
            if n >= len {
                return None;
            }
            let direction = if from < n || (from == 0 && n == len - 1) {
                SlideDirection::Left
            } else {
                SlideDirection::Right
            };
            (n, direction)
        }
    };
    if to == from {
        return None;
    }

    for (i, item) in state.items.iter_mut().enumerate() {
        item.selected = i == to;
    }
    focus::set_focus(state, vec![to]);

    let transition = SlideTransition {
        from,
        to,
        direction,
    };
    log::debug!("{}: slide {} -> {} ({:?})", state.id(), from, to, direction);
    state.transition = Some(transition);
    state.mark_dirty();
    Some(transition)
}

/// Advance one slide if the auto-advance timer is due.
pub fn tick(state: &mut WidgetState, now: Instant) -> bool {
    let due = state.timer.as_mut().is_some_and(|t| t.poll(now));
    if !due {
        return false;
    }
    log::trace!("{}: auto-advance", state.id());
    goto_slide(state, SlideTarget::Right).is_some()
}

pub(crate) fn on_action(state: &mut WidgetState, action: LogicalAction) -> Response {
    match action {
        LogicalAction::Previous(_) => {
            goto_slide(state, SlideTarget::Left);
        }
        LogicalAction::Next(_) => {
            goto_slide(state, SlideTarget::Right);
        }
        LogicalAction::Cancel => {
            return Response {
                release_focus: true,
                ..Default::default()
            };
        }
        _ => {}
    }
    Response::default()
}

pub(crate) fn on_input(
    state: &mut WidgetState,
    input: Input,
    origin: Option<&[usize]>,
    now: Instant,
) -> Response {
    match input {
        Input::Click => {
            if let Some(&[index]) = origin {
                goto_slide(state, SlideTarget::Index(index));
            }
        }
        Input::PointerEnter => {
            if let Some(timer) = state.timer.as_mut() {
                timer.pointer_enter();
            }
        }
        Input::PointerLeave => {
            if let Some(timer) = state.timer.as_mut() {
                timer.pointer_leave(now);
            }
        }
        Input::FocusIn => {
            if let Some(timer) = state.timer.as_mut() {
                timer.focus_in();
            }
            if !state.live_region {
                state.live_region = true;
                state.mark_dirty();
            }
        }
        Input::FocusOut => {
            if let Some(timer) = state.timer.as_mut() {
                timer.focus_out(now);
            }
            if state.live_region {
                state.live_region = false;
                state.mark_dirty();
            }
        }
        _ => {}
    }
    Response::default()
}
