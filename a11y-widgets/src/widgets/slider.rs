//! Slider: stepped keyboard changes and pointer dragging, announced on commit.

use crate::config::{SliderConfig, WidgetConfig};
use crate::error::WidgetError;
use crate::input::{Input, LogicalAction};
use crate::live;
use crate::registry::WidgetId;
use crate::state::WidgetState;
use crate::value::{SliderValue, Value, ValueRange};
use crate::widgets::Response;

pub(crate) fn build(id: WidgetId, config: SliderConfig) -> Result<WidgetState, WidgetError> {
    config.validate()?;
    let range = ValueRange::new(config.min, config.max);
    let slider = SliderValue::new(range, config.step, config.value.unwrap_or(config.min));

    let mut state = WidgetState::new(id, WidgetConfig::Slider(config), Vec::new());
    state.value = Some(Value::Slider(slider));
    Ok(state)
}

fn slider_mut(state: &mut WidgetState) -> Option<&mut SliderValue> {
    match state.value.as_mut() {
        Some(Value::Slider(slider)) => Some(slider),
        _ => None,
    }
}

/// Set the value from user input and announce it if it changed.
pub fn commit(state: &mut WidgetState, n: i64) -> bool {
    let Some(slider) = slider_mut(state) else {
        return false;
    };
    if !slider.set(n) {
        return false;
    }
    let value = slider.value();
    log::debug!("{}: value committed {}", state.id(), value);
    live::announce(state, live::slider_committed(value));
    state.mark_dirty();
    true
}

/// Start a pointer drag on the knob.
pub fn begin_drag(state: &mut WidgetState) -> bool {
    let Some(slider) = slider_mut(state) else {
        return false;
    };
    if slider.is_dragging() {
        return false;
    }
    slider.set_dragging(true);
    state.mark_dirty();
    true
}

/// Move the knob to `fraction` of the track. Ignored unless dragging.
pub fn drag_to(state: &mut WidgetState, fraction: f64) -> bool {
    let Some(slider) = slider_mut(state) else {
        return false;
    };
    if !slider.is_dragging() {
        return false;
    }
    let target = slider.value_at(fraction);
    if slider.set(target) {
        state.mark_dirty();
        true
    } else {
        false
    }
}

/// Finish a pointer drag, committing and announcing the value it ended on.
pub fn end_drag(state: &mut WidgetState) -> bool {
    let Some(slider) = slider_mut(state) else {
        return false;
    };
    if !slider.is_dragging() {
        return false;
    }
    slider.set_dragging(false);
    let value = slider.value();
    log::debug!("{}: drag committed {}", state.id(), value);
    live::announce(state, live::slider_committed(value));
    state.mark_dirty();
    true
}

pub(crate) fn on_action(state: &mut WidgetState, action: LogicalAction) -> Response {
    let Some(slider) = state.slider().copied() else {
        return Response::default();
    };
    let range = slider.range();
    let target = match action {
        LogicalAction::Next(_) => slider.step_up(),
        LogicalAction::Previous(_) => slider.step_down(),
        LogicalAction::First => range.min,
        LogicalAction::Last => range.max,
        _ => return Response::default(),
    };
    commit(state, target);
    Response::default()
}

pub(crate) fn on_input(state: &mut WidgetState, input: Input) -> Response {
    match input {
        Input::DragStart => {
            begin_drag(state);
        }
        Input::SliderDrag { fraction } => {
            drag_to(state, fraction);
        }
        Input::Drop | Input::DragCancel | Input::PointerLeave => {
            end_drag(state);
        }
        _ => {}
    }
    Response::default()
}
