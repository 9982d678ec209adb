//! Progress bar: announces status on request and completion once.

use crate::config::{ProgressConfig, WidgetConfig};
use crate::error::WidgetError;
use crate::input::LogicalAction;
use crate::live;
use crate::registry::WidgetId;
use crate::state::WidgetState;
use crate::value::{ProgressValue, Value, ValueRange};
use crate::widgets::Response;

pub(crate) fn build(id: WidgetId, config: ProgressConfig) -> Result<WidgetState, WidgetError> {
    config.validate()?;
    let progress = ProgressValue::new(ValueRange::new(config.min, config.max));

    let mut state = WidgetState::new(id, WidgetConfig::ProgressBar(config), Vec::new());
    state.value = Some(Value::Progress(progress));
    Ok(state)
}

/// Announce the current percentage.
pub fn notify(state: &mut WidgetState) -> bool {
    let Some(percent) = state.progress().map(ProgressValue::percent) else {
        return false;
    };
    live::announce(state, live::progress_status(percent));
    true
}

/// Return to the start, leaving the complete state, and announce it.
pub fn reset(state: &mut WidgetState) -> bool {
    let Some(Value::Progress(progress)) = state.value.as_mut() else {
        return false;
    };
    if progress.reset() {
        state.mark_dirty();
    }
    log::debug!("{}: reset", state.id());
    notify(state)
}

pub(crate) fn on_action(state: &mut WidgetState, action: LogicalAction) -> Response {
    if action == LogicalAction::Activate {
        notify(state);
    }
    Response::default()
}
