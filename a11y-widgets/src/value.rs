//! Value controller for sliders and progress bars.

use crate::live;
use crate::state::WidgetState;

/// Inclusive numeric range with `min < max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueRange {
    pub min: i64,
    pub max: i64,
}

impl ValueRange {
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    pub fn clamp(&self, n: i64) -> i64 {
        n.clamp(self.min, self.max)
    }

    /// Percentage of the range covered by `value`, truncated toward zero.
    pub fn percent(&self, value: i64) -> i64 {
        let span = i128::from(self.max) - i128::from(self.min);
        if span <= 0 {
            return 0;
        }
        let offset = i128::from(value) - i128::from(self.min);
        (offset * 100 / span) as i64
    }
}

/// Slider value, always a bound or on the step grid from `min`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderValue {
    range: ValueRange,
    step: i64,
    value: i64,
    dragging: bool,
}

impl SliderValue {
    /// `step` must be positive; the widget validates this at construction.
    pub fn new(range: ValueRange, step: i64, initial: i64) -> Self {
        let mut slider = Self {
            range,
            step: step.max(1),
            value: range.min,
            dragging: false,
        };
        slider.value = slider.snap(initial);
        slider
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn range(&self) -> ValueRange {
        self.range
    }

    pub fn step(&self) -> i64 {
        self.step
    }

    pub fn percent(&self) -> i64 {
        self.range.percent(self.value)
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Map `n` onto the values the slider can hold.
    ///
    /// Out-of-range input lands on the nearest bound. In-range input snaps to
    /// the step grid from `min`, rounding up once the remainder reaches
    /// `step / 1.5` (not `step / 2`). An upward snap past `max` gives `max`.
    pub fn snap(&self, n: i64) -> i64 {
        let ValueRange { min, max } = self.range;
        if n <= min {
            return min;
        }
        if n >= max {
            return max;
        }
        let step = i128::from(self.step);
        let offset = i128::from(n) - i128::from(min);
        let rem = offset % step;
        // rem < step / 1.5, kept in integers
        let snapped = if 3 * rem < 2 * step {
            offset - rem
        } else {
            offset - rem + step
        };
        self.at_offset(snapped)
    }

    /// One step above the current value.
    pub fn step_up(&self) -> i64 {
        self.at_offset(self.offset() + i128::from(self.step))
    }

    /// One step below the current value. From an off-grid value (only ever
    /// `max`) this is the grid point below it.
    pub fn step_down(&self) -> i64 {
        let step = i128::from(self.step);
        let offset = self.offset();
        let rem = offset % step;
        if rem == 0 {
            self.at_offset(offset - step)
        } else {
            self.at_offset(offset - rem)
        }
    }

    fn offset(&self) -> i128 {
        i128::from(self.value) - i128::from(self.range.min)
    }

    /// `min + offset`, clamped into the range.
    fn at_offset(&self, offset: i128) -> i64 {
        let ValueRange { min, max } = self.range;
        let value = (i128::from(min) + offset).clamp(i128::from(min), i128::from(max));
        i64::try_from(value).unwrap_or(max)
    }

    /// Set the value. Returns true if it changed.
    pub fn set(&mut self, n: i64) -> bool {
        let next = self.snap(n);
        let changed = next != self.value;
        self.value = next;
        changed
    }

    /// Value for a knob dragged to `fraction` of the track.
    pub fn value_at(&self, fraction: f64) -> i64 {
        let ValueRange { min, max } = self.range;
        if fraction.is_nan() || fraction <= 0.0 {
            return min;
        }
        if fraction >= 1.0 {
            return max;
        }
        let span = i128::from(max) - i128::from(min);
        self.at_offset((span as f64 * fraction).floor() as i128)
    }

    pub(crate) fn set_dragging(&mut self, dragging: bool) {
        self.dragging = dragging;
    }
}

/// Progress value: non-decreasing until reset, completes once at `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressValue {
    range: ValueRange,
    value: i64,
    complete: bool,
}

/// What a progress update did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProgressUpdate {
    pub changed: bool,
    /// The update moved the bar into the complete state.
    pub completed: bool,
}

impl ProgressValue {
    pub fn new(range: ValueRange) -> Self {
        Self {
            range,
            value: range.min,
            complete: false,
        }
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn range(&self) -> ValueRange {
        self.range
    }

    pub fn percent(&self) -> i64 {
        self.range.percent(self.value)
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Advance to `n`. Values past `max` stop at `max`; decreases are ignored.
    pub fn set(&mut self, n: i64) -> ProgressUpdate {
        let next = self.range.clamp(n).max(self.value);
        let changed = next != self.value;
        self.value = next;

        let completed = !self.complete && self.value >= self.range.max;
        if completed {
            self.complete = true;
        }
        ProgressUpdate { changed, completed }
    }

    /// Back to `min`, not complete.
    pub fn reset(&mut self) -> bool {
        let changed = self.value != self.range.min || self.complete;
        self.value = self.range.min;
        self.complete = false;
        changed
    }
}

/// Numeric state of a slider or progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value {
    Slider(SliderValue),
    Progress(ProgressValue),
}

impl Value {
    pub fn value(&self) -> i64 {
        match self {
            Value::Slider(v) => v.value(),
            Value::Progress(v) => v.value(),
        }
    }

    pub fn percent(&self) -> i64 {
        match self {
            Value::Slider(v) => v.percent(),
            Value::Progress(v) => v.percent(),
        }
    }
}

/// Set a widget's value programmatically.
///
/// Sliders clamp and snap silently. Progress bars announce completion the
/// first time they reach `max`. Widgets without a value ignore the call.
pub fn set_value(state: &mut WidgetState, n: i64) -> bool {
    let (changed, completed) = match state.value.as_mut() {
        Some(Value::Slider(slider)) => (slider.set(n), false),
        Some(Value::Progress(progress)) => {
            let update = progress.set(n);
            (update.changed, update.completed)
        }
        None => return false,
    };

    if completed {
        log::debug!("{}: progress complete", state.id());
        live::announce(state, live::progress_complete());
    }
    if changed || completed {
        state.mark_dirty();
    }
    changed
}

/// Current value, if the widget has one.
pub fn get_value(state: &WidgetState) -> Option<i64> {
    state.value.as_ref().map(Value::value)
}

/// Display percentage, if the widget has a value.
pub fn get_percent(state: &WidgetState) -> Option<i64> {
    state.value.as_ref().map(Value::percent)
}
