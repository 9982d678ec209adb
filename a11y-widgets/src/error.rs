//! Widget error types.

use thiserror::Error;

use crate::item::ElementKind;
use crate::registry::WidgetId;
use crate::widgets::WidgetKind;

/// Errors surfaced by widget construction and dispatch.
///
/// Out-of-range and unmapped input are not errors: the controllers clamp or
/// ignore them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WidgetError {
    /// The widget was attached to an element kind it cannot work with.
    #[error("{kind} widget must be attached to a {expected}, found a {found}")]
    IncompatibleElement {
        kind: WidgetKind,
        expected: ElementKind,
        found: ElementKind,
    },

    /// Numeric range is empty or inverted.
    #[error("invalid range: min {min} must be less than max {max}")]
    InvalidRange { min: i64, max: i64 },

    /// Step must be a positive number.
    #[error("step must be positive, got {0}")]
    InvalidStep(i64),

    /// The widget needs at least one panel, slide or item.
    #[error("{0} widget needs at least one item")]
    EmptySource(WidgetKind),

    /// No live widget with this id.
    #[error("unknown widget: {0}")]
    UnknownWidget(WidgetId),
}
