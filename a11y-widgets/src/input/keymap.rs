//! Key map: physical keys to logical actions, per widget kind.

use crate::input::events::{Key, Modifiers};
use crate::widgets::WidgetKind;

/// Orientation of an arrow key.
///
/// Menus navigate the menubar horizontally and submenus vertically, so the
/// axis travels with `Next`/`Previous`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// An abstract command decoupled from the key that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalAction {
    Next(Axis),
    Previous(Axis),
    First,
    Last,
    Activate,
    Toggle,
    Expand,
    Collapse,
    Cancel,
    /// Move the focused item one slot towards the end (primary modifier + arrow).
    MoveNext,
    /// Move the focused item one slot towards the start.
    MovePrevious,
    /// Keyboard focus is tabbing out of the widget.
    Leave,
}

/// Resolve a key press into a logical action for the given widget kind.
///
/// Returns `None` for keys the widget does not react to.
pub fn resolve_action(key: Key, modifiers: Modifiers, kind: WidgetKind) -> Option<LogicalAction> {
    use Axis::{Horizontal, Vertical};
    use LogicalAction::*;

    let action = match kind {
        WidgetKind::Carousel => match key {
            Key::Left => Previous(Horizontal),
            Key::Right => Next(Horizontal),
            Key::Escape => Cancel,
            _ => return None,
        },
        WidgetKind::Menu => match key {
            Key::Right => Next(Horizontal),
            Key::Left => Previous(Horizontal),
            Key::Down => Next(Vertical),
            Key::Up => Previous(Vertical),
            Key::Space => Expand,
            Key::Escape => Cancel,
            Key::Enter => Activate,
            Key::Tab | Key::BackTab => Leave,
            _ => return None,
        },
        WidgetKind::ProgressBar => match key {
            Key::Space | Key::Enter => Activate,
            _ => return None,
        },
        WidgetKind::Slider => match key {
            Key::Right => Next(Horizontal),
            Key::Left => Previous(Horizontal),
            Key::Home => First,
            Key::End => Last,
            _ => return None,
        },
        WidgetKind::Sortable => match (key, modifiers.primary()) {
            (Key::Down, true) => MoveNext,
            (Key::Up, true) => MovePrevious,
            (Key::Down, false) => Next(Vertical),
            (Key::Up, false) => Previous(Vertical),
            _ => return None,
        },
        WidgetKind::Tabs => match key {
            Key::Right => Next(Horizontal),
            Key::Left => Previous(Horizontal),
            Key::Home => First,
            Key::End => Last,
            _ => return None,
        },
        WidgetKind::TreeMenu => match key {
            Key::Down => Next(Vertical),
            Key::Up => Previous(Vertical),
            Key::Right => Expand,
            Key::Left => Collapse,
            Key::Enter | Key::Space => Toggle,
            Key::Home => First,
            Key::End => Last,
            _ => return None,
        },
    };

    Some(action)
}
