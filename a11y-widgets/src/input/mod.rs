//! Input module - keys, modifiers, adapter input events and the key map.

pub mod events;
pub mod keymap;

pub use events::{Input, Key, Modifiers};
pub use keymap::{Axis, LogicalAction, resolve_action};
