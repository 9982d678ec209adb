//! Widget instance identifiers.
//!
//! Each widget instance gets an id made of its kind and a serial number.
//! The registry is owned by the host and tracks which serials are live, so
//! ids are unique among live instances and serials of detached widgets are
//! handed out again.

use std::collections::{BTreeSet, HashMap};

use crate::widgets::WidgetKind;

/// Unique identifier for a live widget instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId {
    kind: WidgetKind,
    serial: u32,
}

impl WidgetId {
    pub fn kind(&self) -> WidgetKind {
        self.kind
    }

    pub fn serial(&self) -> u32 {
        self.serial
    }
}

impl std::fmt::Display for WidgetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.kind.id_prefix(), self.serial)
    }
}

/// Allocates and releases widget ids.
#[derive(Debug, Default)]
pub struct WidgetRegistry {
    live: HashMap<WidgetKind, BTreeSet<u32>>,
}

impl WidgetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new instance of `kind`, returning the lowest free serial.
    pub fn register(&mut self, kind: WidgetKind) -> WidgetId {
        let serials = self.live.entry(kind).or_default();
        let serial = (0..)
            .find(|candidate| !serials.contains(candidate))
            .unwrap_or_default();
        serials.insert(serial);
        log::debug!("registered widget {}{}", kind.id_prefix(), serial);
        WidgetId { kind, serial }
    }

    /// Release an id. Returns false if it was not registered.
    pub fn release(&mut self, id: WidgetId) -> bool {
        let removed = self
            .live
            .get_mut(&id.kind)
            .is_some_and(|serials| serials.remove(&id.serial));
        if removed {
            log::debug!("released widget {}", id);
        }
        removed
    }

    pub fn contains(&self, id: WidgetId) -> bool {
        self.live
            .get(&id.kind)
            .is_some_and(|serials| serials.contains(&id.serial))
    }

    /// Number of live instances of `kind`.
    pub fn count(&self, kind: WidgetKind) -> usize {
        self.live.get(&kind).map(|s| s.len()).unwrap_or(0)
    }
}
