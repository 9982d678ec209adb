//! Headless interaction core for accessible widgets.
//!
//! Carousel, menu, progress bar, slider, sortable list, tabs and tree menu
//! share one state machine: a roving focus stop, expand/collapse state,
//! reordering, bounded values and live-region announcements. The core owns
//! that state; a presentation [`Adapter`](host::Adapter) renders it and
//! feeds input back through the [`Host`](host::Host).

pub mod config;
pub mod disclosure;
pub mod error;
pub mod focus;
pub mod host;
pub mod input;
pub mod item;
pub mod live;
pub mod registry;
pub mod reorder;
pub mod state;
pub mod timer;
pub mod value;
pub mod widgets;

pub use error::WidgetError;
pub use host::{Adapter, Host};
pub use state::WidgetState;

pub mod prelude {
    pub use crate::config::{
        CarouselConfig, MenuConfig, ProgressConfig, SliderConfig, SortableConfig, TabLocation,
        TabsConfig, TreeMenuConfig, WidgetConfig,
    };
    pub use crate::error::WidgetError;
    pub use crate::focus::{Boundary, Direction, NavScope};
    pub use crate::host::{Adapter, Host};
    pub use crate::input::{Axis, Input, Key, LogicalAction, Modifiers, resolve_action};
    pub use crate::item::{ElementKind, Item, ItemKey, ItemPath, Position, Source, SourceItem};
    pub use crate::live::{Announcement, Politeness};
    pub use crate::registry::{WidgetId, WidgetRegistry};
    pub use crate::reorder::DropSide;
    pub use crate::state::WidgetState;
    pub use crate::widgets::WidgetKind;
    pub use crate::widgets::carousel::{SlideDirection, SlideTarget, SlideTransition};
}
