//! Per-widget configuration.
//!
//! Every widget takes a flat set of named options at construction. The
//! structs below are plain builders and also deserialize from declarative
//! input (`snake_case` keys, every field optional). Once a widget is built
//! its configuration is never changed.

use std::time::Duration;

use serde::Deserialize;

use crate::error::WidgetError;
use crate::widgets::WidgetKind;

/// Carousel options.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    pub instructions: String,
    /// Auto-advance interval in milliseconds. Zero disables auto-advance.
    pub animation_speed_ms: u64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            instructions: "Carousel. Use the left and right arrow keys to move between slides."
                .into(),
            animation_speed_ms: 3000,
        }
    }
}

impl CarouselConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn animation_speed(mut self, speed: Duration) -> Self {
        self.animation_speed_ms = speed.as_millis() as u64;
        self
    }

    pub fn interval(&self) -> Option<Duration> {
        (self.animation_speed_ms > 0).then(|| Duration::from_millis(self.animation_speed_ms))
    }
}

/// Menu options.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    pub instructions: String,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            instructions: "Use the arrow keys to move between menu items, Space to open a \
                           submenu, Escape to close it and Enter to activate an item."
                .into(),
        }
    }
}

impl MenuConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Progress bar options.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ProgressConfig {
    pub instructions: String,
    pub min: i64,
    pub max: i64,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            instructions: "Press Space or Enter to hear the current progress.".into(),
            min: 0,
            max: 100,
        }
    }
}

impl ProgressConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max(mut self, max: i64) -> Self {
        self.max = max;
        self
    }

    pub(crate) fn validate(&self) -> Result<(), WidgetError> {
        if self.min >= self.max {
            return Err(WidgetError::InvalidRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// Slider options.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SliderConfig {
    pub instructions: String,
    pub min: i64,
    pub max: i64,
    /// Initial value; defaults to `min`.
    pub value: Option<i64>,
    pub step: i64,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            instructions: "Use the right and left arrow keys to increase or decrease the value."
                .into(),
            min: 0,
            max: 100,
            value: None,
            step: 1,
        }
    }
}

impl SliderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn range(mut self, min: i64, max: i64) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    pub fn step(mut self, step: i64) -> Self {
        self.step = step;
        self
    }

    pub fn value(mut self, value: i64) -> Self {
        self.value = Some(value);
        self
    }

    pub(crate) fn validate(&self) -> Result<(), WidgetError> {
        if self.min >= self.max {
            return Err(WidgetError::InvalidRange {
                min: self.min,
                max: self.max,
            });
        }
        if self.step <= 0 {
            return Err(WidgetError::InvalidStep(self.step));
        }
        Ok(())
    }
}

/// Sortable list options.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SortableConfig {
    pub instructions: String,
}

impl Default for SortableConfig {
    fn default() -> Self {
        Self {
            instructions: "Use the arrow keys to pick a list item, and Control or Command with \
                           the arrow keys to move it to a new position."
                .into(),
        }
    }
}

impl SortableConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Where the tab bar sits relative to the panels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TabLocation {
    #[default]
    Top,
}

/// Tabs options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TabsConfig {
    pub tab_location: TabLocation,
    /// Initially selected tab; clamped to the last tab.
    pub selected_index: usize,
}

impl TabsConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_index(mut self, index: usize) -> Self {
        self.selected_index = index;
        self
    }
}

/// Tree menu options.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TreeMenuConfig {
    pub instructions: String,
    pub menu_title: String,
    /// Start with every branch expanded.
    pub expand_all: bool,
}

impl Default for TreeMenuConfig {
    fn default() -> Self {
        Self {
            instructions: "Use the up and down arrow keys to move through the items, and Enter \
                           or Space to open and close branches."
                .into(),
            menu_title: "Menu".into(),
            expand_all: true,
        }
    }
}

impl TreeMenuConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn menu_title(mut self, title: impl Into<String>) -> Self {
        self.menu_title = title.into();
        self
    }

    pub fn expand_all(mut self, expand_all: bool) -> Self {
        self.expand_all = expand_all;
        self
    }
}

/// Configuration of any widget kind.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "widget", rename_all = "snake_case")]
pub enum WidgetConfig {
    Carousel(CarouselConfig),
    Menu(MenuConfig),
    ProgressBar(ProgressConfig),
    Slider(SliderConfig),
    Sortable(SortableConfig),
    Tabs(TabsConfig),
    TreeMenu(TreeMenuConfig),
}

impl WidgetConfig {
    pub fn kind(&self) -> WidgetKind {
        match self {
            WidgetConfig::Carousel(_) => WidgetKind::Carousel,
            WidgetConfig::Menu(_) => WidgetKind::Menu,
            WidgetConfig::ProgressBar(_) => WidgetKind::ProgressBar,
            WidgetConfig::Slider(_) => WidgetKind::Slider,
            WidgetConfig::Sortable(_) => WidgetKind::Sortable,
            WidgetConfig::Tabs(_) => WidgetKind::Tabs,
            WidgetConfig::TreeMenu(_) => WidgetKind::TreeMenu,
        }
    }

    /// Screen reader instructions, if the widget has any.
    pub fn instructions(&self) -> Option<&str> {
        match self {
            WidgetConfig::Carousel(c) => Some(&c.instructions),
            WidgetConfig::Menu(c) => Some(&c.instructions),
            WidgetConfig::ProgressBar(c) => Some(&c.instructions),
            WidgetConfig::Slider(c) => Some(&c.instructions),
            WidgetConfig::Sortable(c) => Some(&c.instructions),
            WidgetConfig::Tabs(_) => None,
            WidgetConfig::TreeMenu(c) => Some(&c.instructions),
        }
    }
}

impl From<CarouselConfig> for WidgetConfig {
    fn from(config: CarouselConfig) -> Self {
        WidgetConfig::Carousel(config)
    }
}

impl From<MenuConfig> for WidgetConfig {
    fn from(config: MenuConfig) -> Self {
        WidgetConfig::Menu(config)
    }
}

impl From<ProgressConfig> for WidgetConfig {
    fn from(config: ProgressConfig) -> Self {
        WidgetConfig::ProgressBar(config)
    }
}

impl From<SliderConfig> for WidgetConfig {
    fn from(config: SliderConfig) -> Self {
        WidgetConfig::Slider(config)
    }
}

impl From<SortableConfig> for WidgetConfig {
    fn from(config: SortableConfig) -> Self {
        WidgetConfig::Sortable(config)
    }
}

impl From<TabsConfig> for WidgetConfig {
    fn from(config: TabsConfig) -> Self {
        WidgetConfig::Tabs(config)
    }
}

impl From<TreeMenuConfig> for WidgetConfig {
    fn from(config: TreeMenuConfig) -> Self {
        WidgetConfig::TreeMenu(config)
    }
}
