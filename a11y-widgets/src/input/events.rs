/// Simplified key representation.
///
/// Only keys some widget reacts to are represented. Adapters convert
/// whatever their platform delivers with `Key::try_from` on a crossterm
/// `KeyCode` or [`Key::from_key_code`] for numeric DOM key codes, and drop
/// anything that does not convert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Space,
    Enter,
    Escape,
    Tab,
    BackTab,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
}

impl Key {
    /// Convert a numeric DOM `keyCode` into a key.
    ///
    /// Only the codes the widgets react to are recognised; anything else is
    /// `None` and the input is dropped before it reaches the key map.
    pub fn from_key_code(code: u16) -> Option<Self> {
        let key = match code {
            9 => Key::Tab,
            13 => Key::Enter,
            27 => Key::Escape,
            32 => Key::Space,
            35 => Key::End,
            36 => Key::Home,
            37 => Key::Left,
            38 => Key::Up,
            39 => Key::Right,
            40 => Key::Down,
            _ => return None,
        };
        Some(key)
    }
}

/// Modifier keys state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Modifiers {
    /// Control key held
    pub ctrl: bool,
    /// Shift key held
    pub shift: bool,
    /// Alt key held
    pub alt: bool,
    /// Meta / Command / Super key held
    pub meta: bool,
}

impl Modifiers {
    /// No modifiers
    pub const NONE: Self = Self {
        ctrl: false,
        shift: false,
        alt: false,
        meta: false,
    };

    pub const fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Self::NONE
        }
    }

    pub const fn meta() -> Self {
        Self {
            meta: true,
            ..Self::NONE
        }
    }

    pub const fn shift() -> Self {
        Self {
            shift: true,
            ..Self::NONE
        }
    }

    /// The platform's primary modifier: Control, or Command on macOS.
    pub fn primary(&self) -> bool {
        self.ctrl || self.meta
    }

    /// Check if any modifier is active
    pub fn any(&self) -> bool {
        self.ctrl || self.shift || self.alt || self.meta
    }
}

// Conversion from crossterm types
impl TryFrom<crossterm::event::KeyCode> for Key {
    type Error = crossterm::event::KeyCode;

    /// Unsupported codes are handed back unchanged.
    fn try_from(code: crossterm::event::KeyCode) -> Result<Self, Self::Error> {
        use crossterm::event::KeyCode;
        let key = match code {
            KeyCode::Char(' ') => Key::Space,
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Esc => Key::Escape,
            KeyCode::Tab => Key::Tab,
            KeyCode::BackTab => Key::BackTab,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            other => return Err(other),
        };
        Ok(key)
    }
}

impl From<crossterm::event::KeyModifiers> for Modifiers {
    fn from(mods: crossterm::event::KeyModifiers) -> Self {
        use crossterm::event::KeyModifiers;
        Self {
            ctrl: mods.contains(KeyModifiers::CONTROL),
            shift: mods.contains(KeyModifiers::SHIFT),
            alt: mods.contains(KeyModifiers::ALT),
            meta: mods.contains(KeyModifiers::SUPER) || mods.contains(KeyModifiers::META),
        }
    }
}

/// Everything an adapter can forward to a widget.
///
/// Keys go through the key map; the remaining variants are pointer, focus
/// and window events that the widgets interpret directly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Input {
    /// Key press on the widget (or on the item given as origin).
    Key(Key),
    /// Pointer click / tap on the origin item.
    Click,
    /// Pointer entered the widget, or the origin item when one is given.
    PointerEnter,
    /// Pointer left the widget, or the origin item when one is given.
    PointerLeave,
    /// Keyboard focus entered the widget.
    FocusIn,
    /// Keyboard focus left the widget.
    FocusOut,
    /// Pointer drag started on the origin item.
    DragStart,
    /// Dragged item hovers the origin item. `offset` is the pointer position
    /// inside the target, `extent` the target's size along the list axis.
    DragOver { offset: f32, extent: f32 },
    /// Dragged item released over the last hovered target.
    Drop,
    /// Drag ended without a drop.
    DragCancel,
    /// Slider knob dragged to `fraction` of the track (0.0 ..= 1.0).
    SliderDrag { fraction: f64 },
    /// Window / viewport resized.
    Resize,
}
