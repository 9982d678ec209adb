//! Live-region notifier.
//!
//! The core decides when and what to announce; the adapter owns the region
//! the text is written into. Announcements are queued on the widget state
//! and drained by the host after each operation. Nothing is deduplicated
//! here: repeating the same text is the adapter's call to collapse.

use crate::state::WidgetState;

/// How urgently assistive technology should read an announcement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Politeness {
    /// Read when the user is idle.
    #[default]
    Polite,
    /// Interrupt whatever is being read.
    Assertive,
}

/// Text queued for the widget's announcement region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    pub text: String,
    pub politeness: Politeness,
}

impl Announcement {
    pub fn polite(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            politeness: Politeness::Polite,
        }
    }

    pub fn assertive(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            politeness: Politeness::Assertive,
        }
    }
}

/// Fixed message for a progress bar reaching its maximum.
pub const PROGRESS_COMPLETE: &str = "Loading complete";

/// Queue an announcement on the widget.
pub fn announce(state: &mut WidgetState, announcement: Announcement) {
    log::trace!("{}: announce {:?}", state.id(), announcement.text);
    state.pending.push(announcement);
}

/// A slider value was committed.
pub fn slider_committed(value: i64) -> Announcement {
    Announcement::polite(value.to_string())
}

/// The user asked for the current progress.
pub fn progress_status(percent: i64) -> Announcement {
    Announcement::assertive(format!("{percent}%"))
}

/// The progress bar reached its maximum.
pub fn progress_complete() -> Announcement {
    Announcement::assertive(PROGRESS_COMPLETE)
}
