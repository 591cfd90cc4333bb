//! Type definitions for the script picker.

use std::fmt::{Display, Formatter};

/// The user's choice in the picker: a script (by index into the listing
/// slice) or quitting without one.
pub enum PickChoice {
    Index(usize),
    Quit,
}

/// Direction to cycle through the listing.
#[derive(Clone, Copy)]
pub enum CycleDirection {
    Up,
    Down,
}

/// One pickable script: its name and description.
#[derive(Clone, Debug)]
pub struct ScriptListing {
    pub name: String,
    pub desc: String,
}

impl ScriptListing {
    #[must_use]
    pub fn new(name: &str, desc: &str) -> Self {
        Self {
            name: name.to_string(),
            desc: desc.to_string(),
        }
    }
}

impl Display for ScriptListing {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.desc.is_empty() {
            f.write_str(&self.name)
        } else {
            write!(f, "{} ({})", self.name, self.desc)
        }
    }
}

/// State for the picker viewport.
///
/// Tracks the visible portion of the listing when there are more scripts
/// than fit on screen.
#[derive(Clone, PartialEq, Debug)]
pub struct ViewportState {
    pub offset: usize,
    pub height: u16,
    pub width: u16,
}

/// Complete UI state for the picker.
#[derive(Clone, PartialEq, Debug)]
pub struct UiState {
    /// Currently selected row in the filtered listing
    pub selected_index: usize,
    /// Viewport state for scrolling
    pub viewport: ViewportState,
    /// Whether the user is currently filtering
    pub is_filtering: bool,
    /// Current filter text
    pub filter_text: String,
}
