//! Expand/collapse state for a single project card.

use leptos::prelude::*;

/// The two UI states of a card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExpandState {
    #[default]
    Collapsed,
    Expanded,
}

/// Where a click landed inside a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardClick {
    /// Anywhere on the card body
    Body,
    /// The dedicated chevron button
    ToggleControl,
}

impl CardClick {
    /// Whether the click reaches the card body handler after its own.
    ///
    /// The toggle control stops propagation so one click never toggles twice.
    pub const fn propagates(self) -> bool {
        matches!(self, Self::Body)
    }
}

impl ExpandState {
    pub const fn toggled(self) -> Self {
        match self {
            Self::Collapsed => Self::Expanded,
            Self::Expanded => Self::Collapsed,
        }
    }

    pub const fn is_expanded(self) -> bool {
        matches!(self, Self::Expanded)
    }

    /// Categories, description, location and time are only rendered when expanded.
    pub const fn shows_details(self) -> bool {
        self.is_expanded()
    }

    /// Chevron rotation in degrees.
    pub const fn indicator_rotation_deg(self) -> f64 {
        match self {
            Self::Collapsed => 0.0,
            Self::Expanded => 180.0,
        }
    }

    /// Run every handler on the click's propagation path.
    pub fn after_click(self, click: CardClick) -> Self {
        // Handler on the clicked element.
        let mut state = self.toggled();
        // Body handler, reached only if a control click bubbles up.
        if click == CardClick::ToggleControl && click.propagates() {
            state = state.toggled();
        }
        state
    }
}

/// Reactive expand state owned by one card.
///
/// Created when the card mounts and dropped with it, so a remount always
/// starts collapsed.
#[derive(Debug, Clone, Copy)]
pub struct CardState {
    state: RwSignal<ExpandState>,
}

impl CardState {
    pub fn new() -> Self {
        Self { state: RwSignal::new(ExpandState::Collapsed) }
    }

    /// Apply a click and return the new state.
    pub fn click(&self, click: CardClick) -> ExpandState {
        self.state.update(|s| *s = s.after_click(click));
        self.state.get_untracked()
    }

    /// Tracked read for use inside views.
    pub fn get(&self) -> ExpandState {
        self.state.get()
    }

    pub fn get_untracked(&self) -> ExpandState {
        self.state.get_untracked()
    }
}

impl Default for CardState {
    fn default() -> Self {
        Self::new()
    }
}
