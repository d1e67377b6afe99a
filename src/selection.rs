//! Currently selected place

use crate::place::Place;

/// Whether a place is selected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    Idle,
    Selected,
}

/// Holds at most one selected place for detail display
///
/// No referential check is made against the repository.
#[derive(Debug, Default, Clone)]
pub struct Selection {
    current: Option<Place>,
}

impl Selection {
    #[must_use]
    pub const fn new() -> Self {
        Self { current: None }
    }

    /// Select `place`, or clear the selection with `None`
    pub fn select(&mut self, place: Option<Place>) {
        self.current = place;
    }

    #[must_use]
    pub const fn current(&self) -> Option<&Place> {
        self.current.as_ref()
    }

    #[must_use]
    pub const fn state(&self) -> SelectionState {
        if self.current.is_some() {
            SelectionState::Selected
        } else {
            SelectionState::Idle
        }
    }
}
