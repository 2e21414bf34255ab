//! # User intents
//!
//! ## Overview
//!
//! Defunctionalized versions of the transitions on [List](crate::list::List) and
//! [Dropdown](crate::dropdown::Dropdown). A host maps its own keyboard or mouse events onto these
//! values, and then hands them to `perform` to get the next state.
//!
//! ## Example
//!
//! ```
//! use headless_core::prelude::*;
//!
//! let dropdown = Dropdown::new(vec!["red", "green", "blue"], None);
//!
//! // Pressing Enter on the toggle, moving down once, and then committing the highlighted item.
//! let intents = [
//!     DropdownAction::Open,
//!     DropdownAction::Move(MoveDir1D::Next),
//!     DropdownAction::SelectActive,
//!     DropdownAction::Close,
//! ];
//!
//! let dropdown = intents
//!     .iter()
//!     .try_fold(dropdown, |dropdown, act| dropdown.perform(act))
//!     .unwrap();
//!
//! assert_eq!(dropdown.selected(), Some(&"green"));
//! assert_eq!(dropdown.is_open(), false);
//! ```
use crate::prelude::MoveDir1D;

/// Intents that can be applied to a [List](crate::list::List).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ListAction {
    /// Move the cursor to the given index.
    Focus(usize),

    /// Move the cursor one item over in the given direction.
    Move(MoveDir1D),
}

/// Intents that can be applied to a [Dropdown](crate::dropdown::Dropdown).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DropdownAction {
    /// Flip between open and closed.
    Toggle,

    /// Open the dropdown if it isn't already.
    Open,

    /// Close the dropdown if it isn't already.
    Close,

    /// Highlight the item at the given index, without selecting it.
    Activate(usize),

    /// Highlight the item one over in the given direction.
    Move(MoveDir1D),

    /// Commit the item at the given index as the selection.
    Select(usize),

    /// Commit the highlighted item as the selection.
    SelectActive,
}

impl From<ListAction> for DropdownAction {
    fn from(action: ListAction) -> Self {
        match action {
            ListAction::Focus(index) => DropdownAction::Activate(index),
            ListAction::Move(dir) => DropdownAction::Move(dir),
        }
    }
}

impl From<MoveDir1D> for ListAction {
    fn from(dir: MoveDir1D) -> Self {
        ListAction::Move(dir)
    }
}
