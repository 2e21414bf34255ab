//! # Common types
//!
//! ## Overview
//!
//! Small shared types used throughout this crate, along with re-exports of the state models so
//! that consumers can pull everything in with a single `use headless_core::prelude::*;`.
pub use crate::actions::{DropdownAction, ListAction};
pub use crate::dropdown::Dropdown;
pub use crate::errors::{ListError, ListResult};
pub use crate::list::List;

/// Represent movement along a 1-dimensional list of items.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum MoveDir1D {
    /// Move backwards, towards the first item.
    Previous,

    /// Move forwards, towards the last item.
    Next,
}

impl MoveDir1D {
    /// Returns the direction opposite to this one.
    pub fn flip(&self) -> MoveDir1D {
        match self {
            MoveDir1D::Previous => MoveDir1D::Next,
            MoveDir1D::Next => MoveDir1D::Previous,
        }
    }
}
