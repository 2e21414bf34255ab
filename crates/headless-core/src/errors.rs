//! # Error Types
//!
//! ## Overview
//!
//! Failures returned by the transitions on [List](crate::list::List) and
//! [Dropdown](crate::dropdown::Dropdown). A failed transition never produces a partially updated
//! value: the caller still holds the value it started from.
use crate::prelude::MoveDir1D;

fn edge_name(dir: &MoveDir1D) -> &'static str {
    match dir {
        MoveDir1D::Next => "end",
        MoveDir1D::Previous => "beginning",
    }
}

/// Errors returned from list and dropdown transitions.
#[derive(thiserror::Error, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ListError {
    /// The given index does not refer to an item in the list.
    #[error("Invalid list index: {0}")]
    InvalidIndex(usize),

    /// Tried to move past the first or last item of a list that doesn't wrap around.
    #[error("Cannot move past the {} of the list", edge_name(.0))]
    Boundary(MoveDir1D),
}

impl ListError {
    /// Whether this error came from navigating past the edge of a non-circular list.
    ///
    /// Hosts generally treat these as ignored intents rather than real failures.
    pub fn is_boundary(&self) -> bool {
        matches!(self, ListError::Boundary(_))
    }
}

/// Common result type for list and dropdown transitions.
pub type ListResult<V> = Result<V, ListError>;
