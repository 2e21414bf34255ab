//! # Lists
//!
//! ## Overview
//!
//! A [List] is an immutable, ordered sequence of items with a cursor pointing at the "current"
//! (highlighted) item. Every transition returns a new [List], and leaves the one it was called
//! on untouched, so a host can keep older values around without them changing underneath it.
//!
//! Lists can optionally be circular, in which case moving past either end wraps around to the
//! other one instead of failing with [ListError::Boundary].
//!
//! The predicates [List::is_first], [List::is_last] and [List::is_current] compare item values
//! rather than positions. When a list contains repeated values, an item compares as "last" if it
//! equals the last item, wherever it is located, and the navigation boundaries follow suit.
use std::sync::Arc;

use log::trace;

use crate::actions::ListAction;
use crate::errors::{ListError, ListResult};
use crate::prelude::*;
use crate::util::{idx_edge, idx_offset};

/// Ordered list of items that tracks a current position.
#[derive(Debug, Eq, PartialEq)]
pub struct List<T> {
    /// The list of items, shared read-only between copies.
    items: Arc<[T]>,

    /// Currently focused position.
    idx_curr: usize,

    /// Whether moving past either end wraps around.
    circular: bool,
}

impl<T> List<T> {
    /// Create a new, non-circular [List] whose cursor starts on the first item.
    pub fn new(items: Vec<T>) -> Self {
        List { items: items.into(), idx_curr: 0, circular: false }
    }

    /// Create a new [List] that wraps around when moving past either end.
    pub fn circular(items: Vec<T>) -> Self {
        List { items: items.into(), idx_curr: 0, circular: true }
    }

    /// Returns the items in this list.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Returns how many items are in this list.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Indicates whether this list is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Indicates whether navigation wraps around at the ends of this list.
    pub fn is_circular(&self) -> bool {
        self.circular
    }

    /// Get the item at a given position, if there is one.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Get the first item in this list.
    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    /// Get the last item in this list.
    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    /// Get the currently focused position in this list.
    pub fn current_index(&self) -> usize {
        self.idx_curr
    }

    /// Get a reference to the currently focused item.
    pub fn current(&self) -> Option<&T> {
        self.items.get(self.idx_curr)
    }

    /// Iterate over references to the items in this list.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    fn with_current(&self, idx: usize) -> Self {
        List { idx_curr: idx, ..self.clone() }
    }
}

impl<T: PartialEq> List<T> {
    /// Whether `item` is equal to the first item in this list.
    pub fn is_first(&self, item: &T) -> bool {
        self.first() == Some(item)
    }

    /// Whether `item` is equal to the last item in this list.
    pub fn is_last(&self, item: &T) -> bool {
        self.last() == Some(item)
    }

    /// Whether `item` is equal to the currently focused item.
    pub fn is_current(&self, item: &T) -> bool {
        self.current() == Some(item)
    }

    /// Returns a list focused on the item at `index`.
    ///
    /// If that item is already the current one, the list is returned as it is.
    pub fn set_current(&self, index: usize) -> ListResult<Self> {
        let item = match self.get(index) {
            Some(item) => item,
            None => {
                trace!("rejected focus on index {index}, list has {} items", self.len());

                return Err(ListError::InvalidIndex(index));
            },
        };

        if self.is_current(item) {
            return Ok(self.clone());
        }

        Ok(self.with_current(index))
    }

    /// Returns a list focused one item over in direction `dir`.
    ///
    /// At the matching end of a circular list this wraps around to the opposite end; a
    /// non-circular list fails with [ListError::Boundary] instead.
    pub fn advance(&self, dir: MoveDir1D) -> ListResult<Self> {
        let current = match self.current() {
            Some(item) => item,
            None => return Err(ListError::Boundary(dir)),
        };

        let at_edge = match dir {
            MoveDir1D::Next => self.is_last(current),
            MoveDir1D::Previous => self.is_first(current),
        };

        if at_edge {
            if !self.circular {
                trace!("rejected move {dir:?} from index {}", self.idx_curr);

                return Err(ListError::Boundary(dir));
            }

            return Ok(self.with_current(idx_edge(&dir.flip(), self.len())));
        }

        idx_offset(self.idx_curr, 1, &dir, self.len(), self.circular)
            .map(|idx| self.with_current(idx))
            .ok_or(ListError::Boundary(dir))
    }

    /// Returns a list focused on the following item.
    pub fn next(&self) -> ListResult<Self> {
        self.advance(MoveDir1D::Next)
    }

    /// Returns a list focused on the preceding item.
    pub fn previous(&self) -> ListResult<Self> {
        self.advance(MoveDir1D::Previous)
    }

    /// Apply a [ListAction] to this list.
    pub fn perform(&self, action: &ListAction) -> ListResult<Self> {
        match action {
            ListAction::Focus(index) => self.set_current(*index),
            ListAction::Move(dir) => self.advance(*dir),
        }
    }
}

impl<T> Clone for List<T> {
    fn clone(&self) -> Self {
        List {
            items: Arc::clone(&self.items),
            idx_curr: self.idx_curr,
            circular: self.circular,
        }
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        List::new(Vec::new())
    }
}

impl<T> AsRef<[T]> for List<T> {
    fn as_ref(&self) -> &[T] {
        self.items.as_ref()
    }
}

impl<T> From<Vec<T>> for List<T> {
    fn from(items: Vec<T>) -> Self {
        List::new(items)
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        List::new(iter.into_iter().collect())
    }
}
