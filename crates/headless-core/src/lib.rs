//! # headless-core
//!
//! ## Overview
//!
//! This crate contains the state models behind headless list and dropdown components. They
//! don't render anything or listen for input themselves: a user interface holds one of these
//! values, translates its own events into calls on it, and re-renders from whatever comes back.
//!
//! - [List](list::List) is an ordered sequence of items with a "current" cursor, which can
//!   optionally wrap around at the ends.
//! - [Dropdown](dropdown::Dropdown) layers open/closed visibility and a committed selection on top
//!   of a [List](list::List).
//!
//! All transitions take `&self` and return a fresh value, or an [error](errors::ListError) when
//! the transition isn't possible.
//!
//! ## Examples
//!
//! ```
//! use headless_core::prelude::*;
//!
//! let dropdown = Dropdown::new(vec!['a', 'b', 'c'], Some(&'b'));
//! assert_eq!(dropdown.selected(), Some(&'b'));
//!
//! // Highlight the next option, and then commit to it.
//! let dropdown = dropdown.open().next().unwrap().select_active().unwrap();
//! assert_eq!(dropdown.active(), Some(&'b'));
//! assert_eq!(dropdown.selected(), Some(&'b'));
//!
//! // Moving past the end of a non-circular list fails, and can be ignored.
//! let dropdown = dropdown.next().unwrap();
//! let err = dropdown.next().unwrap_err();
//! assert!(err.is_boundary());
//!
//! // A circular list wraps around instead.
//! let list = List::circular(vec![1, 2, 3]);
//! assert_eq!(list.previous().unwrap().current(), Some(&3));
//! ```

// Require docs for public APIs, and disable the more annoying clippy lints.
#![deny(missing_docs)]
#![allow(clippy::bool_to_int_with_if)]
#![allow(clippy::len_without_is_empty)]
#![allow(clippy::needless_return)]

mod util;

pub mod actions;
pub mod dropdown;
pub mod errors;
pub mod list;
pub mod prelude;

pub use self::util::idx_offset;
