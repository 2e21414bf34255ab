//! # Dropdowns
//!
//! ## Overview
//!
//! A [Dropdown] wraps a [List] of options, and tracks two things on top of it: whether the
//! option panel is open, and which option has been selected.
//!
//! The option under the list's cursor is the *active* one, which moves around as the user
//! navigates. The *selected* option only changes when the user commits to a choice, via
//! [Dropdown::set_selected] or [Dropdown::select_active]. Opening and closing never touch
//! either position, and moving the highlight never changes the selection.
use log::{debug, trace};

use crate::actions::DropdownAction;
use crate::errors::{ListError, ListResult};
use crate::list::List;
use crate::prelude::*;

/// Open/closed state and a committed selection layered over a [List] of options.
#[derive(Debug, Eq, PartialEq)]
pub struct Dropdown<T> {
    open: bool,
    selected: usize,
    list: List<T>,
}

impl<T> Dropdown<T> {
    /// Returns true when the dropdown is open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Returns the option at the given index.
    pub fn item(&self, index: usize) -> Option<&T> {
        self.list.get(index)
    }

    /// Returns all of the options in this dropdown.
    pub fn items(&self) -> &[T] {
        self.list.items()
    }

    /// Returns how many options this dropdown has.
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns the active/highlighted option.
    pub fn active(&self) -> Option<&T> {
        self.list.current()
    }

    /// Returns the index of the active/highlighted option.
    pub fn active_index(&self) -> usize {
        self.list.current_index()
    }

    /// Returns the currently selected option.
    pub fn selected(&self) -> Option<&T> {
        self.item(self.selected)
    }

    /// Returns the index of the currently selected option.
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Returns the underlying list of options.
    pub fn list(&self) -> &List<T> {
        &self.list
    }

    /// Flip between open and closed.
    pub fn toggle(&self) -> Self {
        Dropdown { open: !self.open, ..self.clone() }
    }

    /// Open the dropdown, unless it's already open.
    pub fn open(&self) -> Self {
        if self.is_open() {
            self.clone()
        } else {
            self.toggle()
        }
    }

    /// Close the dropdown, unless it's already closed.
    pub fn close(&self) -> Self {
        if self.is_open() {
            self.toggle()
        } else {
            self.clone()
        }
    }

    fn with_list(&self, list: List<T>) -> Self {
        Dropdown { open: self.open, selected: self.selected, list }
    }
}

impl<T: PartialEq> Dropdown<T> {
    /// Create a closed dropdown over a non-circular list of `options`.
    ///
    /// The selection starts on the first option equal to `default_selected`, or on the first
    /// option when there's no default or it can't be found.
    pub fn new(options: Vec<T>, default_selected: Option<&T>) -> Self {
        Dropdown::from_list(List::new(options), default_selected)
    }

    /// Create a closed dropdown over an existing [List], keeping its cursor and circularity.
    pub fn from_list(list: List<T>, default_selected: Option<&T>) -> Self {
        let selected = match default_selected {
            Some(default) => {
                list.iter().position(|item| item == default).unwrap_or_else(|| {
                    debug!("default selection not among {} options, using the first", list.len());
                    0
                })
            },
            None => 0,
        };

        Dropdown { open: false, selected, list }
    }

    /// Returns true if the given option is currently active/highlighted.
    pub fn is_active(&self, item: &T) -> bool {
        self.list.is_current(item)
    }

    /// Returns true if the given option is currently selected.
    pub fn is_selected(&self, item: &T) -> bool {
        self.selected() == Some(item)
    }

    /// Highlight the option at `index` without selecting it.
    pub fn set_active(&self, index: usize) -> ListResult<Self> {
        let list = self.list.set_current(index)?;

        Ok(self.with_list(list))
    }

    /// Highlight the option one over in direction `dir`.
    pub fn advance(&self, dir: MoveDir1D) -> ListResult<Self> {
        let list = self.list.advance(dir)?;

        Ok(self.with_list(list))
    }

    /// Highlight the following option.
    pub fn next(&self) -> ListResult<Self> {
        self.advance(MoveDir1D::Next)
    }

    /// Highlight the preceding option.
    pub fn previous(&self) -> ListResult<Self> {
        self.advance(MoveDir1D::Previous)
    }

    /// Commit the option at `index` as the selection.
    ///
    /// Selecting an option equal to the current selection returns the dropdown unchanged.
    pub fn set_selected(&self, index: usize) -> ListResult<Self> {
        let item = match self.item(index) {
            Some(item) => item,
            None => {
                trace!("rejected selection of index {index}, dropdown has {} options", self.len());

                return Err(ListError::InvalidIndex(index));
            },
        };

        if self.is_selected(item) {
            trace!("index {index} is already selected");

            return Ok(self.clone());
        }

        Ok(Dropdown { selected: index, ..self.clone() })
    }

    /// Commit the active/highlighted option as the selection.
    pub fn select_active(&self) -> ListResult<Self> {
        self.set_selected(self.list.current_index())
    }

    /// Apply a [DropdownAction] to this dropdown.
    pub fn perform(&self, action: &DropdownAction) -> ListResult<Self> {
        match action {
            DropdownAction::Toggle => Ok(self.toggle()),
            DropdownAction::Open => Ok(self.open()),
            DropdownAction::Close => Ok(self.close()),
            DropdownAction::Activate(index) => self.set_active(*index),
            DropdownAction::Move(dir) => self.advance(*dir),
            DropdownAction::Select(index) => self.set_selected(*index),
            DropdownAction::SelectActive => self.select_active(),
        }
    }
}

impl<T> Clone for Dropdown<T> {
    fn clone(&self) -> Self {
        Dropdown {
            open: self.open,
            selected: self.selected,
            list: self.list.clone(),
        }
    }
}

impl<T: PartialEq> Default for Dropdown<T> {
    fn default() -> Self {
        Dropdown::new(Vec::new(), None)
    }
}

impl<T: PartialEq> From<List<T>> for Dropdown<T> {
    fn from(list: List<T>) -> Self {
        Dropdown::from_list(list, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn abc(default: Option<&char>) -> Dropdown<char> {
        Dropdown::new(vec!['a', 'b', 'c'], default)
    }

    #[test]
    fn test_new() {
        let dropdown = abc(Some(&'b'));
        assert_eq!(dropdown.is_open(), false);
        assert_eq!(dropdown.selected(), Some(&'b'));
        assert_eq!(dropdown.selected_index(), 1);
        assert_eq!(dropdown.active(), Some(&'a'));
        assert_eq!(dropdown.list().is_circular(), false);

        // Without a default, the first option is selected.
        let dropdown = abc(None);
        assert_eq!(dropdown.selected(), Some(&'a'));

        // Unknown defaults fall back to the first option.
        let dropdown = abc(Some(&'z'));
        assert_eq!(dropdown.selected_index(), 0);

        let dropdown = Dropdown::from_list(List::circular(vec!['a', 'b', 'c']), Some(&'c'));
        assert_eq!(dropdown.list().is_circular(), true);
        assert_eq!(dropdown.selected(), Some(&'c'));
    }

    #[test]
    fn test_queries() {
        let dropdown = abc(Some(&'c')).set_active(1).unwrap();

        assert_eq!(dropdown.items(), &['a', 'b', 'c']);
        assert_eq!(dropdown.item(0), Some(&'a'));
        assert_eq!(dropdown.item(3), None);
        assert_eq!(dropdown.is_active(&'b'), true);
        assert_eq!(dropdown.is_active(&'c'), false);
        assert_eq!(dropdown.is_selected(&'c'), true);
        assert_eq!(dropdown.is_selected(&'b'), false);
    }

    #[test]
    fn test_open_close() {
        let dropdown = abc(None);

        let opened = dropdown.toggle();
        assert_eq!(opened.is_open(), true);
        assert_eq!(opened.toggle(), dropdown);

        assert_eq!(dropdown.open().open(), dropdown.open());
        assert_eq!(dropdown.close().close(), dropdown.close());
        assert_eq!(opened.close(), dropdown);
        assert_eq!(dropdown.close(), dropdown);

        // Visibility never moves the highlight or the selection.
        assert_eq!(opened.active_index(), dropdown.active_index());
        assert_eq!(opened.selected_index(), dropdown.selected_index());
    }

    #[test]
    fn test_set_active() {
        let dropdown = abc(Some(&'b')).open();

        let moved = dropdown.set_active(2).unwrap();
        assert_eq!(moved.active(), Some(&'c'));
        assert_eq!(moved.selected(), Some(&'b'));
        assert_eq!(moved.is_open(), true);

        assert_eq!(dropdown.set_active(3), Err(ListError::InvalidIndex(3)));
    }

    #[test]
    fn test_navigation() {
        let dropdown = abc(None);

        let dropdown = dropdown.next().unwrap().next().unwrap();
        assert_eq!(dropdown.active(), Some(&'c'));
        assert_eq!(dropdown.selected(), Some(&'a'));
        assert_eq!(dropdown.next(), Err(ListError::Boundary(MoveDir1D::Next)));

        let dropdown = dropdown.previous().unwrap();
        assert_eq!(dropdown.active(), Some(&'b'));

        let circular = Dropdown::from_list(List::circular(vec!['a', 'b', 'c']), None);
        assert_eq!(circular.previous().unwrap().active(), Some(&'c'));
    }

    #[test]
    fn test_set_selected() {
        let dropdown = abc(Some(&'b'));

        let selected = dropdown.set_selected(0).unwrap();
        assert_eq!(selected.selected(), Some(&'a'));
        assert_eq!(selected.is_open(), false);
        assert_eq!(selected.active_index(), dropdown.active_index());

        assert_eq!(dropdown.set_selected(7), Err(ListError::InvalidIndex(7)));
    }

    #[test]
    fn test_set_selected_noop() {
        let dropdown = abc(Some(&'b')).open();

        // Re-selecting the current selection hands back the same dropdown.
        assert_eq!(dropdown.set_selected(1), Ok(dropdown.clone()));

        // Options that compare equal to the selection count as already selected.
        let dupes = Dropdown::new(vec!['x', 'y', 'x'], None);
        let same = dupes.set_selected(2).unwrap();
        assert_eq!(same.selected_index(), 0);
        assert_eq!(same, dupes);
    }

    #[test]
    fn test_select_active() {
        let dropdown = abc(None).open().next().unwrap().next().unwrap();

        let dropdown = dropdown.select_active().unwrap();
        assert_eq!(dropdown.selected(), Some(&'c'));
        assert_eq!(dropdown.active(), Some(&'c'));
        assert_eq!(dropdown.is_open(), true);
    }

    #[test]
    fn test_perform() {
        let dropdown = abc(None);

        let dropdown = dropdown.perform(&DropdownAction::Toggle).unwrap();
        assert_eq!(dropdown.is_open(), true);

        let dropdown = dropdown.perform(&DropdownAction::Open).unwrap();
        assert_eq!(dropdown.is_open(), true);

        let dropdown = dropdown.perform(&DropdownAction::Activate(2)).unwrap();
        assert_eq!(dropdown.active(), Some(&'c'));

        let dropdown = dropdown.perform(&DropdownAction::Move(MoveDir1D::Previous)).unwrap();
        assert_eq!(dropdown.active(), Some(&'b'));

        let dropdown = dropdown.perform(&DropdownAction::SelectActive).unwrap();
        assert_eq!(dropdown.selected(), Some(&'b'));

        let dropdown = dropdown.perform(&DropdownAction::Select(2)).unwrap();
        assert_eq!(dropdown.selected(), Some(&'c'));

        let dropdown = dropdown.perform(&DropdownAction::Close).unwrap();
        assert_eq!(dropdown.is_open(), false);

        let err = dropdown.perform(&DropdownAction::Select(3)).unwrap_err();
        assert_eq!(err, ListError::InvalidIndex(3));
    }

    #[test]
    fn test_empty() {
        let dropdown: Dropdown<char> = Dropdown::default();

        assert_eq!(dropdown.selected(), None);
        assert_eq!(dropdown.active(), None);
        assert_eq!(dropdown.select_active(), Err(ListError::InvalidIndex(0)));
        assert_eq!(dropdown.open().is_open(), true);
    }

    #[test]
    fn test_random_set_selected_idempotent() {
        let mut rng = rand::thread_rng();

        for _ in 0..100 {
            let len = rng.gen_range(1..20);
            let dropdown = Dropdown::from(List::from((0..len).collect::<Vec<usize>>()));
            let idx = rng.gen_range(0..len);

            let once = dropdown.set_selected(idx).unwrap();
            let twice = once.set_selected(idx).unwrap();

            assert_eq!(once, twice);
            assert_eq!(once.selected(), Some(&idx));
        }
    }
}
