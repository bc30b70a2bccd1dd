//! Positions inside a matrix view.

use std::cmp::Ordering;

use super::geometry::{Offset, Size, View};

/// Addresses one element of a matrix view.
///
/// The offset is relative to `view`; the absolute position in the backing
/// storage is computed once on construction. Indexes are only comparable
/// with indexes of the same view, mixing views panics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatrixIndex {
    offset: Offset,
    view: View,
    storage_size: Size,
    storage_index: isize,
}

impl MatrixIndex {
    pub fn new(offset: Offset, view: View, storage_size: Size) -> Self {
        let storage_index = (view.offset.row + offset.row) * storage_size.columns
            + view.offset.column
            + offset.column;
        Self {
            offset,
            view,
            storage_size,
            storage_index,
        }
    }

    pub fn offset(&self) -> Offset {
        self.offset
    }

    pub fn view(&self) -> View {
        self.view
    }

    /// Absolute position in the row-major storage buffer.
    pub fn storage_index(&self) -> isize {
        self.storage_index
    }

    /// Row-major position counted in the view's own row width.
    pub fn flat_offset(&self) -> isize {
        self.view.size.columns * self.offset.row + self.offset.column
    }

    /// Steps `n` elements forward (or backward when negative) in row-major
    /// order of the view, wrapping across the view's rows.
    ///
    /// Stepping past either end yields an index outside the view; it is
    /// still ordered correctly but must not be used for lookup.
    pub fn advanced_by(&self, n: isize) -> Self {
        let column = self.offset.column + n;
        let columns = self.view.size.columns;
        // A zero-width view has no row width to wrap against.
        if columns <= 0 || (0..columns).contains(&column) {
            return Self::new(Offset::new(column, self.offset.row), self.view, self.storage_size);
        }
        let flat = self.offset.row * columns + column;
        Self::new(
            Offset::new(flat.rem_euclid(columns), flat.div_euclid(columns)),
            self.view,
            self.storage_size,
        )
    }

    /// Number of steps from `self` to `other`.
    ///
    /// # Panics
    ///
    /// Panics if the two indexes belong to different views.
    #[track_caller]
    pub fn distance_to(&self, other: &MatrixIndex) -> isize {
        self.assert_same_view(other);
        other.flat_offset() - self.flat_offset()
    }

    #[track_caller]
    fn assert_same_view(&self, other: &MatrixIndex) {
        assert!(
            self.view == other.view,
            "comparing matrix indexes of different views: {:?} vs {:?}",
            self.view,
            other.view
        );
    }
}

impl PartialOrd for MatrixIndex {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MatrixIndex {
    #[track_caller]
    fn cmp(&self, other: &Self) -> Ordering {
        self.assert_same_view(other);
        self.storage_index.cmp(&other.storage_index)
    }
}
