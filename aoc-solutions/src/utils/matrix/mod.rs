//! Two-dimensional matrix with cheap, non-copying sub-views
//!
//! A [`Matrix`] pairs a [`View`] (a rectangle in storage coordinates) with a
//! reference-counted element buffer. Slicing, offsetting and growing a matrix
//! only produce a new view over the same buffer, so cutting a grid into many
//! small pieces never copies elements.
//!
//! # Failure modes
//!
//! - Malformed construction input (wrong element count, empty or ragged
//!   lines) is reported as [`MatrixError::InvalidSourceData`].
//! - Attaching a view that does not fit the storage is a bug in the caller and
//!   panics. Use the `*_clamped` variants when leaving the grid is an expected
//!   outcome, e.g. when growing a region that touches the border.
//!
//! # Example
//!
//! ```rust
//! use aoc_solutions::utils::matrix::{Edges, Matrix, Offset};
//!
//! let grid = Matrix::from_lines(["467..", "...*.", "..35."]).unwrap();
//! assert_eq!(grid.at(Offset::new(3, 1)), &'*');
//!
//! let numbers = grid.continuous_matrices_satisfying(|c| c.is_ascii_digit());
//! let numbers: Vec<u32> = numbers.iter().map(|m| m.parse_number().unwrap()).collect();
//! assert_eq!(numbers, vec![467, 35]);
//!
//! // Growing a run at the border needs clamping.
//! let border = grid.row(0).offset_edges_clamped(Edges::ONE);
//! assert_eq!(border.size().rows, 2);
//! ```

mod chars;
mod geometry;
mod index;
mod iter;
mod runs;
mod storage;

#[cfg(test)]
mod tests;

pub use geometry::{Edges, Offset, Size, View};
pub use index::MatrixIndex;
pub use iter::{Columns, Iter, Rows};

use std::fmt;
use std::sync::Arc;
use storage::Storage;
use thiserror::Error;

/// Error type for building a matrix from external data
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// Source data does not describe a rectangular grid of the requested size
    #[error("Invalid source data: {0}")]
    InvalidSourceData(String),
}

/// A rectangular view over shared, immutable matrix storage.
pub struct Matrix<T> {
    view: View,
    storage: Arc<Storage<T>>,
}

impl<T> Matrix<T> {
    /// Creates a `size` matrix with every element set to `value`.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is negative.
    #[track_caller]
    pub fn new(size: Size, value: T) -> Self
    where
        T: Clone,
    {
        Self::with_view(View::of_size(size), Arc::new(Storage::filled(size, value)))
    }

    /// Creates a `size` matrix from row-major elements.
    ///
    /// Fails if `elements` does not yield exactly `columns * rows` items.
    pub fn from_elements<I>(size: Size, elements: I) -> Result<Self, MatrixError>
    where
        I: IntoIterator<Item = T>,
    {
        let storage = Storage::from_elements(size, elements)?;
        Ok(Self::with_view(View::of_size(size), Arc::new(storage)))
    }

    #[track_caller]
    fn with_view(view: View, storage: Arc<Storage<T>>) -> Self {
        assert!(
            view.size.columns >= 0 && view.size.rows >= 0,
            "matrix view {view:?} has a negative dimension"
        );
        assert!(
            view.offset.column >= 0 && view.offset.row >= 0,
            "matrix view {view:?} starts before the storage origin"
        );
        let bounds = storage.size();
        assert!(
            view.fits_within(bounds),
            "matrix view {view:?} exceeds storage of {}x{}",
            bounds.columns,
            bounds.rows
        );
        Self { view, storage }
    }

    fn derive(&self, view: View) -> Self {
        Self::with_view(view, Arc::clone(&self.storage))
    }

    /// The rectangle of the storage this matrix covers.
    pub fn view(&self) -> View {
        self.view
    }

    pub fn size(&self) -> Size {
        self.view.size
    }

    /// Number of elements in the view.
    pub fn len(&self) -> usize {
        self.view.size.count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether both matrices read from the same storage buffer.
    pub fn shares_storage_with(&self, other: &Matrix<T>) -> bool {
        Arc::ptr_eq(&self.storage, &other.storage)
    }

    /// Sub-matrix at `view`, given relative to this matrix.
    ///
    /// # Panics
    ///
    /// Panics if the resulting view leaves the storage.
    #[track_caller]
    pub fn slice(&self, view: View) -> Self {
        self.derive(self.view.sliced_by(view))
    }

    /// Like [`slice`](Self::slice), cutting the result to the storage bounds.
    pub fn slice_clamped(&self, view: View) -> Self {
        self.derive(self.view.sliced_by_clamped(view, self.storage.size()))
    }

    /// Same-sized matrix moved by `delta`.
    ///
    /// # Panics
    ///
    /// Panics if the resulting view leaves the storage.
    #[track_caller]
    pub fn offset(&self, delta: Offset) -> Self {
        self.derive(self.view.offset_by(delta))
    }

    pub fn offset_clamped(&self, delta: Offset) -> Self {
        self.derive(self.view.offset_by_clamped(delta, self.storage.size()))
    }

    /// Matrix grown (positive) or shrunk (negative) by `edges`.
    ///
    /// # Panics
    ///
    /// Panics if the resulting view leaves the storage.
    #[track_caller]
    pub fn offset_edges(&self, edges: Edges) -> Self {
        self.derive(self.view.offset_by_edges(edges))
    }

    pub fn offset_edges_clamped(&self, edges: Edges) -> Self {
        self.derive(self.view.offset_by_edges_clamped(edges, self.storage.size()))
    }

    /// One column wide slice at `column`.
    #[track_caller]
    pub fn column(&self, column: isize) -> Self {
        self.slice(View::new(
            Offset::new(column, 0),
            Size::new(1, self.view.size.rows),
        ))
    }

    /// One row tall slice at `row`.
    #[track_caller]
    pub fn row(&self, row: isize) -> Self {
        self.slice(View::new(
            Offset::new(0, row),
            Size::new(self.view.size.columns, 1),
        ))
    }

    /// Index of `offset`, relative to this matrix's view.
    pub fn index(&self, offset: Offset) -> MatrixIndex {
        MatrixIndex::new(offset, self.view, self.storage.size())
    }

    pub fn start_index(&self) -> MatrixIndex {
        self.index(Offset::ZERO)
    }

    /// One past the last element in row-major order.
    pub fn end_index(&self) -> MatrixIndex {
        self.index(Offset::new(0, self.view.size.rows))
    }

    /// Element at `offset`, relative to this matrix's view.
    ///
    /// # Panics
    ///
    /// Panics if the offset addresses no element of the storage.
    #[track_caller]
    pub fn at(&self, offset: Offset) -> &T {
        &self[self.index(offset)]
    }

    /// Element at `offset`, or `None` when it lies outside this view.
    pub fn get(&self, offset: Offset) -> Option<&T> {
        if !self.view.contains_relative(offset) {
            return None;
        }
        self.storage.at(self.view.offset + offset)
    }

    /// Row-major iterator over the elements of the view.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Lazily produced single-row matrices, top to bottom.
    pub fn rows(&self) -> Rows<'_, T> {
        Rows::new(self)
    }

    /// Lazily produced single-column matrices, left to right.
    pub fn columns(&self) -> Columns<'_, T> {
        Columns::new(self)
    }
}

impl<T> Clone for Matrix<T> {
    fn clone(&self) -> Self {
        Self {
            view: self.view,
            storage: Arc::clone(&self.storage),
        }
    }
}

impl<T> std::ops::Index<MatrixIndex> for Matrix<T> {
    type Output = T;

    #[track_caller]
    fn index(&self, position: MatrixIndex) -> &T {
        let index = usize::try_from(position.storage_index())
            .unwrap_or_else(|_| panic!("matrix index {position:?} is before the storage origin"));
        self.storage.get(index)
    }
}

impl<'a, T> IntoIterator for &'a Matrix<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matrix")
            .field("view", &self.view)
            .field("elements", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}

impl<T: PartialEq> PartialEq for Matrix<T> {
    /// Element-wise equality of the two views, regardless of where they sit
    /// in their storages.
    fn eq(&self, other: &Self) -> bool {
        self.size() == other.size() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Matrix<T> {}
