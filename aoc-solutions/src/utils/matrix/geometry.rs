//! Value types describing rectangles inside a matrix storage.
//!
//! Nothing here knows about elements. Views can be composed into any state,
//! including negative or out-of-bounds ones; only attaching a view to a
//! [`Matrix`](super::Matrix) checks it against the storage.

use std::ops::{Add, Neg, Sub};

/// Number of columns and rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Size {
    pub columns: isize,
    pub rows: isize,
}

impl Size {
    pub const ZERO: Self = Self::new(0, 0);

    pub const fn new(columns: isize, rows: isize) -> Self {
        Self { columns, rows }
    }

    /// Number of elements covered, zero for degenerate sizes.
    pub fn count(&self) -> usize {
        if self.columns <= 0 || self.rows <= 0 {
            0
        } else {
            self.columns as usize * self.rows as usize
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

/// A `(column, row)` coordinate relative to some origin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Offset {
    pub column: isize,
    pub row: isize,
}

impl Offset {
    pub const ZERO: Self = Self::new(0, 0);

    pub const fn new(column: isize, row: isize) -> Self {
        Self { column, row }
    }
}

impl Add for Offset {
    type Output = Offset;

    fn add(self, rhs: Offset) -> Offset {
        Offset::new(self.column + rhs.column, self.row + rhs.row)
    }
}

impl Sub for Offset {
    type Output = Offset;

    fn sub(self, rhs: Offset) -> Offset {
        Offset::new(self.column - rhs.column, self.row - rhs.row)
    }
}

impl Neg for Offset {
    type Output = Offset;

    fn neg(self) -> Offset {
        Offset::new(-self.column, -self.row)
    }
}

/// Per-side amounts used to grow (positive) or shrink (negative) a view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Edges {
    pub top: isize,
    pub right: isize,
    pub bottom: isize,
    pub left: isize,
}

impl Edges {
    pub const ZERO: Self = Self::new(0, 0, 0, 0);
    pub const ONE: Self = Self::new(1, 1, 1, 1);

    pub const fn new(top: isize, right: isize, bottom: isize, left: isize) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Same amount on every side.
    pub const fn uniform(amount: isize) -> Self {
        Self::new(amount, amount, amount, amount)
    }
}

impl Neg for Edges {
    type Output = Edges;

    fn neg(self) -> Edges {
        Edges::new(-self.top, -self.right, -self.bottom, -self.left)
    }
}

/// A rectangle `(offset, size)` expressed in storage coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct View {
    pub offset: Offset,
    pub size: Size,
}

impl View {
    pub const fn new(offset: Offset, size: Size) -> Self {
        Self { offset, size }
    }

    /// Full-extent view over a storage of `size`.
    pub const fn of_size(size: Size) -> Self {
        Self::new(Offset::ZERO, size)
    }

    /// Re-expresses `slice`, given relative to this view, in this view's
    /// coordinate space. The size of `slice` is kept as is.
    pub fn sliced_by(&self, slice: View) -> View {
        View::new(self.offset + slice.offset, slice.size)
    }

    pub fn offset_by(&self, delta: Offset) -> View {
        View::new(self.offset + delta, self.size)
    }

    pub fn offset_by_edges(&self, edges: Edges) -> View {
        View::new(
            Offset::new(self.offset.column - edges.left, self.offset.row - edges.top),
            Size::new(
                self.size.columns + edges.left + edges.right,
                self.size.rows + edges.top + edges.bottom,
            ),
        )
    }

    pub fn sliced_by_clamped(&self, slice: View, clamp_size: Size) -> View {
        self.sliced_by(slice).clamped(clamp_size)
    }

    pub fn offset_by_clamped(&self, delta: Offset, clamp_size: Size) -> View {
        self.offset_by(delta).clamped(clamp_size)
    }

    pub fn offset_by_edges_clamped(&self, edges: Edges, clamp_size: Size) -> View {
        self.offset_by_edges(edges).clamped(clamp_size)
    }

    /// Intersects this view with `[0, clamp_size)` on each axis independently.
    ///
    /// The resulting size is never negative; a view entirely outside the
    /// bounds collapses to an empty view on the nearest edge.
    pub fn clamped(&self, clamp_size: Size) -> View {
        let (column, columns) = clamp_axis(self.offset.column, self.size.columns, clamp_size.columns);
        let (row, rows) = clamp_axis(self.offset.row, self.size.rows, clamp_size.rows);
        View::new(Offset::new(column, row), Size::new(columns, rows))
    }

    /// Strict half-open overlap: views that only share an edge do not overlap.
    pub fn overlaps(&self, other: &View) -> bool {
        self.offset.column.max(other.offset.column)
            < self.end_column().min(other.end_column())
            && self.offset.row.max(other.offset.row) < self.end_row().min(other.end_row())
    }

    /// Whether `offset`, relative to this view, addresses one of its cells.
    pub fn contains_relative(&self, offset: Offset) -> bool {
        (0..self.size.columns).contains(&offset.column) && (0..self.size.rows).contains(&offset.row)
    }

    /// Whether this view is non-negative and fits entirely inside `bounds`.
    pub fn fits_within(&self, bounds: Size) -> bool {
        self.size.columns >= 0
            && self.size.rows >= 0
            && self.offset.column >= 0
            && self.offset.row >= 0
            && self.end_column() <= bounds.columns
            && self.end_row() <= bounds.rows
    }

    pub fn end_column(&self) -> isize {
        self.offset.column + self.size.columns
    }

    pub fn end_row(&self) -> isize {
        self.offset.row + self.size.rows
    }
}

fn clamp_axis(start: isize, len: isize, extent: isize) -> (isize, isize) {
    let extent = extent.max(0);
    let clamped_start = start.clamp(0, extent);
    let clamped_end = (start + len).clamp(0, extent);
    (clamped_start, (clamped_end - clamped_start).max(0))
}
