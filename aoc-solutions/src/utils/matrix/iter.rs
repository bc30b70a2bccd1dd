//! Iterators over matrix elements, rows and columns.

use std::iter::FusedIterator;
use std::ops::Range;

use super::{Matrix, MatrixIndex};

/// Row-major iterator over the elements of a matrix view.
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    matrix: &'a Matrix<T>,
    next: MatrixIndex,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(super) fn new(matrix: &'a Matrix<T>) -> Self {
        Self {
            matrix,
            next: matrix.start_index(),
            remaining: matrix.len(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let element = &self.matrix[self.next];
        self.remaining -= 1;
        if self.remaining > 0 {
            self.next = self.next.advanced_by(1);
        }
        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

macro_rules! line_iterator {
    ($(#[$doc:meta])* $name:ident, $axis:ident, $make:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone)]
        pub struct $name<'a, T> {
            matrix: &'a Matrix<T>,
            range: Range<isize>,
        }

        impl<'a, T> $name<'a, T> {
            pub(super) fn new(matrix: &'a Matrix<T>) -> Self {
                Self {
                    matrix,
                    range: 0..matrix.size().$axis,
                }
            }
        }

        impl<T> Iterator for $name<'_, T> {
            type Item = Matrix<T>;

            fn next(&mut self) -> Option<Matrix<T>> {
                self.range.next().map(|i| self.matrix.$make(i))
            }

            fn size_hint(&self) -> (usize, Option<usize>) {
                self.range.size_hint()
            }

            fn nth(&mut self, n: usize) -> Option<Matrix<T>> {
                self.range.nth(n).map(|i| self.matrix.$make(i))
            }
        }

        impl<T> DoubleEndedIterator for $name<'_, T> {
            fn next_back(&mut self) -> Option<Matrix<T>> {
                self.range.next_back().map(|i| self.matrix.$make(i))
            }
        }

        impl<T> ExactSizeIterator for $name<'_, T> {}

        impl<T> FusedIterator for $name<'_, T> {}
    };
}

line_iterator!(
    /// Single-row matrices of a view, produced on demand.
    Rows,
    rows,
    row
);

line_iterator!(
    /// Single-column matrices of a view, produced on demand.
    Columns,
    columns,
    column
);
