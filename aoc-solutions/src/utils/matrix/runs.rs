//! Extraction of horizontal runs of matching elements.

use super::{Matrix, Offset, Size, View};

impl<T> Matrix<T> {
    /// Maximal horizontal runs of elements satisfying `predicate`.
    ///
    /// Rows are scanned top to bottom and each row left to right; runs never
    /// span rows. The returned views are relative to this matrix, ready to be
    /// passed to [`slice`](Matrix::slice).
    pub fn continuous_views_satisfying<P>(&self, mut predicate: P) -> Vec<View>
    where
        P: FnMut(&T) -> bool,
    {
        let mut views = Vec::new();
        for (row_index, row) in (0..).zip(self.rows()) {
            let mut run_start: Option<isize> = None;
            for (column, element) in (0..).zip(row.iter()) {
                match (predicate(element), run_start) {
                    (true, None) => run_start = Some(column),
                    (false, Some(start)) => {
                        views.push(run_view(start, column, row_index));
                        run_start = None;
                    }
                    _ => {}
                }
            }
            if let Some(start) = run_start {
                views.push(run_view(start, row.size().columns, row_index));
            }
        }
        views
    }

    /// Same runs as [`continuous_views_satisfying`](Self::continuous_views_satisfying),
    /// as matrices sharing this matrix's storage.
    pub fn continuous_matrices_satisfying<P>(&self, predicate: P) -> Vec<Matrix<T>>
    where
        P: FnMut(&T) -> bool,
    {
        self.continuous_views_satisfying(predicate)
            .into_iter()
            .map(|view| self.slice(view))
            .collect()
    }
}

fn run_view(start: isize, end: isize, row: isize) -> View {
    View::new(Offset::new(start, row), Size::new(end - start, 1))
}
