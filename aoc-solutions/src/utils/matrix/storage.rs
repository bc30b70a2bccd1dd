//! Flat row-major element buffer shared by every matrix cut from it.

use super::MatrixError;
use super::geometry::{Offset, Size};

#[derive(Debug)]
pub(crate) struct Storage<T> {
    size: Size,
    data: Box<[T]>,
}

impl<T> Storage<T> {
    pub(crate) fn filled(size: Size, value: T) -> Self
    where
        T: Clone,
    {
        Self {
            size,
            data: vec![value; size.count()].into_boxed_slice(),
        }
    }

    pub(crate) fn from_elements<I>(size: Size, elements: I) -> Result<Self, MatrixError>
    where
        I: IntoIterator<Item = T>,
    {
        if size.columns < 0 || size.rows < 0 {
            return Err(MatrixError::InvalidSourceData(format!(
                "negative size {}x{}",
                size.columns, size.rows
            )));
        }
        let data: Box<[T]> = elements.into_iter().collect();
        if data.len() != size.count() {
            return Err(MatrixError::InvalidSourceData(format!(
                "{} elements supplied for a {}x{} matrix",
                data.len(),
                size.columns,
                size.rows
            )));
        }
        Ok(Self { size, data })
    }

    pub(crate) fn size(&self) -> Size {
        self.size
    }

    pub(crate) fn count(&self) -> usize {
        self.data.len()
    }

    /// Best-effort lookup: `None` when the flattened index falls outside the buffer.
    ///
    /// Only the flat index is checked, so a column past the row width reads
    /// into the next row.
    pub(crate) fn at(&self, offset: Offset) -> Option<&T> {
        let index = offset.row * self.size.columns + offset.column;
        usize::try_from(index).ok().and_then(|i| self.data.get(i))
    }

    pub(crate) fn get(&self, index: usize) -> &T {
        &self.data[index]
    }
}
