//! Column views over flat numeric arrays.
//!
//! A flat array such as `[x0, y0, m0, x1, y1, m1, ...]` is a table with `stride` columns. An
//! [`OrdinateList`] exposes a single column of that table (every `stride`-th value starting at
//! `offset`) over a window of rows, optionally walking the rows backwards. No data is copied.

use crate::error::SdoTypesError;

/// View of one column of a flat array.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrdinateList<'a, T = f64> {
    array: &'a [T],
    offset: usize,
    stride: usize,
    first: usize,
    size: usize,
    descending: bool,
}

/// Column view used for non-spatial per-coordinate values (measures).
pub type AttributeList<'a> = OrdinateList<'a, f64>;

impl<'a, T: Copy> OrdinateList<'a, T> {
    /// Creates a view over the whole column `offset` of a table with `stride` columns.
    pub fn new(array: &'a [T], offset: usize, stride: usize) -> Result<Self, SdoTypesError> {
        let rows = Self::rows(array, offset, stride)?;
        Self::with_range(array, offset, stride, 0, rows)
    }

    /// Creates a view over rows `[start, end)` of the column.
    ///
    /// If `start > end` the view is descending: it yields rows `start - 1` down to `end`.
    pub fn with_range(
        array: &'a [T],
        offset: usize,
        stride: usize,
        start: usize,
        end: usize,
    ) -> Result<Self, SdoTypesError> {
        let rows = Self::rows(array, offset, stride)?;
        let (first, size, descending) = if start <= end {
            (start, end - start, false)
        } else {
            (start - 1, start - end, true)
        };

        let last_row = start.max(end);
        if last_row > rows {
            return Err(SdoTypesError::OutOfBounds {
                index: last_row,
                size: rows,
            });
        }

        Ok(Self {
            array,
            offset,
            stride,
            first,
            size,
            descending,
        })
    }

    fn rows(array: &[T], offset: usize, stride: usize) -> Result<usize, SdoTypesError> {
        if stride == 0 || array.len() % stride != 0 {
            return Err(SdoTypesError::DimensionMismatch {
                len: array.len(),
                stride,
            });
        }

        if offset >= stride {
            return Err(SdoTypesError::InvalidOffset { offset, stride });
        }

        Ok(array.len() / stride)
    }

    /// Number of values in the view.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns true if the view has no values.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the value at `index`.
    pub fn get(&self, index: usize) -> Result<T, SdoTypesError> {
        if index >= self.size {
            return Err(SdoTypesError::OutOfBounds {
                index,
                size: self.size,
            });
        }

        let row = if self.descending {
            self.first - index
        } else {
            self.first + index
        };

        Ok(self.array[row * self.stride + self.offset])
    }

    /// Iterates over the values of the view.
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        (0..self.size).filter_map(|i| self.get(i).ok())
    }

    /// Copies the values of the view into a new vector.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().collect()
    }

    /// Returns the same window walked in the opposite direction.
    pub fn reversed(&self) -> Self {
        if self.size == 0 {
            return *self;
        }

        let first = if self.descending {
            self.first + 1 - self.size
        } else {
            self.first + self.size - 1
        };

        Self {
            first,
            descending: !self.descending,
            ..*self
        }
    }
}

impl<T: Copy + Into<f64>> OrdinateList<'_, T> {
    /// Returns the value at `index` converted to `f64`.
    pub fn get_double(&self, index: usize) -> Result<f64, SdoTypesError> {
        self.get(index).map(Into::into)
    }
}
