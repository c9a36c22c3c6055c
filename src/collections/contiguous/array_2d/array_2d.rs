use std::fmt::{self, Debug, Display, Formatter};
use std::iter::FusedIterator;
use std::mem;
use std::ops::Deref;

use crate::collections::contiguous::array::{resolve_index, DynamicArray};
use crate::util::error::{IndexOutOfRange, InvalidArgument};
use crate::util::fmt::{write_joined, write_list};

/// A grid with a fixed number of rows and columns, stored row-major in a single [`DynamicArray`].
///
/// Both row and column indices are signed in the same way as [`DynamicArray::get`].
pub struct Array2D<T> {
    pub(crate) elements: DynamicArray<T>,
    pub(crate) rows: usize,
    pub(crate) cols: usize,
}

impl<T> Array2D<T> {
    /// Builds a grid from a sequence of rows, which must all have the same length.
    ///
    /// # Errors
    /// Returns [`InvalidArgument`] if any row's length differs from the first row's.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::collections::contiguous::Array2D;
    /// let grid = Array2D::from_rows([[1, 2, 3], [4, 5, 6]]).unwrap();
    /// assert_eq!(grid.rows(), 2);
    /// assert_eq!(grid.cols(), 3);
    /// assert_eq!(grid.get(1, -1), Ok(&6));
    ///
    /// assert!(Array2D::from_rows([vec![1, 2], vec![3]]).is_err());
    /// ```
    pub fn from_rows<I, R>(rows: I) -> Result<Array2D<T>, InvalidArgument>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = T>,
    {
        let mut elements = DynamicArray::new();
        let mut cols = None;
        let mut row_count = 0;

        for row in rows {
            let before = elements.len();
            elements.extend(row);
            let width = elements.len() - before;

            match cols {
                None => cols = Some(width),
                Some(expected) if expected != width => {
                    return Err(InvalidArgument {
                        reason: "all rows of a 2-D array must have the same length",
                    });
                },
                Some(_) => {},
            }
            row_count += 1;
        }

        Ok(Array2D {
            elements,
            rows: row_count,
            cols: cols.unwrap_or(0),
        })
    }

    /// Creates a `rows` by `cols` grid where every cell holds `T::default()`.
    pub fn filled(rows: usize, cols: usize) -> Array2D<T>
    where
        T: Default,
    {
        Array2D {
            elements: DynamicArray::repeat_with(rows * cols, T::default),
            rows,
            cols,
        }
    }

    /// Returns the number of rows.
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Returns true if the grid has no cells.
    pub const fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns a view of the row at `row`.
    ///
    /// # Errors
    /// Returns [`IndexOutOfRange`] if `row` is outside of `[-rows, rows)`.
    pub fn row(&self, row: isize) -> Result<Row<'_, T>, IndexOutOfRange> {
        let index = resolve_index(row, self.rows)?;
        Ok(self.row_at(index))
    }

    /// Returns the cells of the row at `row` as a mutable slice.
    ///
    /// # Errors
    /// Returns [`IndexOutOfRange`] if `row` is outside of `[-rows, rows)`.
    pub fn row_mut(&mut self, row: isize) -> Result<&mut [T], IndexOutOfRange> {
        let index = resolve_index(row, self.rows)?;
        let start = index * self.cols;
        Ok(&mut self.elements.as_mut_slice()[start..start + self.cols])
    }

    /// Returns a reference to the cell at `row`, `col`.
    ///
    /// # Errors
    /// Returns [`IndexOutOfRange`] for the first index that is out of range.
    pub fn get(&self, row: isize, col: isize) -> Result<&T, IndexOutOfRange> {
        let row = self.row(row)?;
        let col = resolve_index(col, self.cols)?;
        Ok(&row.cells[col])
    }

    /// Returns a mutable reference to the cell at `row`, `col`.
    ///
    /// # Errors
    /// Returns [`IndexOutOfRange`] for the first index that is out of range.
    pub fn get_mut(&mut self, row: isize, col: isize) -> Result<&mut T, IndexOutOfRange> {
        let cols = self.cols;
        let row = self.row_mut(row)?;
        let col = resolve_index(col, cols)?;
        Ok(&mut row[col])
    }

    /// Replaces the cell at `row`, `col` with `value`, returning the previous value.
    ///
    /// # Errors
    /// Returns [`IndexOutOfRange`] for the first index that is out of range.
    pub fn set(&mut self, row: isize, col: isize, value: T) -> Result<T, IndexOutOfRange> {
        Ok(mem::replace(self.get_mut(row, col)?, value))
    }

    /// Returns an iterator over the rows, top to bottom. Reverse it for bottom to top.
    pub fn iter_rows(&self) -> Rows<'_, T> {
        Rows {
            grid: self,
            front: 0,
            back: self.rows,
        }
    }

    fn row_at(&self, index: usize) -> Row<'_, T> {
        let start = index * self.cols;
        Row {
            index,
            cells: &self.elements.as_slice()[start..start + self.cols],
        }
    }
}

/// A borrowed view of one row of an [`Array2D`]. Dereferences to the row's cells.
pub struct Row<'a, T> {
    index: usize,
    cells: &'a [T],
}

impl<'a, T> Row<'a, T> {
    /// Returns the position of this row within its grid.
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Returns a reference to the cell at `col`.
    ///
    /// # Errors
    /// Returns [`IndexOutOfRange`] if `col` is outside of `[-cols, cols)`.
    pub fn get(&self, col: isize) -> Result<&'a T, IndexOutOfRange> {
        let col = resolve_index(col, self.cells.len())?;
        Ok(&self.cells[col])
    }
}

impl<T> Deref for Row<'_, T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.cells
    }
}

impl<T: Display> Display for Row<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_list(f, self.cells)
    }
}

impl<T: Debug> Debug for Row<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Row {}: {:?}", self.index, self.cells)
    }
}

/// An iterator over the rows of an [`Array2D`]. See [`Array2D::iter_rows`].
pub struct Rows<'a, T> {
    grid: &'a Array2D<T>,
    front: usize,
    back: usize,
}

impl<'a, T> Iterator for Rows<'a, T> {
    type Item = Row<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let row = self.grid.row_at(self.front);
        self.front += 1;
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for Rows<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(self.grid.row_at(self.back))
    }
}

impl<T> ExactSizeIterator for Rows<'_, T> {}

impl<T> FusedIterator for Rows<'_, T> {}

impl<T> Clone for Rows<'_, T> {
    fn clone(&self) -> Self {
        Rows {
            grid: self.grid,
            front: self.front,
            back: self.back,
        }
    }
}

impl<T: Clone> Clone for Array2D<T> {
    fn clone(&self) -> Self {
        Array2D {
            elements: self.elements.clone(),
            rows: self.rows,
            cols: self.cols,
        }
    }
}

impl<T: PartialEq> PartialEq for Array2D<T> {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows && self.cols == other.cols && self.elements == other.elements
    }
}

impl<T: Eq> Eq for Array2D<T> {}

impl<T: Display> Display for Array2D<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_joined(f, "[", self.iter_rows(), ", ", "]")
    }
}

impl<T: Debug> Debug for Array2D<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Array2D")
            .field("rows", &self.rows)
            .field("cols", &self.cols)
            .field("contents", &self.iter_rows().map(|row| row.cells).collect::<Vec<_>>())
            .finish()
    }
}
