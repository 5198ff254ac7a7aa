//! Dense row-major 2-D container.
//!
//! [`Matrix`] is the exchange format between the graph store and the canonical
//! coloring engine: the store exports its adjacency relation as a 0/1 matrix or a
//! signed incidence matrix, and the coloring engine consumes and produces matrices
//! without ever touching the adjacency structure itself.
//!
//! Only the operations those two components need are provided: indexed access,
//! row and column extraction, clearing whole rows or columns, transposition,
//! predicate search, and canonical row/column sorting used to compare two
//! descriptions independent of node order.
//!
//! # Example
//!
//! ```rust
//! use canongraph::utils::Matrix;
//!
//! let mut m = Matrix::<i32>::zeroed(2, 2);
//! m[(0, 1)] = 1;
//! m[(1, 0)] = -1;
//!
//! assert_eq!(m.row(0), &[0, 1]);
//! assert_eq!(m.col(0), vec![0, -1]);
//! assert_eq!(m.transpose()[(1, 0)], 1);
//! ```

use std::{
    fmt,
    ops::{Index, IndexMut},
};

use crate::{Error, Result};

/// A dense matrix stored in row-major order.
///
/// Equality compares shape and every element, so two matrices of different
/// dimensions are never equal even when both are entirely zero.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Matrix<T> {
    /// Row-major element storage, `rows * cols` long
    data: Vec<T>,
    /// Number of rows
    rows: usize,
    /// Number of columns
    cols: usize,
}

impl<T: Clone + Default> Matrix<T> {
    /// Creates a `rows` x `cols` matrix filled with `T::default()`.
    #[must_use]
    pub fn zeroed(rows: usize, cols: usize) -> Self {
        Matrix {
            data: vec![T::default(); rows * cols],
            rows,
            cols,
        }
    }

    /// Builds a matrix from a vector of rows.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RaggedMatrix`] if the rows do not all have the same length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let row_count = rows.len();
        let cols = rows.first().map_or(0, Vec::len);

        let mut data = Vec::with_capacity(row_count * cols);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != cols {
                return Err(Error::RaggedMatrix {
                    row,
                    expected: cols,
                    found: values.len(),
                });
            }
            data.extend(values);
        }

        Ok(Matrix {
            data,
            rows: row_count,
            cols,
        })
    }

    /// Returns the transposed matrix.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut result = Matrix::zeroed(self.cols, self.rows);
        for r in 0..self.rows {
            for c in 0..self.cols {
                result[(c, r)] = self[(r, c)].clone();
            }
        }
        result
    }

    /// Resets every element of row `r` to `T::default()`.
    ///
    /// # Panics
    ///
    /// Panics if `r` is out of bounds.
    pub fn clear_row(&mut self, r: usize) {
        assert!(r < self.rows, "row {r} out of bounds for {} rows", self.rows);
        let start = r * self.cols;
        self.data[start..start + self.cols].fill(T::default());
    }

    /// Resets every element of column `c` to `T::default()`.
    ///
    /// # Panics
    ///
    /// Panics if `c` is out of bounds.
    pub fn clear_col(&mut self, c: usize) {
        assert!(c < self.cols, "column {c} out of bounds for {} columns", self.cols);
        for r in 0..self.rows {
            self.data[r * self.cols + c] = T::default();
        }
    }

    /// Returns a copy of column `c`.
    ///
    /// # Panics
    ///
    /// Panics if `c` is out of bounds.
    #[must_use]
    pub fn col(&self, c: usize) -> Vec<T> {
        assert!(c < self.cols, "column {c} out of bounds for {} columns", self.cols);
        (0..self.rows).map(|r| self[(r, c)].clone()).collect()
    }
}

impl<T> Matrix<T> {
    /// Returns the number of rows.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Returns `true` if the matrix has as many rows as columns.
    #[must_use]
    pub const fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Returns the element at `(r, c)`, or `None` when out of bounds.
    #[must_use]
    pub fn get(&self, r: usize, c: usize) -> Option<&T> {
        if r < self.rows && c < self.cols {
            self.data.get(r * self.cols + c)
        } else {
            None
        }
    }

    /// Returns row `r` as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `r` is out of bounds.
    #[must_use]
    pub fn row(&self, r: usize) -> &[T] {
        assert!(r < self.rows, "row {r} out of bounds for {} rows", self.rows);
        let start = r * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Iterates over the rows as slices, top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..self.rows).map(move |r| self.row(r))
    }

    /// Returns the indices of every row whose element in column `c` satisfies `predicate`.
    ///
    /// # Panics
    ///
    /// Panics if `c` is out of bounds.
    pub fn find_in_col<F>(&self, c: usize, predicate: F) -> Vec<usize>
    where
        F: Fn(&T) -> bool,
    {
        assert!(c < self.cols, "column {c} out of bounds for {} columns", self.cols);
        (0..self.rows)
            .filter(|&r| predicate(&self.data[r * self.cols + c]))
            .collect()
    }
}

impl<T: PartialEq> Matrix<T> {
    /// Returns `true` if every element equals `value`.
    ///
    /// An empty matrix trivially satisfies this.
    #[must_use]
    pub fn is_all(&self, value: &T) -> bool {
        self.data.iter().all(|x| x == value)
    }
}

impl<T: Clone + Default + Ord> Matrix<T> {
    /// Sorts the rows lexicographically.
    ///
    /// Returns the permutation (`indices[k]` is the original row now at position `k`)
    /// together with the sorted matrix. The sort is stable, so identical rows keep
    /// their relative order.
    #[must_use]
    pub fn row_sorted_with_indices(&self) -> (Vec<usize>, Matrix<T>) {
        let mut indices: Vec<usize> = (0..self.rows).collect();
        indices.sort_by(|&a, &b| self.row(a).cmp(self.row(b)));

        let mut data = Vec::with_capacity(self.data.len());
        for &r in &indices {
            data.extend_from_slice(self.row(r));
        }

        (
            indices,
            Matrix {
                data,
                rows: self.rows,
                cols: self.cols,
            },
        )
    }

    /// Sorts the columns lexicographically (treating each column as a sequence read top-down).
    ///
    /// Returns the column permutation and the sorted matrix.
    #[must_use]
    pub fn col_sorted_with_indices(&self) -> (Vec<usize>, Matrix<T>) {
        let (indices, sorted) = self.transpose().row_sorted_with_indices();
        (indices, sorted.transpose())
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (r, c): (usize, usize)) -> &Self::Output {
        assert!(
            r < self.rows && c < self.cols,
            "index ({r}, {c}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
        &self.data[r * self.cols + c]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (r, c): (usize, usize)) -> &mut Self::Output {
        assert!(
            r < self.rows && c < self.cols,
            "index ({r}, {c}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
        &mut self.data[r * self.cols + c]
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.iter_rows() {
            let mut first = true;
            for value in row {
                if !first {
                    write!(f, " ")?;
                }
                write!(f, "{value}")?;
                first = false;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<T: fmt::Debug> fmt::Debug for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter_rows()).finish()
    }
}
