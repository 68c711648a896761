//! Dense matrix stored in row-major order.
//!
//! Entries are arbitrary ring elements. Shapes with zero rows or zero
//! columns are legal; an empty differential in a resolution is exactly
//! such a matrix.

use std::fmt;
use std::ops::{Index, IndexMut};

use rayon::prelude::*;

use involute_rings::traits::{Field, Ring};

/// Dense matrix stored in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenseMatrix<R> {
    /// Matrix entries in row-major order.
    data: Vec<R>,
    /// Number of rows.
    num_rows: usize,
    /// Number of columns.
    num_cols: usize,
}

impl<R: Ring> DenseMatrix<R> {
    /// Creates a new matrix filled with zeros.
    #[must_use]
    pub fn zeros(num_rows: usize, num_cols: usize) -> Self {
        Self {
            data: vec![R::zero(); num_rows * num_cols],
            num_rows,
            num_cols,
        }
    }

    /// Creates a matrix from a list of rows.
    ///
    /// # Panics
    ///
    /// Panics if the rows have different lengths.
    #[must_use]
    pub fn from_rows(rows: Vec<Vec<R>>) -> Self {
        let num_rows = rows.len();
        let num_cols = rows.first().map_or(0, Vec::len);
        let data: Vec<R> = rows.into_iter().flatten().collect();
        assert_eq!(data.len(), num_rows * num_cols, "ragged rows");
        Self {
            data,
            num_rows,
            num_cols,
        }
    }

    /// Creates a single-row matrix.
    #[must_use]
    pub fn row_vector(entries: Vec<R>) -> Self {
        let num_cols = entries.len();
        Self {
            data: entries,
            num_rows: 1,
            num_cols,
        }
    }

    /// Creates an identity matrix.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m[(i, i)] = R::one();
        }
        m
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Returns true if every entry is zero (vacuously for empty shapes).
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(Ring::is_zero)
    }

    /// Returns a reference to the entry at (row, col).
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&R> {
        if row < self.num_rows && col < self.num_cols {
            Some(&self.data[row * self.num_cols + col])
        } else {
            None
        }
    }

    /// Returns a mutable reference to the entry at (row, col).
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut R> {
        if row < self.num_rows && col < self.num_cols {
            Some(&mut self.data[row * self.num_cols + col])
        } else {
            None
        }
    }

    /// Returns a slice of the specified row.
    #[must_use]
    pub fn row(&self, row: usize) -> &[R] {
        let start = row * self.num_cols;
        &self.data[start..start + self.num_cols]
    }

    /// Returns a column as a vector.
    #[must_use]
    pub fn col(&self, col: usize) -> Vec<R> {
        (0..self.num_rows)
            .map(|row| self[(row, col)].clone())
            .collect()
    }

    /// Iterates over `(row, col, entry)` in row-major order.
    pub fn entries(&self) -> impl Iterator<Item = (usize, usize, &R)> {
        let cols = self.num_cols.max(1);
        self.data
            .iter()
            .enumerate()
            .map(move |(i, v)| (i / cols, i % cols, v))
    }

    /// Removes a row, shifting later rows up.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    pub fn delete_row(&mut self, row: usize) {
        assert!(row < self.num_rows, "row {row} out of bounds");
        let start = row * self.num_cols;
        self.data.drain(start..start + self.num_cols);
        self.num_rows -= 1;
    }

    /// Removes a column, shifting later columns left.
    ///
    /// # Panics
    ///
    /// Panics if `col` is out of bounds.
    pub fn delete_col(&mut self, col: usize) {
        assert!(col < self.num_cols, "column {col} out of bounds");
        let cols = self.num_cols;
        let mut index = 0;
        self.data.retain(|_| {
            let keep = index % cols != col;
            index += 1;
            keep
        });
        self.num_cols -= 1;
    }

    /// Matrix-matrix multiply: C = A * B.
    ///
    /// # Panics
    ///
    /// Panics if the inner dimensions differ.
    #[must_use]
    pub fn mm(&self, other: &Self) -> Self {
        assert_eq!(self.num_cols, other.num_rows);

        let mut result = Self::zeros(self.num_rows, other.num_cols);
        for i in 0..self.num_rows {
            for j in 0..other.num_cols {
                result[(i, j)] = self.dot_row_col(other, i, j);
            }
        }
        result
    }

    fn dot_row_col(&self, other: &Self, i: usize, j: usize) -> R {
        let mut sum = R::zero();
        for k in 0..self.num_cols {
            let a = &self[(i, k)];
            let b = &other[(k, j)];
            if !a.is_zero() && !b.is_zero() {
                sum = sum + a.clone() * b.clone();
            }
        }
        sum
    }

    /// Returns the transpose of the matrix.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut result = Self::zeros(self.num_cols, self.num_rows);
        for i in 0..self.num_rows {
            for j in 0..self.num_cols {
                result[(j, i)] = self[(i, j)].clone();
            }
        }
        result
    }

    /// Applies `f` to every entry.
    #[must_use]
    pub fn map<S: Ring>(&self, f: impl Fn(&R) -> S) -> DenseMatrix<S> {
        DenseMatrix {
            data: self.data.iter().map(f).collect(),
            num_rows: self.num_rows,
            num_cols: self.num_cols,
        }
    }

    /// Swaps two rows in-place.
    pub fn swap_rows(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        let i_start = i * self.num_cols;
        let j_start = j * self.num_cols;
        for k in 0..self.num_cols {
            self.data.swap(i_start + k, j_start + k);
        }
    }

    /// Adds a scaled row to another: row[target] += scale * row[source].
    pub fn add_scaled_row(&mut self, target: usize, source: usize, scale: &R) {
        if scale.is_zero() {
            return;
        }
        for k in 0..self.num_cols {
            let src = &self[(source, k)];
            if src.is_zero() {
                continue;
            }
            let val = src.clone() * scale.clone();
            self[(target, k)] = self[(target, k)].clone() + val;
        }
    }

    /// Scales a row by a scalar.
    pub fn scale_row(&mut self, row: usize, scale: &R) {
        for k in 0..self.num_cols {
            self[(row, k)] = self[(row, k)].clone() * scale.clone();
        }
    }
}

impl<R: Ring + Send + Sync> DenseMatrix<R> {
    /// Matrix-matrix multiply (parallel over rows): C = A * B.
    ///
    /// # Panics
    ///
    /// Panics if the inner dimensions differ.
    #[must_use]
    pub fn mm_parallel(&self, other: &Self) -> Self {
        assert_eq!(self.num_cols, other.num_rows);

        let data: Vec<R> = (0..self.num_rows)
            .into_par_iter()
            .flat_map_iter(|i| (0..other.num_cols).map(move |j| self.dot_row_col(other, i, j)))
            .collect();

        Self {
            data,
            num_rows: self.num_rows,
            num_cols: other.num_cols,
        }
    }
}

impl<F: Field> DenseMatrix<F> {
    /// Gaussian elimination to row-echelon form.
    ///
    /// Returns (row-echelon form, rank). Pivots are scaled to one.
    #[must_use]
    pub fn row_echelon(&self) -> (Self, usize) {
        let mut m = self.clone();
        let mut pivot_row = 0;
        let mut pivot_col = 0;

        while pivot_row < m.num_rows && pivot_col < m.num_cols {
            let Some(found) = (pivot_row..m.num_rows).find(|&r| !m[(r, pivot_col)].is_zero())
            else {
                pivot_col += 1;
                continue;
            };

            m.swap_rows(pivot_row, found);

            if let Some(inv) = m[(pivot_row, pivot_col)].inv() {
                m.scale_row(pivot_row, &inv);
            }

            for row in pivot_row + 1..m.num_rows {
                if !m[(row, pivot_col)].is_zero() {
                    let factor = -m[(row, pivot_col)].clone();
                    m.add_scaled_row(row, pivot_row, &factor);
                }
            }

            pivot_row += 1;
            pivot_col += 1;
        }

        (m, pivot_row)
    }

    /// Computes the rank over the field.
    #[must_use]
    pub fn rank(&self) -> usize {
        self.row_echelon().1
    }
}

impl<R> Index<(usize, usize)> for DenseMatrix<R> {
    type Output = R;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.data[row * self.num_cols + col]
    }
}

impl<R> IndexMut<(usize, usize)> for DenseMatrix<R> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.data[row * self.num_cols + col]
    }
}

impl<R: Ring> fmt::Display for DenseMatrix<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.num_rows {
            write!(f, "[")?;
            for (k, v) in self.row(row).iter().enumerate() {
                if k > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{v}")?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}
