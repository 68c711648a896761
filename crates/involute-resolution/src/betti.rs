//! Graded Betti tables.

use std::fmt;

/// A graded Betti table of `P/I`, laid out the Macaulay2 way: column `i`
/// is the homological degree, row `r` holds `beta_{i, i + r}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct BettiDiagram {
    rows: Vec<Vec<usize>>,
}

impl BettiDiagram {
    /// A table from explicit rows; rows are padded to equal width and
    /// trailing zero rows and columns are trimmed.
    #[must_use]
    pub fn from_rows(rows: Vec<Vec<usize>>) -> Self {
        let mut diagram = Self { rows };
        diagram.normalize();
        diagram
    }

    /// The table of `P/I` from graded Betti numbers `beta_{i,j}` of `I`.
    ///
    /// The free summand `P` of `P/I` in degree zero is added; entries that
    /// would land in a negative row (only the unit ideal produces them) are
    /// dropped.
    #[must_use]
    pub fn from_ideal_betti(entries: impl IntoIterator<Item = ((usize, u32), usize)>) -> Self {
        let mut rows = vec![vec![1]];
        for ((i, j), value) in entries {
            if value == 0 {
                continue;
            }
            let col = i + 1;
            let Some(row) = (j as usize).checked_sub(col) else {
                continue;
            };
            if rows.len() <= row {
                rows.resize(row + 1, Vec::new());
            }
            if rows[row].len() <= col {
                rows[row].resize(col + 1, 0);
            }
            rows[row][col] += value;
        }
        Self::from_rows(rows)
    }

    fn normalize(&mut self) {
        let width = self.rows.iter().map(Vec::len).max().unwrap_or(0);
        for row in &mut self.rows {
            row.resize(width, 0);
        }
        while self.rows.last().is_some_and(|r| r.iter().all(|&v| v == 0)) {
            self.rows.pop();
        }
        let used = self
            .rows
            .iter()
            .map(|r| r.iter().rposition(|&v| v != 0).map_or(0, |p| p + 1))
            .max()
            .unwrap_or(0);
        for row in &mut self.rows {
            row.truncate(used);
        }
    }

    /// `beta_{col, col + row}`, zero outside the table.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> usize {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(0)
    }

    /// The raw rows.
    #[must_use]
    pub fn rows(&self) -> &[Vec<usize>] {
        &self.rows
    }

    /// Number of rows.
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    #[must_use]
    pub fn num_cols(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Total Betti numbers per homological degree.
    #[must_use]
    pub fn totals(&self) -> Vec<usize> {
        (0..self.num_cols())
            .map(|c| self.rows.iter().map(|r| r[c]).sum())
            .collect()
    }

    /// Length of the minimal resolution of `P/I`.
    #[must_use]
    pub fn projective_dimension(&self) -> usize {
        self.num_cols().saturating_sub(1)
    }

    /// Castelnuovo-Mumford regularity of `P/I`.
    #[must_use]
    pub fn regularity(&self) -> usize {
        self.num_rows().saturating_sub(1)
    }

    /// True if every entry of `self` is at most the matching entry of `other`.
    #[must_use]
    pub fn is_bounded_by(&self, other: &Self) -> bool {
        self.rows
            .iter()
            .enumerate()
            .all(|(r, row)| row.iter().enumerate().all(|(c, &v)| v <= other.get(r, c)))
    }
}

impl fmt::Display for BettiDiagram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let totals = self.totals();
        let width = totals
            .iter()
            .map(|t| t.to_string().len())
            .max()
            .unwrap_or(1);
        let label = self.num_rows().to_string().len().max(5);

        write!(f, "{:>label$} ", "")?;
        for c in 0..self.num_cols() {
            write!(f, " {c:>width$}")?;
        }
        writeln!(f)?;
        write!(f, "{:>label$}:", "total")?;
        for t in &totals {
            write!(f, " {t:>width$}")?;
        }
        writeln!(f)?;
        for (r, row) in self.rows.iter().enumerate() {
            write!(f, "{r:>label$}:")?;
            for v in row {
                if *v == 0 {
                    write!(f, " {:>width$}", ".")?;
                } else {
                    write!(f, " {v:>width$}")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
