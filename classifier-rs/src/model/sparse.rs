//! Row-major sparse feature matrix

/// One sparse row: `(column, value)` pairs sorted by column
pub type SparseRow = Vec<(usize, f64)>;

/// Sparse matrix with a fixed column count
#[derive(Debug, Clone, PartialEq)]
pub struct SparseMatrix {
    n_cols: usize,
    rows: Vec<SparseRow>,
}

impl SparseMatrix {
    /// Create an empty matrix with `n_cols` columns
    pub fn new(n_cols: usize) -> Self {
        Self {
            n_cols,
            rows: Vec::new(),
        }
    }

    /// Append a row. Entries are sorted by column; zeros are dropped.
    pub fn push_row(&mut self, mut row: SparseRow) {
        row.retain(|&(col, value)| col < self.n_cols && value != 0.0);
        row.sort_by_key(|&(col, _)| col);
        self.rows.push(row);
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    pub fn rows(&self) -> &[SparseRow] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&SparseRow> {
        self.rows.get(index)
    }

    /// Dense value lookup
    #[cfg(test)]
    pub(crate) fn get(&self, row: usize, col: usize) -> f64 {
        self.rows
            .get(row)
            .and_then(|r| r.binary_search_by_key(&col, |&(c, _)| c).ok().map(|i| r[i].1))
            .unwrap_or(0.0)
    }
}
