//! Square weight matrix with capacity doubling.

use tracing::debug;

/// Cell value meaning "no edge". Never a legal traversal cost.
pub const NO_EDGE: f64 = f64::INFINITY;

/// Row-major `dim × dim` table of edge weights.
///
/// The matrix knows nothing about vertices; the owning network keeps the
/// dimension at or above its registry size and only ever touches the
/// `live × live` corner.
#[derive(Debug, Clone, PartialEq)]
pub struct AdjacencyMatrix {
    dim: usize,
    cells: Vec<f64>,
}

impl AdjacencyMatrix {
    pub fn new(dim: usize) -> Self {
        Self {
            dim,
            cells: vec![NO_EDGE; dim * dim],
        }
    }

    pub fn dimension(&self) -> usize {
        self.dim
    }

    /// Raw cell value, `NO_EDGE` included.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.cells[row * self.dim + col]
    }

    /// Weight of the edge between `row` and `col`, if there is one.
    pub fn weight(&self, row: usize, col: usize) -> Option<f64> {
        let w = self.get(row, col);
        (w != NO_EDGE).then_some(w)
    }

    /// Write both `[a][b]` and `[b][a]`.
    pub(crate) fn set_symmetric(&mut self, a: usize, b: usize, weight: f64) {
        self.set(a, b, weight);
        self.set(b, a, weight);
    }

    fn set(&mut self, row: usize, col: usize, weight: f64) {
        self.cells[row * self.dim + col] = weight;
    }

    /// Double the dimension (at least to 1), keeping every stored weight at
    /// its original `(row, col)`.
    pub(crate) fn grow(&mut self) {
        let old = self.dim;
        let new = (old * 2).max(1);
        let mut cells = vec![NO_EDGE; new * new];
        for row in 0..old {
            let src = &self.cells[row * old..(row + 1) * old];
            cells[row * new..row * new + old].copy_from_slice(src);
        }
        debug!(from = old, to = new, "growing adjacency matrix");
        self.dim = new;
        self.cells = cells;
    }

    /// Delete row and column `index` from the `live × live` corner.
    ///
    /// Rows and columns after `index` move down by one; the vacated last
    /// row and column are reset to `NO_EDGE`. Returns `false`, leaving the
    /// matrix untouched, when `index` is outside the live corner or the
    /// corner does not fit the matrix.
    pub(crate) fn remove_index(&mut self, index: usize, live: usize) -> bool {
        if index >= live || live > self.dim {
            return false;
        }
        let last = live - 1;
        for row in index..last {
            for col in 0..live {
                let w = self.get(row + 1, col);
                self.set(row, col, w);
            }
        }
        for row in 0..last {
            for col in index..last {
                let w = self.get(row, col + 1);
                self.set(row, col, w);
            }
        }
        for k in 0..live {
            self.set(last, k, NO_EDGE);
            self.set(k, last, NO_EDGE);
        }
        true
    }

    /// `(column, weight)` for every edge of `row` within the live corner,
    /// in ascending column order.
    pub fn neighbors(&self, row: usize, live: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        (0..live).filter_map(move |col| self.weight(row, col).map(|w| (col, w)))
    }
}
