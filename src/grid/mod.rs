//! Input grid abstraction.
//!
//! The renderer never encodes data itself. It consumes any square boolean matrix exposed through
//! [`QrGrid`], trusting that the three 7×7 finder blocks sit at `(0,0)`, `(0,N-7)` and `(N-7,0)`.

#[cfg(feature = "encode")]
pub(crate) mod encode;

use crate::foundation::error::{ShieldError, ShieldResult};

/// Side length of a finder block in modules.
pub const FINDER_SIZE: usize = 7;

/// Read-only access to an encoded QR symbol.
pub trait QrGrid {
    /// Number of modules per side.
    fn size(&self) -> usize;

    /// Module state at `(row, col)`, row-major and 0-indexed. Out-of-range reads are light.
    fn get(&self, row: usize, col: usize) -> bool;
}

/// Owned square module matrix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModuleGrid {
    size: usize,
    cells: Vec<bool>,
}

impl ModuleGrid {
    /// All-light grid with `size` modules per side.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![false; size * size],
        }
    }

    /// Build a grid by evaluating `f(row, col)` for every module.
    pub fn from_fn(size: usize, mut f: impl FnMut(usize, usize) -> bool) -> Self {
        let mut cells = Vec::with_capacity(size * size);
        for row in 0..size {
            for col in 0..size {
                cells.push(f(row, col));
            }
        }
        Self { size, cells }
    }

    /// Parse a text picture where `#` (or `1`) is dark and anything else is light.
    ///
    /// Every row must have as many characters as there are rows.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> ShieldResult<Self> {
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let n = row.chars().count();
            if n != size {
                return Err(ShieldError::config(format!(
                    "grid row {i} has {n} modules, expected {size}"
                )));
            }
            cells.extend(row.chars().map(|c| c == '#' || c == '1'));
        }
        Ok(Self { size, cells })
    }

    /// Set a single module. Out-of-range writes are ignored.
    pub fn set(&mut self, row: usize, col: usize, dark: bool) {
        if row < self.size && col < self.size {
            self.cells[row * self.size + col] = dark;
        }
    }

    /// Copy any [`QrGrid`] into an owned matrix.
    pub fn from_grid(grid: &impl QrGrid) -> Self {
        Self::from_fn(grid.size(), |r, c| grid.get(r, c))
    }
}

impl QrGrid for ModuleGrid {
    fn size(&self) -> usize {
        self.size
    }

    fn get(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size && self.cells[row * self.size + col]
    }
}

impl<G: QrGrid + ?Sized> QrGrid for &G {
    fn size(&self) -> usize {
        (**self).size()
    }

    fn get(&self, row: usize, col: usize) -> bool {
        (**self).get(row, col)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/grid/grid.rs"]
mod tests;
