//! SVG rendering: module primitives, pattern merging, finders, decorative fill and document
//! assembly.

pub(crate) mod decor;
pub(crate) mod document;
pub(crate) mod finder;
pub(crate) mod pattern;
pub(crate) mod primitives;
pub(crate) mod svg;

use crate::foundation::core::{DataArea, Point};

/// Placement of an `n`-module grid on the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct GridLayout {
    pub(crate) n: usize,
    pub(crate) origin: Point,
    pub(crate) cell: f64,
}

impl GridLayout {
    /// Spread `n` modules evenly over `data`.
    pub(crate) fn fit(n: usize, data: DataArea) -> Self {
        Self {
            n,
            origin: Point::new(data.x, data.y),
            cell: data.size / n.max(1) as f64,
        }
    }

    pub(crate) fn cell_origin(&self, row: usize, col: usize) -> Point {
        Point::new(
            self.origin.x + col as f64 * self.cell,
            self.origin.y + row as f64 * self.cell,
        )
    }

    pub(crate) fn cell_center(&self, row: usize, col: usize) -> Point {
        let p = self.cell_origin(row, col);
        Point::new(p.x + self.cell / 2.0, p.y + self.cell / 2.0)
    }
}
