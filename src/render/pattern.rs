//! Cell masks and the module compositor.
//!
//! Independent styles draw one primitive per active cell. Bar styles merge maximal runs along
//! one axis into a single rounded rectangle. The pond style treats the mask as a liquid: each
//! 4-connected component becomes one compound path whose cells are inset and rounded only on
//! exposed convex corners, so neighbouring cells meet flush.

use crate::design::style::{CellShape, ModuleStyle};
use crate::foundation::core::{BezPath, Point, Rect};
use crate::render::primitives::{Mark, cell_mark};

/// Inset of exposed pond edges at full scale, relative to the cell size.
pub(crate) const POND_INSET: f64 = 0.08;

/// Exposed-edge inset for `scale`, relative to the cell size.
///
/// Full scale gives [`POND_INSET`]; the inset grows linearly towards half a cell as the scale
/// approaches zero. Shared edges are never inset.
pub(crate) fn pond_inset(scale: f64) -> f64 {
    let scale = if scale.is_nan() { 1.0 } else { scale.clamp(0.0, 1.0) };
    POND_INSET + (1.0 - scale) * (0.5 - POND_INSET)
}

/// Boolean cell layer positioned on the canvas.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct CellMask {
    pub(crate) rows: usize,
    pub(crate) cols: usize,
    /// Top-left corner of cell `(0, 0)`.
    pub(crate) origin: Point,
    pub(crate) cell: f64,
    cells: Vec<bool>,
}

impl CellMask {
    pub(crate) fn new(rows: usize, cols: usize, origin: Point, cell: f64) -> Self {
        Self {
            rows,
            cols,
            origin,
            cell,
            cells: vec![false; rows * cols],
        }
    }

    pub(crate) fn from_fn(
        rows: usize,
        cols: usize,
        origin: Point,
        cell: f64,
        mut f: impl FnMut(usize, usize) -> bool,
    ) -> Self {
        let mut mask = Self::new(rows, cols, origin, cell);
        for r in 0..rows {
            for c in 0..cols {
                mask.cells[r * cols + c] = f(r, c);
            }
        }
        mask
    }

    /// Cell state; anything outside the mask is inactive.
    pub(crate) fn get(&self, row: isize, col: isize) -> bool {
        if row < 0 || col < 0 {
            return false;
        }
        let (r, c) = (row as usize, col as usize);
        r < self.rows && c < self.cols && self.cells[r * self.cols + c]
    }

    pub(crate) fn is_active(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols && self.cells[row * self.cols + col]
    }

    pub(crate) fn active_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    pub(crate) fn cell_origin(&self, row: usize, col: usize) -> Point {
        Point::new(
            self.origin.x + col as f64 * self.cell,
            self.origin.y + row as f64 * self.cell,
        )
    }

    pub(crate) fn active_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.rows)
            .flat_map(move |r| (0..self.cols).map(move |c| (r, c)))
            .filter(|&(r, c)| self.is_active(r, c))
    }
}

/// Direction along which bar styles merge cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Axis {
    Horizontal,
    Vertical,
}

/// Maximal run of active cells on one row (horizontal) or column (vertical).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Run {
    pub(crate) line: usize,
    pub(crate) start: usize,
    pub(crate) len: usize,
}

pub(crate) fn runs(mask: &CellMask, axis: Axis) -> Vec<Run> {
    let (lines, span) = match axis {
        Axis::Horizontal => (mask.rows, mask.cols),
        Axis::Vertical => (mask.cols, mask.rows),
    };
    let at = |line: usize, i: usize| match axis {
        Axis::Horizontal => mask.is_active(line, i),
        Axis::Vertical => mask.is_active(i, line),
    };

    let mut out = Vec::new();
    for line in 0..lines {
        let mut i = 0;
        while i < span {
            if !at(line, i) {
                i += 1;
                continue;
            }
            let start = i;
            while i < span && at(line, i) {
                i += 1;
            }
            out.push(Run {
                line,
                start,
                len: i - start,
            });
        }
    }
    out
}

/// One fully rounded bar per run, thinned by `scale` across the bar.
pub(crate) fn bar_marks(mask: &CellMask, axis: Axis, scale: f64) -> Vec<Mark> {
    let cs = mask.cell;
    let pad = cs * (1.0 - scale) / 2.0;
    let thick = cs * scale;
    runs(mask, axis)
        .into_iter()
        .map(|run| {
            let length = run.len as f64 * cs - 2.0 * pad;
            let (row, col, w, h) = match axis {
                Axis::Horizontal => (run.line, run.start, length, thick),
                Axis::Vertical => (run.start, run.line, thick, length),
            };
            let p = mask.cell_origin(row, col);
            Mark::Rect {
                x: p.x + pad,
                y: p.y + pad,
                w,
                h,
                r: thick / 2.0,
            }
        })
        .collect()
}

/// 4-connected components of the active cells, each in row-major order.
pub(crate) fn components(mask: &CellMask) -> Vec<Vec<(usize, usize)>> {
    let mut seen = vec![false; mask.rows * mask.cols];
    let mut out = Vec::new();
    for (r, c) in mask.active_cells() {
        if seen[r * mask.cols + c] {
            continue;
        }
        let mut component = Vec::new();
        let mut stack = vec![(r, c)];
        seen[r * mask.cols + c] = true;
        while let Some((cr, cc)) = stack.pop() {
            component.push((cr, cc));
            let neighbours = [
                (cr.wrapping_sub(1), cc),
                (cr + 1, cc),
                (cr, cc.wrapping_sub(1)),
                (cr, cc + 1),
            ];
            for (nr, nc) in neighbours {
                if mask.is_active(nr, nc) && !seen[nr * mask.cols + nc] {
                    seen[nr * mask.cols + nc] = true;
                    stack.push((nr, nc));
                }
            }
        }
        component.sort_unstable();
        out.push(component);
    }
    out
}

/// Exposed edges of a pond cell, in top, right, bottom, left order.
pub(crate) type Edges = [bool; 4];

/// Geometry of one pond cell: its inset rectangle, exposed edges and corner radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct PondCell {
    pub(crate) rect: Rect,
    pub(crate) exposed: Edges,
    pub(crate) radius: f64,
}

impl PondCell {
    /// Rounded corners, in top-left, top-right, bottom-right, bottom-left order.
    pub(crate) fn rounded(&self) -> [bool; 4] {
        let [t, r, b, l] = self.exposed;
        [t && l, t && r, b && r, b && l]
    }
}

pub(crate) fn pond_cell(mask: &CellMask, row: usize, col: usize, scale: f64) -> PondCell {
    let (ri, ci) = (row as isize, col as isize);
    let exposed = [
        !mask.get(ri - 1, ci),
        !mask.get(ri, ci + 1),
        !mask.get(ri + 1, ci),
        !mask.get(ri, ci - 1),
    ];
    let s = mask.cell;
    let m = s * pond_inset(scale);
    let p = mask.cell_origin(row, col);
    let inset = |e: bool| if e { m } else { 0.0 };
    PondCell {
        rect: Rect::new(
            p.x + inset(exposed[3]),
            p.y + inset(exposed[0]),
            p.x + s - inset(exposed[1]),
            p.y + s - inset(exposed[2]),
        ),
        exposed,
        radius: (s - 2.0 * m) / 2.0,
    }
}

fn append_pond_cell(path: &mut BezPath, cell: &PondCell) {
    let Rect { x0, y0, x1, y1 } = cell.rect;
    let [tl, tr, br, bl] = cell.rounded();
    let r = |on: bool| if on { cell.radius } else { 0.0 };

    path.move_to((x0 + r(tl), y0));
    path.line_to((x1 - r(tr), y0));
    if tr {
        path.quad_to((x1, y0), (x1, y0 + cell.radius));
    }
    path.line_to((x1, y1 - r(br)));
    if br {
        path.quad_to((x1, y1), (x1 - cell.radius, y1));
    }
    path.line_to((x0 + r(bl), y1));
    if bl {
        path.quad_to((x0, y1), (x0, y1 - cell.radius));
    }
    path.line_to((x0, y0 + r(tl)));
    if tl {
        path.quad_to((x0, y0), (x0 + cell.radius, y0));
    }
    path.close_path();
}

/// One compound path per connected component.
pub(crate) fn pond_marks(mask: &CellMask, scale: f64) -> Vec<Mark> {
    components(mask)
        .into_iter()
        .map(|component| {
            let mut path = BezPath::new();
            for (r, c) in component {
                append_pond_cell(&mut path, &pond_cell(mask, r, c, scale));
            }
            Mark::Path {
                path,
                even_odd: false,
            }
        })
        .collect()
}

/// Marks for every active cell of `mask` drawn in `style`.
pub(crate) fn marks(mask: &CellMask, style: ModuleStyle, scale: f64) -> Vec<Mark> {
    match style {
        ModuleStyle::HorizontalBars => bar_marks(mask, Axis::Horizontal, scale),
        ModuleStyle::VerticalBars => bar_marks(mask, Axis::Vertical, scale),
        ModuleStyle::Pond => pond_marks(mask, scale),
        other => {
            let shape = other.cell_shape().unwrap_or(CellShape::Square);
            mask.active_cells()
                .map(|(r, c)| {
                    let p = mask.cell_origin(r, c);
                    cell_mark(shape, p.x, p.y, mask.cell, scale)
                })
                .collect()
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/pattern.rs"]
mod tests;
