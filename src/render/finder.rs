//! Finder pattern detection and restyling.

use std::fmt::Write as _;

use crate::design::style::{CellShape, FinderMode, FinderStyle};
use crate::grid::{FINDER_SIZE, QrGrid};
use crate::paint::palette::Palette;
use crate::render::GridLayout;
use crate::render::primitives::{Mark, cell_mark, centered_mark};

/// Which of the three finder blocks a cell belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum FinderRegion {
    TopLeft,
    TopRight,
    BottomLeft,
}

/// Ring of a finder block a cell belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum FinderPart {
    /// Outermost 7x7 ring.
    Outer,
    /// Light ring between outer and inner.
    Space,
    /// Central 3x3 square.
    Inner,
}

/// Top-left cell of each finder block. Grids smaller than a finder have none.
pub(crate) fn finder_origins(n: usize) -> Option<[(FinderRegion, usize, usize); 3]> {
    let far = n.checked_sub(FINDER_SIZE)?;
    Some([
        (FinderRegion::TopLeft, 0, 0),
        (FinderRegion::TopRight, 0, far),
        (FinderRegion::BottomLeft, far, 0),
    ])
}

/// Locate a cell inside the finder blocks. Overlapping blocks (tiny grids) resolve in
/// top-left, top-right, bottom-left order.
pub(crate) fn classify(n: usize, row: usize, col: usize) -> Option<(FinderRegion, FinderPart)> {
    finder_origins(n)?.into_iter().find_map(|(region, r0, c0)| {
        let inside = (r0..r0 + FINDER_SIZE).contains(&row) && (c0..c0 + FINDER_SIZE).contains(&col);
        if !inside {
            return None;
        }
        let (lr, lc) = (row - r0, col - c0);
        let edge = FINDER_SIZE - 1;
        let part = if lr == 0 || lc == 0 || lr == edge || lc == edge {
            FinderPart::Outer
        } else if (2..=4).contains(&lr) && (2..=4).contains(&lc) {
            FinderPart::Inner
        } else {
            FinderPart::Space
        };
        Some((region, part))
    })
}

pub(crate) fn is_finder_cell(n: usize, row: usize, col: usize) -> bool {
    classify(n, row, col).is_some()
}

/// Per-cell finder marks for dark cells, split into outer ring and center.
pub(crate) fn pattern_marks(
    grid: &impl QrGrid,
    layout: &GridLayout,
    style: FinderStyle,
    scale: f64,
) -> (Vec<Mark>, Vec<Mark>) {
    let shape = CellShape::from(style);
    let n = layout.n;
    let mut outer = Vec::new();
    let mut inner = Vec::new();
    for row in 0..n {
        for col in 0..n {
            let Some((_, part)) = classify(n, row, col) else {
                continue;
            };
            if !grid.get(row, col) {
                continue;
            }
            let p = layout.cell_origin(row, col);
            let mark = cell_mark(shape, p.x, p.y, layout.cell, scale);
            match part {
                FinderPart::Outer => outer.push(mark),
                FinderPart::Inner => inner.push(mark),
                FinderPart::Space => {}
            }
        }
    }
    (outer, inner)
}

/// Concentric shapes of one solid finder.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct SolidFinder {
    pub(crate) outer: Mark,
    pub(crate) space: Mark,
    pub(crate) inner: Mark,
}

pub(crate) fn solid_finder(
    layout: &GridLayout,
    row: usize,
    col: usize,
    style: FinderStyle,
    scale: f64,
) -> SolidFinder {
    let shape = CellShape::from(style);
    let p = layout.cell_origin(row, col);
    let half = FINDER_SIZE as f64 * layout.cell / 2.0;
    let center = (p.x + half, p.y + half).into();
    let unit = layout.cell * scale;
    SolidFinder {
        outer: centered_mark(shape, center, 7.0 * unit),
        space: centered_mark(shape, center, 5.0 * unit),
        inner: centered_mark(shape, center, 3.0 * unit),
    }
}

/// Append the finder layer.
///
/// Solid finders over a transparent background punch the light ring out of the outer shape
/// with an even-odd path instead of painting it.
pub(crate) fn write_finders(
    out: &mut String,
    grid: &impl QrGrid,
    layout: &GridLayout,
    style: FinderStyle,
    mode: FinderMode,
    scale: f64,
    palette: &Palette,
) {
    let outer_fill = palette.finder_outer.fill();
    let inner_fill = palette.finder_inner.fill();

    match mode {
        FinderMode::Pattern => {
            let (outer, inner) = pattern_marks(grid, layout, style, scale);
            for (class, fill, marks) in [
                ("finder-outer", &outer_fill, outer),
                ("finder-inner", &inner_fill, inner),
            ] {
                if marks.is_empty() {
                    continue;
                }
                let _ = write!(out, "<g class=\"{class}\" fill=\"{fill}\">");
                for m in &marks {
                    m.write_svg(out, None);
                }
                out.push_str("</g>");
            }
        }
        FinderMode::Solid => {
            let Some(origins) = finder_origins(layout.n) else {
                return;
            };
            let background = palette.background_fill();
            out.push_str("<g class=\"finders\">");
            for (_, row, col) in origins {
                let f = solid_finder(layout, row, col, style, scale);
                match &background {
                    Some(bg) => {
                        f.outer.write_svg(out, Some(&outer_fill));
                        f.space.write_svg(out, Some(bg));
                    }
                    None => {
                        let mut ring = f.outer.to_path();
                        ring.extend(f.space.to_path());
                        Mark::Path {
                            path: ring,
                            even_odd: true,
                        }
                        .write_svg(out, Some(&outer_fill));
                    }
                }
                f.inner.write_svg(out, Some(&inner_fill));
            }
            out.push_str("</g>");
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/finder.rs"]
mod tests;
