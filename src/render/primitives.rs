use std::fmt::Write as _;

use kurbo::Shape as _;

use crate::design::style::CellShape;
use crate::foundation::core::{BezPath, Point, Rect};
use crate::render::svg::path_data;

/// Corner radius of rounded squares relative to their side.
pub(crate) const ROUNDED_CORNER: f64 = 0.25;

const CURVE_TOLERANCE: f64 = 0.1;

/// One drawable element of the module layer.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Mark {
    /// Axis-aligned rectangle with optional corner radius.
    Rect {
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        r: f64,
    },
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
    },
    /// Closed polygon.
    Polygon(Vec<Point>),
    /// Arbitrary compound path.
    Path { path: BezPath, even_odd: bool },
}

impl Mark {
    /// Geometry as a path, used when marks are combined into compound shapes.
    pub(crate) fn to_path(&self) -> BezPath {
        match self {
            Self::Rect { x, y, w, h, r } => {
                let rect = Rect::new(*x, *y, x + w, y + h);
                if *r > 0.0 {
                    rect.to_rounded_rect(*r).to_path(CURVE_TOLERANCE)
                } else {
                    rect.to_path(CURVE_TOLERANCE)
                }
            }
            Self::Circle { cx, cy, r } => {
                kurbo::Circle::new((*cx, *cy), *r).to_path(CURVE_TOLERANCE)
            }
            Self::Polygon(points) => {
                let mut path = BezPath::new();
                for (i, p) in points.iter().enumerate() {
                    if i == 0 {
                        path.move_to(*p);
                    } else {
                        path.line_to(*p);
                    }
                }
                path.close_path();
                path
            }
            Self::Path { path, .. } => path.clone(),
        }
    }

    /// Append the SVG element for this mark. `fill` is an already escaped attribute value.
    pub(crate) fn write_svg(&self, out: &mut String, fill: Option<&str>) {
        let fill = fill.map(|f| format!(" fill=\"{f}\"")).unwrap_or_default();
        let _ = match self {
            Self::Rect { x, y, w, h, r } if *r > 0.0 => write!(
                out,
                "<rect x=\"{x:.2}\" y=\"{y:.2}\" width=\"{w:.2}\" height=\"{h:.2}\" rx=\"{r:.2}\" ry=\"{r:.2}\"{fill}/>"
            ),
            Self::Rect { x, y, w, h, .. } => write!(
                out,
                "<rect x=\"{x:.2}\" y=\"{y:.2}\" width=\"{w:.2}\" height=\"{h:.2}\"{fill}/>"
            ),
            Self::Circle { cx, cy, r } => write!(
                out,
                "<circle cx=\"{cx:.2}\" cy=\"{cy:.2}\" r=\"{r:.2}\"{fill}/>"
            ),
            Self::Polygon(points) => {
                let pts: Vec<String> = points
                    .iter()
                    .map(|p| format!("{:.2},{:.2}", p.x, p.y))
                    .collect();
                write!(out, "<polygon points=\"{}\"{fill}/>", pts.join(" "))
            }
            Self::Path { path, even_odd } => {
                let rule = if *even_odd {
                    " fill-rule=\"evenodd\""
                } else {
                    ""
                };
                write!(out, "<path d=\"{}\"{rule}{fill}/>", path_data(path))
            }
        };
    }
}

/// Shape of side `size` centered on `center`.
pub(crate) fn centered_mark(shape: CellShape, center: Point, size: f64) -> Mark {
    let half = size / 2.0;
    match shape {
        CellShape::Square => Mark::Rect {
            x: center.x - half,
            y: center.y - half,
            w: size,
            h: size,
            r: 0.0,
        },
        CellShape::Rounded => Mark::Rect {
            x: center.x - half,
            y: center.y - half,
            w: size,
            h: size,
            r: size * ROUNDED_CORNER,
        },
        CellShape::Circle => Mark::Circle {
            cx: center.x,
            cy: center.y,
            r: half,
        },
        CellShape::Diamond => Mark::Polygon(vec![
            Point::new(center.x, center.y - half),
            Point::new(center.x + half, center.y),
            Point::new(center.x, center.y + half),
            Point::new(center.x - half, center.y),
        ]),
    }
}

/// Module for the cell whose top-left corner is `(x, y)`, shrunk by `scale` about the cell center.
pub(crate) fn cell_mark(shape: CellShape, x: f64, y: f64, cell: f64, scale: f64) -> Mark {
    centered_mark(
        shape,
        Point::new(x + cell / 2.0, y + cell / 2.0),
        cell * scale,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/render/primitives.rs"]
mod tests;
