pub use kurbo::{Affine, BezPath, Point, Rect, Vec2};

/// Output canvas dimensions in user units (the SVG view box size).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in user units.
    pub width: f64,
    /// Height in user units.
    pub height: f64,
}

impl Canvas {
    /// Canvas center point.
    pub fn center(self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Full canvas rectangle anchored at the origin.
    pub fn rect(self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }
}

/// Square region of the canvas reserved for QR modules.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DataArea {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Side length.
    pub size: f64,
}

impl DataArea {
    /// Build a data area from its top-left corner and side length.
    pub fn new(x: f64, y: f64, size: f64) -> Self {
        Self { x, y, size }
    }

    /// Data area as a rectangle.
    pub fn rect(self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.size, self.y + self.size)
    }

    /// Centroid of the data area.
    pub fn center(self) -> Point {
        Point::new(self.x + self.size / 2.0, self.y + self.size / 2.0)
    }

    /// Return `true` when the whole area lies inside `canvas`.
    pub fn fits_in(self, canvas: Canvas) -> bool {
        self.size > 0.0
            && self.x >= 0.0
            && self.y >= 0.0
            && self.x + self.size <= canvas.width
            && self.y + self.size <= canvas.height
    }
}

/// Affine map that shrinks `rect` about its center so every edge moves inward by `inset`.
///
/// Insets larger than half the rectangle collapse to a tiny non-degenerate scale.
pub(crate) fn inset_affine(rect: Rect, inset: f64) -> Affine {
    let w = rect.width().max(f64::EPSILON);
    let h = rect.height().max(f64::EPSILON);
    let sx = ((w - 2.0 * inset) / w).max(0.01);
    let sy = ((h - 2.0 * inset) / h).max(0.01);
    let c = rect.center().to_vec2();
    Affine::translate(c) * Affine::scale_non_uniform(sx, sy) * Affine::translate(-c)
}

/// Format an affine map as an SVG `matrix(...)` transform.
pub(crate) fn affine_attr(a: Affine) -> String {
    let [m0, m1, m2, m3, m4, m5] = a.as_coeffs();
    format!("matrix({m0:.4} {m1:.4} {m2:.4} {m3:.4} {m4:.2} {m5:.2})")
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
