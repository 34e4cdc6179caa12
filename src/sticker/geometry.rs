use serde::Serialize;

use crate::foundation::core::{Affine, Point, Rect, affine_attr};
use crate::foundation::error::{ShieldError, ShieldResult};
use crate::shapes::registry::ShapeRegistry;
use crate::sticker::config::{ContainerShape, ShapeKind, StickerConfig};

/// Direction the caption baseline bends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArcCurvature {
    /// Straight baseline.
    Flat,
    /// Follows the container outline.
    Outward,
    /// Bends against the container outline.
    Inverted,
}

impl ArcCurvature {
    /// Curvature implied by a signed arc offset.
    pub fn from_offset(offset: f64) -> Self {
        if offset > 0.0 {
            Self::Outward
        } else if offset < 0.0 {
            Self::Inverted
        } else {
            Self::Flat
        }
    }
}

/// QR placement in percent of the canvas, for percentage-based layout.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QrPlacement {
    /// Left edge, percent of canvas width.
    pub left: f64,
    /// Top edge, percent of canvas height.
    pub top: f64,
    /// Width, percent of canvas width.
    pub width: f64,
    /// Height, percent of canvas height.
    pub height: f64,
}

/// Derived sticker layout. Recomputed on every call.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StickerGeometry {
    /// Canvas width.
    pub width: f64,
    /// Canvas height.
    pub height: f64,
    /// Outer container half width (inside the border).
    pub outer_half_width: f64,
    /// Outer container half height.
    pub outer_half_height: f64,
    /// Inner container half width.
    pub inner_half_width: f64,
    /// Inner container half height.
    pub inner_half_height: f64,
    /// Caption arc radius: outer half height plus the caption offset.
    pub text_arc_radius: f64,
    /// Caption curvature.
    pub curvature: ArcCurvature,
    /// QR square side in user units.
    pub qr_size: f64,
    /// QR square center in user units.
    pub qr_center: Point,
    /// QR placement in percent of the canvas.
    pub qr: QrPlacement,
}

impl StickerGeometry {
    /// Compute the layout for `cfg`. Shield containers read their outline from `registry`.
    #[tracing::instrument(skip(cfg, registry), fields(outer = cfg.outer.kind.name()))]
    pub fn compute(cfg: &StickerConfig, registry: &ShapeRegistry) -> ShieldResult<Self> {
        if !cfg.size.is_finite() || cfg.size <= 0.0 {
            return Err(ShieldError::config(format!(
                "sticker size must be positive, got {}",
                cfg.size
            )));
        }

        let outer_aspect = aspect_ratio(&cfg.outer, registry)?;
        let width = cfg.size;
        let height = cfg.size * outer_aspect;

        let border = finite_or(cfg.outer_border_width, 0.0).max(0.0);
        let outer_half_width = ((width - border) / 2.0).max(0.0);
        let outer_half_height = ((height - border) / 2.0).max(0.0);

        let inner = cfg.inner_shape();
        let inner_aspect = aspect_ratio(inner, registry)?;
        let ratio = finite_or(cfg.inner_size_ratio, 0.78).clamp(0.1, 1.0);
        let inner_half_width = ratio * outer_half_width.min(outer_half_height / inner_aspect);
        let inner_half_height = inner_half_width * inner_aspect;

        let center = Point::new(width / 2.0, height / 2.0);
        let inner_rect = Rect::new(
            center.x - inner_half_width,
            center.y - inner_half_height,
            center.x + inner_half_width,
            center.y + inner_half_height,
        );
        let (base_center, base_side) = qr_base(inner, inner_rect, registry)?;

        let padding = finite_or(cfg.qr_padding, 0.05).clamp(0.0, 0.45);
        let zoom = finite_or(cfg.qr_zoom, 1.0).max(0.0);
        let qr_size = base_side * (1.0 - 2.0 * padding) * zoom;
        let qr_center = center + (base_center - center) * zoom;

        let arc_offset = cfg.caption().map_or(0.0, |t| finite_or(t.arc_offset, 0.0));

        Ok(Self {
            width,
            height,
            outer_half_width,
            outer_half_height,
            inner_half_width,
            inner_half_height,
            text_arc_radius: outer_half_height + arc_offset,
            curvature: ArcCurvature::from_offset(arc_offset),
            qr_size,
            qr_center,
            qr: QrPlacement {
                left: (qr_center.x - qr_size / 2.0) / width * 100.0,
                top: (qr_center.y - qr_size / 2.0) / height * 100.0,
                width: qr_size / width * 100.0,
                height: qr_size / height * 100.0,
            },
        })
    }

    /// Canvas center.
    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Outer container bounds.
    pub fn outer_rect(&self) -> Rect {
        Rect::from_center_size(
            self.center(),
            (2.0 * self.outer_half_width, 2.0 * self.outer_half_height),
        )
    }

    /// Inner container bounds.
    pub fn inner_rect(&self) -> Rect {
        Rect::from_center_size(
            self.center(),
            (2.0 * self.inner_half_width, 2.0 * self.inner_half_height),
        )
    }
}

/// Placement of a shield outline inside a bounding box.
#[derive(Clone, Debug, PartialEq)]
pub struct ShieldPlacement {
    /// Map from the variation's outline coordinates to canvas coordinates.
    pub transform: Affine,
    /// The same map as an SVG `matrix(...)` transform.
    pub matrix: String,
}

/// Uniformly scale and center shield `variant`'s outline into `bounds`.
///
/// Unknown variants fall back like [`ShapeRegistry::shield`].
pub fn shield_transform(
    variant: &str,
    bounds: Rect,
    registry: &ShapeRegistry,
) -> ShieldResult<ShieldPlacement> {
    let src = registry.shield(variant)?.outline_bounds();
    if src.width() <= 0.0 || src.height() <= 0.0 {
        return Err(ShieldError::registry(format!(
            "shield '{variant}' has an empty outline"
        )));
    }
    let scale = (bounds.width() / src.width()).min(bounds.height() / src.height());
    let transform = Affine::translate(bounds.center().to_vec2())
        * Affine::scale(scale)
        * Affine::translate(-src.center().to_vec2());
    Ok(ShieldPlacement {
        matrix: affine_attr(transform),
        transform,
    })
}

/// CSS border radius approximating `kind` on a rectangular surface.
///
/// Shields cannot be approximated by a corner radius and report no rounding.
pub fn border_radius(kind: ShapeKind) -> &'static str {
    match kind {
        ShapeKind::Circle => "50%",
        ShapeKind::Square | ShapeKind::Portrait | ShapeKind::Landscape | ShapeKind::Shield => "0",
    }
}

/// Height over width of a container.
fn aspect_ratio(shape: &ContainerShape, registry: &ShapeRegistry) -> ShieldResult<f64> {
    Ok(match shape.kind {
        ShapeKind::Square | ShapeKind::Circle => 1.0,
        ShapeKind::Portrait => 4.0 / 3.0,
        ShapeKind::Landscape => 3.0 / 4.0,
        ShapeKind::Shield => {
            let b = registry.shield(&shape.shield)?.outline_bounds();
            if b.width() > 0.0 && b.height() > 0.0 {
                b.height() / b.width()
            } else {
                1.0
            }
        }
    })
}

/// Largest QR square (center, side) the inner container holds before padding and zoom.
fn qr_base(
    shape: &ContainerShape,
    inner: Rect,
    registry: &ShapeRegistry,
) -> ShieldResult<(Point, f64)> {
    let half = (inner.width() / 2.0).min(inner.height() / 2.0);
    Ok(match shape.kind {
        ShapeKind::Square | ShapeKind::Portrait | ShapeKind::Landscape => {
            (inner.center(), 2.0 * half)
        }
        ShapeKind::Circle => (inner.center(), 2.0 * half / std::f64::consts::SQRT_2),
        ShapeKind::Shield => {
            let data = registry.shield(&shape.shield)?.data_area;
            let placement = shield_transform(&shape.shield, inner, registry)?;
            let [scale, ..] = placement.transform.as_coeffs();
            (placement.transform * data.center(), data.size * scale)
        }
    })
}

fn finite_or(v: f64, fallback: f64) -> f64 {
    if v.is_finite() { v } else { fallback }
}

#[cfg(test)]
#[path = "../../tests/unit/sticker/geometry.rs"]
mod tests;
