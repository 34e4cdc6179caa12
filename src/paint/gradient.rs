use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::foundation::error::{ShieldError, ShieldResult};
use crate::render::svg::escape_xml;

/// Gradient geometry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GradientKind {
    /// Linear gradient along `angle`.
    #[default]
    Linear,
    /// Radial gradient from the center outwards.
    Radial,
}

impl From<String> for GradientKind {
    fn from(s: String) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "radial" => Self::Radial,
            _ => Self::Linear,
        }
    }
}

impl From<GradientKind> for String {
    fn from(k: GradientKind) -> Self {
        match k {
            GradientKind::Linear => "linear".to_owned(),
            GradientKind::Radial => "radial".to_owned(),
        }
    }
}

/// Foreground gradient specification.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GradientSpec {
    /// Linear or radial.
    pub kind: GradientKind,
    /// Ordered color list; must not be empty.
    pub colors: Vec<String>,
    /// Direction in degrees, clockwise from the +x axis (linear only).
    pub angle: f64,
    /// Stop positions in percent; evenly spaced when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stops: Option<Vec<f64>>,
}

impl GradientSpec {
    /// Reject specs that cannot produce a gradient.
    pub fn validate(&self) -> ShieldResult<()> {
        if self.colors.is_empty() {
            return Err(ShieldError::config(
                "gradient requires at least one color in `colors`",
            ));
        }
        Ok(())
    }

    /// Stop offsets in percent, one per color.
    ///
    /// Explicit stops are used where provided (clamped to 0..=100); missing entries take their
    /// evenly spaced position.
    pub(crate) fn stop_offsets(&self) -> Vec<f64> {
        let n = self.colors.len();
        (0..n)
            .map(|i| {
                let even = if n > 1 {
                    i as f64 * 100.0 / (n - 1) as f64
                } else {
                    0.0
                };
                self.stops
                    .as_ref()
                    .and_then(|s| s.get(i).copied())
                    .filter(|v| v.is_finite())
                    .map_or(even, |v| v.clamp(0.0, 100.0))
            })
            .collect()
    }

    /// SVG gradient definition with the given element id.
    pub(crate) fn to_svg_def(&self, id: &str) -> ShieldResult<String> {
        self.validate()?;
        let mut out = String::new();
        let tag = match self.kind {
            GradientKind::Linear => {
                let (x1, y1, x2, y2) = linear_endpoints(self.angle);
                let _ = write!(
                    out,
                    "<linearGradient id=\"{id}\" x1=\"{x1:.2}%\" y1=\"{y1:.2}%\" x2=\"{x2:.2}%\" y2=\"{y2:.2}%\">"
                );
                "linearGradient"
            }
            GradientKind::Radial => {
                let _ = write!(
                    out,
                    "<radialGradient id=\"{id}\" cx=\"50%\" cy=\"50%\" r=\"50%\">"
                );
                "radialGradient"
            }
        };
        for (color, offset) in self.colors.iter().zip(self.stop_offsets()) {
            let _ = write!(
                out,
                "<stop offset=\"{offset:.2}%\" stop-color=\"{}\"/>",
                escape_xml(color)
            );
        }
        let _ = write!(out, "</{tag}>");
        Ok(out)
    }
}

/// Project a direction angle onto the unit box, in percent: `(x1, y1, x2, y2)`.
pub(crate) fn linear_endpoints(angle_deg: f64) -> (f64, f64, f64, f64) {
    let (sin, cos) = angle_deg.to_radians().sin_cos();
    (
        50.0 - cos * 50.0,
        50.0 - sin * 50.0,
        50.0 + cos * 50.0,
        50.0 + sin * 50.0,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/paint/gradient.rs"]
mod tests;
