use std::{fs::File, io::BufReader, path::Path};

use serde::{Deserialize, Serialize};

use crate::design::style::{FinderMode, FinderStyle, ModuleStyle};
use crate::foundation::error::{ShieldError, ShieldResult};
use crate::paint::gradient::GradientSpec;
use crate::paint::palette::CustomColors;
use crate::paint::preset::DEFAULT_PRESET;
use crate::shapes::registry::ShapeSelection;

/// Opacity of the decorative layer.
pub const DECORATIVE_OPACITY: f64 = 0.35;

/// Every styling option for one rendered QR document.
///
/// All keys are optional (camelCase in JSON) and unknown keys are ignored. Unknown style, shape
/// and preset names fall back to defaults; only structurally broken values (such as a gradient
/// with no colors) are rejected at render time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DesignConfig {
    /// Shape category key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Variation key inside `category`, or inside the default category when no category is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variation: Option<String>,
    /// Legacy single-name shape selector; `category` wins when both are set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape: Option<String>,

    /// Data module style.
    pub module_style: ModuleStyle,
    /// Module size relative to its cell, clamped to `[0.1, 1]`.
    pub module_scale: f64,

    /// Finder style.
    pub finder_style: FinderStyle,
    /// Finder size factor, clamped to `[0.1, 1]`.
    pub finder_scale: f64,
    /// Per-cell or concentric finders.
    pub finder_mode: FinderMode,

    /// Named color preset.
    pub preset: String,
    /// Explicit colors replacing the preset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<CustomColors>,
    /// Foreground gradient.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gradient: Option<GradientSpec>,

    /// Blurred glow around the outline stroke.
    pub glow: bool,
    /// Glow blur standard deviation.
    pub glow_radius: f64,
    /// Second, inset outline stroke.
    pub inner_border: bool,
    /// Inset of the inner border from the outline, in user units.
    pub inner_border_inset: f64,

    /// Clear a circular zone in the middle of the data area.
    pub center_clear: bool,
    /// Radius of the cleared zone as a fraction of the data area size.
    pub center_size: f64,

    /// Background panel margin around the data area, in modules.
    pub quiet_zone: f64,

    /// Sprinkle secondary modules over the empty background.
    pub decorative: bool,
    /// Probability that an eligible background cell is filled, `[0, 1]`.
    pub decorative_density: f64,
    /// Decorative module scale, clamped to `[0.1, 1]`.
    pub decorative_scale: f64,
    /// Decorative module style; the module style when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decorative_style: Option<ModuleStyle>,
    /// Cells kept clear around the data area, in modules.
    pub decorative_margin: f64,
    /// Inset of the decorative clip from the outline, in user units.
    pub decorative_inset: f64,
    /// Decorative fill color; the foreground paint when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decorative_color: Option<String>,

    /// Prefix for element ids in the output document.
    pub id_prefix: String,
}

impl Default for DesignConfig {
    fn default() -> Self {
        Self {
            category: None,
            variation: None,
            shape: None,
            module_style: ModuleStyle::Square,
            module_scale: 0.9,
            finder_style: FinderStyle::Square,
            finder_scale: 1.0,
            finder_mode: FinderMode::Pattern,
            preset: DEFAULT_PRESET.to_owned(),
            colors: None,
            gradient: None,
            glow: false,
            glow_radius: 4.0,
            inner_border: false,
            inner_border_inset: 10.0,
            center_clear: false,
            center_size: 0.15,
            quiet_zone: 1.0,
            decorative: false,
            decorative_density: 0.3,
            decorative_scale: 0.6,
            decorative_style: None,
            decorative_margin: 2.0,
            decorative_inset: 12.0,
            decorative_color: None,
            id_prefix: "qr".to_owned(),
        }
    }
}

impl DesignConfig {
    /// Parse a configuration from JSON text.
    pub fn from_json_str(s: &str) -> ShieldResult<Self> {
        serde_json::from_str(s)
            .map_err(|e| ShieldError::serde(format!("parse design config JSON: {e}")))
    }

    /// Parse a configuration from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> ShieldResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| ShieldError::serde(format!("parse design config JSON: {e}")))
    }

    /// Parse a configuration from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> ShieldResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ShieldError::config(format!("open design config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Shape selection inputs for [`ShapeRegistry::resolve`](crate::ShapeRegistry::resolve).
    pub fn shape_selection(&self) -> ShapeSelection<'_> {
        ShapeSelection {
            category: self.category.as_deref(),
            variation: self.variation.as_deref(),
            legacy: self.shape.as_deref(),
        }
    }

    /// Copy with every numeric option forced into its valid range.
    pub(crate) fn clamped(&self) -> Self {
        let mut c = self.clone();
        c.module_scale = clamp_or(c.module_scale, 0.1, 1.0, 0.9);
        c.finder_scale = clamp_or(c.finder_scale, 0.1, 1.0, 1.0);
        c.decorative_scale = clamp_or(c.decorative_scale, 0.1, 1.0, 0.6);
        c.decorative_density = clamp_or(c.decorative_density, 0.0, 1.0, 0.3);
        c.center_size = clamp_or(c.center_size, 0.0, 0.5, 0.15);
        c.glow_radius = clamp_or(c.glow_radius, 0.0, 100.0, 4.0);
        c.quiet_zone = clamp_or(c.quiet_zone, 0.0, 10.0, 1.0);
        c.decorative_margin = clamp_or(c.decorative_margin, 0.0, 100.0, 2.0);
        c.decorative_inset = clamp_or(c.decorative_inset, 0.0, 1000.0, 12.0);
        c.inner_border_inset = clamp_or(c.inner_border_inset, 0.0, 1000.0, 10.0);
        if c.id_prefix.is_empty() || !c.id_prefix.chars().all(is_id_char) {
            c.id_prefix = "qr".to_owned();
        }
        c
    }
}

fn clamp_or(v: f64, lo: f64, hi: f64, fallback: f64) -> f64 {
    if v.is_finite() { v.clamp(lo, hi) } else { fallback }
}

pub(crate) fn is_id_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

#[cfg(test)]
#[path = "../../tests/unit/design/config.rs"]
mod tests;
