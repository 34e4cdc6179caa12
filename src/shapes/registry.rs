use indexmap::IndexMap;
use kurbo::Shape as _;
use serde::{Deserialize, Serialize};

use crate::foundation::core::{BezPath, Canvas, DataArea, Rect};
use crate::foundation::error::{ShieldError, ShieldResult};

/// Category used when nothing (or nothing recognizable) is selected.
pub const DEFAULT_CATEGORY: &str = "shield";
/// Variation used when nothing (or nothing recognizable) is selected.
pub const DEFAULT_VARIATION: &str = "classic";

/// One concrete outline a QR code can be drawn into.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeVariation {
    /// Display label.
    pub label: String,
    /// Short description.
    #[serde(default)]
    pub description: String,
    /// Canvas width.
    pub width: f64,
    /// Canvas height.
    pub height: f64,
    /// SVG path data of the outline, in canvas coordinates.
    pub outline: String,
    /// Square reserved for QR modules.
    pub data_area: DataArea,
    /// Skip outline, clipping, stroke and effects; render the raw grid on a plain panel.
    #[serde(default)]
    pub bare: bool,
}

impl ShapeVariation {
    /// Canvas dimensions of this variation.
    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: self.width,
            height: self.height,
        }
    }

    /// Parse the outline into a path.
    pub fn outline_path(&self) -> ShieldResult<BezPath> {
        BezPath::from_svg(self.outline.trim()).map_err(|e| {
            ShieldError::registry(format!("invalid outline path for '{}': {e}", self.label))
        })
    }

    /// Tight bounding box of the outline, falling back to the canvas when it does not parse.
    pub fn outline_bounds(&self) -> Rect {
        self.outline_path()
            .map(|p| p.bounding_box())
            .unwrap_or_else(|_| self.canvas().rect())
    }

    fn validate(&self, key: &str) -> ShieldResult<()> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(ShieldError::registry(format!(
                "variation '{key}' must have a positive canvas"
            )));
        }
        if !self.data_area.fits_in(self.canvas()) {
            return Err(ShieldError::registry(format!(
                "variation '{key}' data area must lie inside its {}x{} canvas",
                self.width, self.height
            )));
        }
        self.outline_path().map(|_| ())
    }
}

/// A named group of related outline variations.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShapeCategory {
    /// Display label.
    pub label: String,
    /// Icon glyph shown next to the label.
    #[serde(default)]
    pub icon: String,
    /// Short description.
    #[serde(default)]
    pub description: String,
    /// Variations in presentation order; the first one is the category's fallback.
    pub variations: IndexMap<String, ShapeVariation>,
}

/// Caller-owned catalogue of outline shapes.
///
/// Registration is additive: categories can be merged into or replaced, never removed.
#[derive(Clone, Debug, Default)]
pub struct ShapeRegistry {
    categories: IndexMap<String, ShapeCategory>,
}

/// Shape selection inputs in precedence order.
#[derive(Clone, Copy, Debug, Default)]
pub struct ShapeSelection<'a> {
    /// Explicit category key.
    pub category: Option<&'a str>,
    /// Explicit variation key inside `category`.
    pub variation: Option<&'a str>,
    /// Legacy single-name selector.
    pub legacy: Option<&'a str>,
}

/// Result of shape resolution.
#[derive(Clone, Copy, Debug)]
pub struct ResolvedShape<'a> {
    /// Category key actually used.
    pub category: &'a str,
    /// Variation key actually used.
    pub variation: &'a str,
    /// The variation definition.
    pub shape: &'a ShapeVariation,
}

impl ShapeRegistry {
    /// Registry with no categories.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Registry initialized with the built-in catalogue.
    pub fn with_builtins() -> Self {
        let mut categories = IndexMap::new();
        for (key, cat) in super::builtin::builtin_categories() {
            categories.insert(key.to_owned(), cat);
        }
        Self { categories }
    }

    /// Add a category.
    ///
    /// With `merge = true` and an existing category, the new variations are unioned in (matching
    /// keys are overridden in place, the category's label and icon are kept). Otherwise the
    /// category is inserted or replaced wholesale.
    pub fn register(
        &mut self,
        key: impl Into<String>,
        category: ShapeCategory,
        merge: bool,
    ) -> ShieldResult<()> {
        let key = key.into();
        for (vkey, v) in &category.variations {
            v.validate(vkey)?;
        }

        if merge {
            if let Some(existing) = self.categories.get_mut(&key) {
                for (vkey, v) in category.variations {
                    existing.variations.insert(vkey, v);
                }
                return Ok(());
            }
        }

        if category.variations.is_empty() {
            return Err(ShieldError::registry(format!(
                "category '{key}' must contain at least one variation"
            )));
        }
        self.categories.insert(key, category);
        Ok(())
    }

    /// Categories in registration order.
    pub fn categories(&self) -> impl Iterator<Item = (&str, &ShapeCategory)> {
        self.categories.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Look up a category.
    pub fn category(&self, key: &str) -> Option<&ShapeCategory> {
        self.categories.get(key)
    }

    /// Look up one variation.
    pub fn variation(&self, category: &str, variation: &str) -> Option<&ShapeVariation> {
        self.categories.get(category)?.variations.get(variation)
    }

    /// Resolve a selection to a concrete variation.
    ///
    /// Precedence: explicit category (+ variation) over the legacy name over the default.
    /// An unknown variation falls back to the first variation of its category; an unknown
    /// category is ignored. Only an empty registry is an error.
    pub fn resolve(&self, sel: ShapeSelection<'_>) -> ShieldResult<ResolvedShape<'_>> {
        if let Some(cat_key) = sel.category {
            if let Some((ck, cat)) = self.categories.get_key_value(cat_key) {
                if let Some((vk, v)) = sel.variation.and_then(|v| cat.variations.get_key_value(v)) {
                    return Ok(resolved(ck, vk, v));
                }
                if let Some((vk, v)) = cat.variations.first() {
                    if sel.variation.is_some() {
                        tracing::debug!(
                            category = cat_key,
                            requested = ?sel.variation,
                            fallback = vk.as_str(),
                            "unknown shape variation"
                        );
                    }
                    return Ok(resolved(ck, vk, v));
                }
            }
            tracing::debug!(category = cat_key, "unknown shape category");
        }

        if let Some(name) = sel.legacy {
            if let Some(found) = self.lookup_legacy(name) {
                return Ok(found);
            }
            tracing::debug!(shape = name, "unknown legacy shape name");
        }

        if let (None, Some(var_key)) = (sel.category, sel.variation) {
            tracing::debug!(
                variation = var_key,
                category = DEFAULT_CATEGORY,
                "variation without category, looking in default category"
            );
            if let Some((ck, cat)) = self.categories.get_key_value(DEFAULT_CATEGORY) {
                if let Some((vk, v)) = cat.variations.get_key_value(var_key) {
                    return Ok(resolved(ck, vk, v));
                }
            }
        }

        self.default_shape()
    }

    /// Variation of the `shield` category, falling back to the default shape.
    pub fn shield(&self, variant: &str) -> ShieldResult<&ShapeVariation> {
        self.resolve(ShapeSelection {
            category: Some(DEFAULT_CATEGORY),
            variation: Some(variant),
            legacy: None,
        })
        .map(|r| r.shape)
    }

    fn lookup_legacy(&self, name: &str) -> Option<ResolvedShape<'_>> {
        if let Some((ck, cat)) = self.categories.get_key_value(name) {
            let (vk, v) = cat.variations.first()?;
            return Some(resolved(ck, vk, v));
        }
        if let Some((cat_key, var_key)) = name.split_once('-') {
            if let Some((ck, cat)) = self.categories.get_key_value(cat_key) {
                if let Some((vk, v)) = cat.variations.get_key_value(var_key) {
                    return Some(resolved(ck, vk, v));
                }
            }
        }
        self.categories.iter().find_map(|(ck, cat)| {
            cat.variations
                .get_key_value(name)
                .map(|(vk, v)| resolved(ck, vk, v))
        })
    }

    fn default_shape(&self) -> ShieldResult<ResolvedShape<'_>> {
        if let Some(v) = self.variation(DEFAULT_CATEGORY, DEFAULT_VARIATION) {
            return Ok(ResolvedShape {
                category: DEFAULT_CATEGORY,
                variation: DEFAULT_VARIATION,
                shape: v,
            });
        }
        self.categories
            .iter()
            .find_map(|(ck, cat)| cat.variations.first().map(|(vk, v)| resolved(ck, vk, v)))
            .ok_or_else(|| ShieldError::registry("shape registry is empty"))
    }
}

fn resolved<'a>(category: &'a str, variation: &'a str, shape: &'a ShapeVariation) -> ResolvedShape<'a> {
    ResolvedShape {
        category,
        variation,
        shape,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shapes/registry.rs"]
mod tests;
