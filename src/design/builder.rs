use crate::design::config::DesignConfig;
use crate::design::style::{FinderMode, FinderStyle, ModuleStyle};
use crate::foundation::error::ShieldResult;
use crate::paint::gradient::GradientSpec;
use crate::paint::palette::CustomColors;

/// Builder for [`DesignConfig`].
///
/// Starts from [`DesignConfig::default`]; every setter overrides one field.
#[derive(Clone, Debug, Default)]
pub struct DesignBuilder {
    config: DesignConfig,
}

impl DesignBuilder {
    /// Create a builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a shape by category and variation.
    pub fn shape(mut self, category: impl Into<String>, variation: impl Into<String>) -> Self {
        self.config.category = Some(category.into());
        self.config.variation = Some(variation.into());
        self
    }

    /// Select a shape through the legacy single-name selector.
    pub fn legacy_shape(mut self, name: impl Into<String>) -> Self {
        self.config.shape = Some(name.into());
        self
    }

    /// Set module style and scale.
    pub fn modules(mut self, style: ModuleStyle, scale: f64) -> Self {
        self.config.module_style = style;
        self.config.module_scale = scale;
        self
    }

    /// Set finder style, scale and mode.
    pub fn finders(mut self, style: FinderStyle, scale: f64, mode: FinderMode) -> Self {
        self.config.finder_style = style;
        self.config.finder_scale = scale;
        self.config.finder_mode = mode;
        self
    }

    /// Use a named preset.
    pub fn preset(mut self, name: impl Into<String>) -> Self {
        self.config.preset = name.into();
        self
    }

    /// Replace the preset with explicit colors.
    pub fn colors(mut self, colors: CustomColors) -> Self {
        self.config.colors = Some(colors);
        self
    }

    /// Paint the foreground with a gradient.
    pub fn gradient(mut self, gradient: GradientSpec) -> Self {
        self.config.gradient = Some(gradient);
        self
    }

    /// Toggle the outline glow.
    pub fn glow(mut self, on: bool) -> Self {
        self.config.glow = on;
        self
    }

    /// Toggle the inner border.
    pub fn inner_border(mut self, on: bool) -> Self {
        self.config.inner_border = on;
        self
    }

    /// Clear a circular center zone of the given relative radius.
    pub fn center_clear(mut self, size: f64) -> Self {
        self.config.center_clear = true;
        self.config.center_size = size;
        self
    }

    /// Enable the decorative fill with the given density and scale.
    pub fn decorative(mut self, density: f64, scale: f64) -> Self {
        self.config.decorative = true;
        self.config.decorative_density = density;
        self.config.decorative_scale = scale;
        self
    }

    /// Set the element id prefix.
    pub fn id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.id_prefix = prefix.into();
        self
    }

    /// Validate and return the configuration.
    pub fn build(self) -> ShieldResult<DesignConfig> {
        if let Some(g) = &self.config.gradient {
            g.validate()?;
        }
        Ok(self.config)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/design/builder.rs"]
mod tests;
