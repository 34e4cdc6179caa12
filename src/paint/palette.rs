use serde::{Deserialize, Serialize};

use crate::foundation::error::ShieldResult;
use crate::paint::color::{is_dark_palette, is_transparent};
use crate::paint::gradient::GradientSpec;
use crate::paint::preset::preset_or_default;
use crate::render::svg::escape_xml;

/// Outline width used when custom colors do not specify one.
pub const DEFAULT_OUTLINE_WIDTH: f64 = 3.0;

/// Explicit colors that replace the preset entirely.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomColors {
    /// Canvas background, or `"transparent"` / `"none"`.
    pub background: String,
    /// Data module color.
    pub foreground: String,
    /// Outline stroke color; the foreground when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outline: Option<String>,
    /// Finder outer ring color; the foreground paint when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finder_outer: Option<String>,
    /// Finder center color; the foreground paint when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finder_inner: Option<String>,
    /// Outline stroke width.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outline_width: Option<f64>,
}

/// A concrete fill value.
#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
    /// Plain CSS color.
    Color(String),
    /// Reference to a gradient definition by element id.
    Gradient(String),
}

impl Paint {
    /// Value for a `fill` attribute, XML-escaped.
    pub fn fill(&self) -> String {
        match self {
            Self::Color(c) => escape_xml(c),
            Self::Gradient(id) => format!("url(#{id})"),
        }
    }
}

/// Fully resolved colors for one document.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    /// Background color; `None` when transparent.
    pub background: Option<String>,
    /// Data module paint.
    pub foreground: Paint,
    /// Outline stroke color.
    pub outline: String,
    /// Finder outer ring paint.
    pub finder_outer: Paint,
    /// Finder center paint.
    pub finder_inner: Paint,
    /// Outline stroke width.
    pub outline_width: f64,
    /// Light modules on a dark background.
    pub dark: bool,
}

impl Palette {
    /// Resolve colors: custom colors override the preset; a gradient replaces the foreground.
    ///
    /// `gradient_id` is the element id the gradient definition will be emitted under. A gradient
    /// without colors is rejected.
    pub fn resolve(
        custom: Option<&CustomColors>,
        preset_name: &str,
        gradient: Option<&GradientSpec>,
        gradient_id: &str,
    ) -> ShieldResult<Self> {
        if let Some(g) = gradient {
            g.validate()?;
        }

        let (background, foreground, outline, finder_outer, finder_inner, outline_width, dark) =
            match custom {
                Some(c) => (
                    c.background.clone(),
                    c.foreground.clone(),
                    c.outline.clone().unwrap_or_else(|| c.foreground.clone()),
                    c.finder_outer.clone(),
                    c.finder_inner.clone(),
                    c.outline_width.unwrap_or(DEFAULT_OUTLINE_WIDTH),
                    is_dark_palette(&c.background, &c.foreground),
                ),
                None => {
                    let p = preset_or_default(preset_name);
                    (
                        p.background.to_owned(),
                        p.foreground.to_owned(),
                        p.outline.to_owned(),
                        p.finder_outer.map(str::to_owned),
                        p.finder_inner.map(str::to_owned),
                        p.outline_width,
                        p.dark,
                    )
                }
            };

        let foreground = match gradient {
            Some(_) => Paint::Gradient(gradient_id.to_owned()),
            None => Paint::Color(foreground),
        };
        let finder = |c: Option<String>| c.map_or_else(|| foreground.clone(), Paint::Color);

        Ok(Self {
            background: (!is_transparent(&background)).then_some(background),
            finder_outer: finder(finder_outer),
            finder_inner: finder(finder_inner),
            foreground,
            outline,
            outline_width: if outline_width.is_finite() {
                outline_width.max(0.0)
            } else {
                DEFAULT_OUTLINE_WIDTH
            },
            dark,
        })
    }

    /// `true` when the background fill is disabled.
    pub fn is_transparent(&self) -> bool {
        self.background.is_none()
    }

    /// Escaped background fill, if any.
    pub fn background_fill(&self) -> Option<String> {
        self.background.as_deref().map(escape_xml)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/paint/palette.rs"]
mod tests;
