use std::{fs::File, io::BufReader, path::Path};

use serde::{Deserialize, Serialize};

use crate::design::config::is_id_char;
use crate::foundation::error::{ShieldError, ShieldResult};
use crate::shapes::registry::DEFAULT_VARIATION;

/// Silhouette of a sticker container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ShapeKind {
    /// 1:1 square (fallback).
    #[default]
    Square,
    /// 1:1 circle.
    Circle,
    /// 3:4, taller than wide.
    Portrait,
    /// 4:3, wider than tall.
    Landscape,
    /// A shield outline from the shape registry.
    Shield,
}

impl ShapeKind {
    /// Canonical configuration name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Square => "square",
            Self::Circle => "circle",
            Self::Portrait => "portrait",
            Self::Landscape => "landscape",
            Self::Shield => "shield",
        }
    }
}

impl From<String> for ShapeKind {
    fn from(s: String) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "square" => Self::Square,
            "circle" => Self::Circle,
            "portrait" => Self::Portrait,
            "landscape" => Self::Landscape,
            "shield" => Self::Shield,
            _ => {
                tracing::debug!(shape = %s, "unknown container shape, using square");
                Self::Square
            }
        }
    }
}

impl From<ShapeKind> for String {
    fn from(k: ShapeKind) -> Self {
        k.name().to_owned()
    }
}

/// A container silhouette; `shield` names the variation used when `kind` is [`ShapeKind::Shield`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContainerShape {
    /// Silhouette kind.
    pub kind: ShapeKind,
    /// Shield variation key.
    pub shield: String,
}

impl Default for ContainerShape {
    fn default() -> Self {
        Self {
            kind: ShapeKind::Square,
            shield: DEFAULT_VARIATION.to_owned(),
        }
    }
}

impl ContainerShape {
    /// Container of the given kind with the default shield variation.
    pub fn new(kind: ShapeKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// Shield container using `variation`.
    pub fn shield(variation: impl Into<String>) -> Self {
        Self {
            kind: ShapeKind::Shield,
            shield: variation.into(),
        }
    }
}

/// Where the caption sits relative to the container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CaptionPosition {
    /// Above the container center.
    Top,
    /// Below the container center (fallback).
    #[default]
    Bottom,
}

impl From<String> for CaptionPosition {
    fn from(s: String) -> Self {
        if s.trim().eq_ignore_ascii_case("top") {
            Self::Top
        } else {
            Self::Bottom
        }
    }
}

impl From<CaptionPosition> for String {
    fn from(p: CaptionPosition) -> Self {
        match p {
            CaptionPosition::Top => "top".to_owned(),
            CaptionPosition::Bottom => "bottom".to_owned(),
        }
    }
}

/// Curved caption text.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CaptionText {
    /// Text content; nothing is drawn when empty.
    pub content: String,
    /// Font size in user units.
    pub font_size: f64,
    /// CSS font family list.
    pub font_family: String,
    /// Signed offset added to the outer half-height to get the arc radius.
    /// Zero draws a straight baseline, negative values invert the curve.
    pub arc_offset: f64,
    /// Top or bottom placement.
    pub position: CaptionPosition,
    /// Extra spacing between glyphs.
    pub letter_spacing: f64,
}

impl Default for CaptionText {
    fn default() -> Self {
        Self {
            content: String::new(),
            font_size: 24.0,
            font_family: "sans-serif".to_owned(),
            arc_offset: 0.0,
            position: CaptionPosition::Bottom,
            letter_spacing: 0.0,
        }
    }
}

/// Sticker container configuration. All keys are optional (camelCase in JSON).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StickerConfig {
    /// Canvas width; the height follows from the outer shape's aspect ratio.
    pub size: f64,
    /// Outer container.
    pub outer: ContainerShape,
    /// Inner container; when unset the inner region matches the outer shape and is not drawn.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inner: Option<ContainerShape>,
    /// Inner container size relative to the outer, clamped to `[0.1, 1]`.
    pub inner_size_ratio: f64,

    /// Outer fill.
    pub outer_color: String,
    /// Outer stroke color.
    pub outer_border_color: String,
    /// Outer stroke width.
    pub outer_border_width: f64,
    /// Inner fill.
    pub inner_color: String,
    /// Inner stroke color.
    pub inner_border_color: String,
    /// Inner stroke width.
    pub inner_border_width: f64,

    /// Caption text color.
    pub text_color: String,
    /// Optional curved caption.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<CaptionText>,

    /// Padding between the inner container and the QR square, as a fraction of the square.
    pub qr_padding: f64,
    /// QR zoom about the inner container center.
    pub qr_zoom: f64,

    /// Prefix for element ids in the frame document.
    pub id_prefix: String,
}

impl Default for StickerConfig {
    fn default() -> Self {
        Self {
            size: 400.0,
            outer: ContainerShape::new(ShapeKind::Circle),
            inner: None,
            inner_size_ratio: 0.78,
            outer_color: "#ffffff".to_owned(),
            outer_border_color: "#000000".to_owned(),
            outer_border_width: 4.0,
            inner_color: "#ffffff".to_owned(),
            inner_border_color: "#000000".to_owned(),
            inner_border_width: 2.0,
            text_color: "#000000".to_owned(),
            text: None,
            qr_padding: 0.05,
            qr_zoom: 1.0,
            id_prefix: "sticker".to_owned(),
        }
    }
}

impl StickerConfig {
    /// Parse a configuration from JSON text.
    pub fn from_json_str(s: &str) -> ShieldResult<Self> {
        serde_json::from_str(s)
            .map_err(|e| ShieldError::serde(format!("parse sticker config JSON: {e}")))
    }

    /// Parse a configuration from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> ShieldResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| ShieldError::serde(format!("parse sticker config JSON: {e}")))
    }

    /// Parse a configuration from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> ShieldResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ShieldError::config(format!("open sticker config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Shape that bounds the QR: the inner container when set, otherwise the outer one.
    pub fn inner_shape(&self) -> &ContainerShape {
        self.inner.as_ref().unwrap_or(&self.outer)
    }

    /// Id of the caption baseline path. Invalid or empty prefixes fall back to `sticker`.
    pub fn caption_path_id(&self) -> String {
        let prefix = self.id_prefix.as_str();
        if prefix.is_empty() || !prefix.chars().all(is_id_char) {
            tracing::debug!(prefix, "invalid sticker id prefix");
            return "sticker-caption-arc".to_owned();
        }
        format!("{prefix}-caption-arc")
    }

    /// Caption when one is set and not blank.
    pub fn caption(&self) -> Option<&CaptionText> {
        self.text.as_ref().filter(|t| !t.content.trim().is_empty())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sticker/config.rs"]
mod tests;
