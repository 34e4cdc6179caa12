//! qrshield renders QR codes as styled, self-contained SVG documents.
//!
//! A QR grid (from [`encode_text`] or any [`QrGrid`] implementation) is drawn inside a decorative
//! outline chosen from a [`ShapeRegistry`], with per-module shape substitution, restyled finder
//! patterns, gradients, glow and a deterministic decorative fill. A separate sticker engine
//! computes container geometry and frame markup for wrapping a rendered QR.
//!
//! # Pipeline overview
//!
//! 1. **Resolve**: `DesignConfig -> (ShapeVariation, Palette)` with silent fallbacks for unknown
//!    names
//! 2. **Compose**: grid cells -> module marks (per cell, merged bars, or pond blobs), finder
//!    marks, decorative marks
//! 3. **Assemble**: layers in fixed order into one [`SvgDocument`]
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: identical inputs give byte-identical documents, decorative fill included.
//! - **No global state**: the shape registry is an explicit value passed by reference.
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod design;
mod foundation;
mod grid;
mod paint;
mod render;
mod shapes;
mod sticker;

pub use design::builder::DesignBuilder;
pub use design::config::{DECORATIVE_OPACITY, DesignConfig};
pub use design::style::{FinderMode, FinderStyle, ModuleStyle};
pub use foundation::core::{Affine, BezPath, Canvas, DataArea, Point, Rect, Vec2};
pub use foundation::error::{ShieldError, ShieldResult};
#[cfg(feature = "encode")]
pub use grid::encode::{EccLevel, encode_text};
pub use grid::{FINDER_SIZE, ModuleGrid, QrGrid};
pub use paint::gradient::{GradientKind, GradientSpec};
pub use paint::palette::{CustomColors, DEFAULT_OUTLINE_WIDTH, Paint, Palette};
pub use paint::preset::{ColorPreset, DEFAULT_PRESET, preset, preset_names};
pub use render::document::{DATA_URI_PREFIX, SvgDocument, render_svg};
pub use shapes::registry::{
    DEFAULT_CATEGORY, DEFAULT_VARIATION, ResolvedShape, ShapeCategory, ShapeRegistry,
    ShapeSelection, ShapeVariation,
};
pub use sticker::config::{CaptionPosition, CaptionText, ContainerShape, ShapeKind, StickerConfig};
pub use sticker::frame::frame_svg;
pub use sticker::geometry::{
    ArcCurvature, QrPlacement, ShieldPlacement, StickerGeometry, border_radius, shield_transform,
};
