//! Closed style sets. Unknown names deserialize to the documented fallback instead of failing.

use serde::{Deserialize, Serialize};

/// How data modules are drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ModuleStyle {
    /// Plain squares (fallback).
    #[default]
    Square,
    /// Squares with rounded corners.
    Rounded,
    /// Dots.
    Circle,
    /// Squares rotated by 45°.
    Diamond,
    /// Horizontal runs merged into capsules.
    HorizontalBars,
    /// Vertical runs merged into capsules.
    VerticalBars,
    /// Connected cells merged into soft blobs.
    Pond,
}

impl ModuleStyle {
    /// All styles in presentation order.
    pub const ALL: [Self; 7] = [
        Self::Square,
        Self::Rounded,
        Self::Circle,
        Self::Diamond,
        Self::HorizontalBars,
        Self::VerticalBars,
        Self::Pond,
    ];

    /// Canonical configuration name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Square => "square",
            Self::Rounded => "rounded",
            Self::Circle => "circle",
            Self::Diamond => "diamond",
            Self::HorizontalBars => "horizontal",
            Self::VerticalBars => "vertical",
            Self::Pond => "pond",
        }
    }

    /// Parse a style name; `None` for unknown names.
    pub fn parse(name: &str) -> Option<Self> {
        let style = match name.trim().to_ascii_lowercase().as_str() {
            "square" | "squares" => Self::Square,
            "rounded" | "rounded-square" | "roundedsquare" | "rounded_square" => Self::Rounded,
            "circle" | "circles" | "dot" | "dots" => Self::Circle,
            "diamond" | "diamonds" => Self::Diamond,
            "horizontal" | "horizontal-bars" | "horizontalbars" | "bars-horizontal" => {
                Self::HorizontalBars
            }
            "vertical" | "vertical-bars" | "verticalbars" | "bars-vertical" => Self::VerticalBars,
            "pond" | "liquid" => Self::Pond,
            _ => return None,
        };
        Some(style)
    }

    /// Single-cell primitive for non-merging styles.
    pub(crate) fn cell_shape(self) -> Option<CellShape> {
        match self {
            Self::Square => Some(CellShape::Square),
            Self::Rounded => Some(CellShape::Rounded),
            Self::Circle => Some(CellShape::Circle),
            Self::Diamond => Some(CellShape::Diamond),
            Self::HorizontalBars | Self::VerticalBars | Self::Pond => None,
        }
    }
}

impl From<String> for ModuleStyle {
    fn from(s: String) -> Self {
        Self::parse(&s).unwrap_or_else(|| {
            tracing::debug!(style = %s, "unknown module style, using square");
            Self::Square
        })
    }
}

impl From<ModuleStyle> for String {
    fn from(s: ModuleStyle) -> Self {
        s.name().to_owned()
    }
}

/// How finder cells (or whole finders in solid mode) are drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FinderStyle {
    /// Sharp squares (fallback).
    #[default]
    Square,
    /// Rounded squares.
    Rounded,
    /// Circles.
    Circle,
    /// Diamonds.
    Diamond,
}

impl FinderStyle {
    /// Canonical configuration name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Square => "square",
            Self::Rounded => "rounded",
            Self::Circle => "circle",
            Self::Diamond => "diamond",
        }
    }
}

impl From<String> for FinderStyle {
    fn from(s: String) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "square" => Self::Square,
            "rounded" | "rounded-square" => Self::Rounded,
            "circle" | "dot" => Self::Circle,
            "diamond" => Self::Diamond,
            _ => {
                tracing::debug!(style = %s, "unknown finder style, using square");
                Self::Square
            }
        }
    }
}

impl From<FinderStyle> for String {
    fn from(s: FinderStyle) -> Self {
        s.name().to_owned()
    }
}

/// Finder rendering mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FinderMode {
    /// Each finder cell is drawn like a data module (fallback).
    #[default]
    Pattern,
    /// Each finder is drawn as three concentric shapes.
    Solid,
}

impl From<String> for FinderMode {
    fn from(s: String) -> Self {
        if s.trim().eq_ignore_ascii_case("solid") {
            Self::Solid
        } else {
            Self::Pattern
        }
    }
}

impl From<FinderMode> for String {
    fn from(m: FinderMode) -> Self {
        match m {
            FinderMode::Pattern => "pattern".to_owned(),
            FinderMode::Solid => "solid".to_owned(),
        }
    }
}

/// Single-cell primitive shared by module, finder and decorative rendering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum CellShape {
    Square,
    Rounded,
    Circle,
    Diamond,
}

impl From<FinderStyle> for CellShape {
    fn from(s: FinderStyle) -> Self {
        match s {
            FinderStyle::Square => Self::Square,
            FinderStyle::Rounded => Self::Rounded,
            FinderStyle::Circle => Self::Circle,
            FinderStyle::Diamond => Self::Diamond,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/design/style.rs"]
mod tests;
