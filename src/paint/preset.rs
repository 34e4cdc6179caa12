use serde::Serialize;

/// Preset used when no (or an unknown) preset name is given.
pub const DEFAULT_PRESET: &str = "cyber";

/// A coordinated bundle of colors.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorPreset {
    /// Canvas background.
    pub background: &'static str,
    /// Data module color.
    pub foreground: &'static str,
    /// Outline stroke color.
    pub outline: &'static str,
    /// Finder outer ring color; the foreground when unset.
    pub finder_outer: Option<&'static str>,
    /// Finder center color; the foreground when unset.
    pub finder_inner: Option<&'static str>,
    /// Outline stroke width.
    pub outline_width: f64,
    /// Light modules on a dark background.
    pub dark: bool,
}

const PRESETS: &[(&str, ColorPreset)] = &[
    (
        "cyber",
        ColorPreset {
            background: "#0a0e27",
            foreground: "#00f0ff",
            outline: "#ff00ff",
            finder_outer: Some("#ff00ff"),
            finder_inner: Some("#00f0ff"),
            outline_width: 3.0,
            dark: true,
        },
    ),
    (
        "classic",
        ColorPreset {
            background: "#ffffff",
            foreground: "#000000",
            outline: "#000000",
            finder_outer: None,
            finder_inner: None,
            outline_width: 2.0,
            dark: false,
        },
    ),
    (
        "ocean",
        ColorPreset {
            background: "#e6f4f1",
            foreground: "#0b4f6c",
            outline: "#01baef",
            finder_outer: Some("#0b4f6c"),
            finder_inner: Some("#01baef"),
            outline_width: 3.0,
            dark: false,
        },
    ),
    (
        "sunset",
        ColorPreset {
            background: "#fff4e6",
            foreground: "#c1440e",
            outline: "#f28c28",
            finder_outer: Some("#8c2f0a"),
            finder_inner: Some("#f28c28"),
            outline_width: 3.0,
            dark: false,
        },
    ),
    (
        "forest",
        ColorPreset {
            background: "#f1f7ed",
            foreground: "#1b4332",
            outline: "#40916c",
            finder_outer: None,
            finder_inner: Some("#40916c"),
            outline_width: 3.0,
            dark: false,
        },
    ),
    (
        "neon",
        ColorPreset {
            background: "#111111",
            foreground: "#39ff14",
            outline: "#ff073a",
            finder_outer: Some("#ff073a"),
            finder_inner: None,
            outline_width: 4.0,
            dark: true,
        },
    ),
    (
        "royal",
        ColorPreset {
            background: "#1a1040",
            foreground: "#f5c518",
            outline: "#f5c518",
            finder_outer: None,
            finder_inner: Some("#ffffff"),
            outline_width: 4.0,
            dark: true,
        },
    ),
    (
        "midnight",
        ColorPreset {
            background: "#0d1117",
            foreground: "#c9d1d9",
            outline: "#58a6ff",
            finder_outer: Some("#58a6ff"),
            finder_inner: None,
            outline_width: 2.0,
            dark: true,
        },
    ),
];

/// Look up a preset by name.
pub fn preset(name: &str) -> Option<&'static ColorPreset> {
    PRESETS.iter().find(|(k, _)| *k == name).map(|(_, p)| p)
}

/// Preset names in catalogue order.
pub fn preset_names() -> impl Iterator<Item = &'static str> {
    PRESETS.iter().map(|(k, _)| *k)
}

/// Look up a preset, falling back to [`DEFAULT_PRESET`].
pub(crate) fn preset_or_default(name: &str) -> &'static ColorPreset {
    preset(name).unwrap_or_else(|| {
        tracing::debug!(preset = name, fallback = DEFAULT_PRESET, "unknown color preset");
        &PRESETS[0].1
    })
}
