//! Minimal CSS color inspection used to classify custom palettes as light or dark.

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Rgb {
    pub(crate) r: f64,
    pub(crate) g: f64,
    pub(crate) b: f64,
}

// Luminance at which black and white text have equal contrast.
const LUMINANCE_SPLIT: f64 = 0.179;

/// Sentinel values that disable the background fill.
pub(crate) fn is_transparent(s: &str) -> bool {
    let s = s.trim();
    s.eq_ignore_ascii_case("transparent") || s.eq_ignore_ascii_case("none")
}

/// Parse `#rgb`, `#rrggbb`, `#rrggbbaa` or a handful of named colors.
pub(crate) fn parse_rgb(s: &str) -> Option<Rgb> {
    let s = s.trim();
    match s.to_ascii_lowercase().as_str() {
        "white" => return Some(Rgb::new(1.0, 1.0, 1.0)),
        "black" => return Some(Rgb::new(0.0, 0.0, 0.0)),
        _ => {}
    }
    let hex = s.strip_prefix('#')?;

    fn channel(pair: &str) -> Option<f64> {
        u8::from_str_radix(pair, 16)
            .ok()
            .map(|v| f64::from(v) / 255.0)
    }

    match hex.len() {
        3 => {
            let mut it = hex.chars().map(|c| {
                let d = c.to_digit(16)? as u8;
                Some(f64::from(d * 17) / 255.0)
            });
            Some(Rgb::new(it.next()??, it.next()??, it.next()??))
        }
        6 | 8 => Some(Rgb::new(
            channel(hex.get(0..2)?)?,
            channel(hex.get(2..4)?)?,
            channel(hex.get(4..6)?)?,
        )),
        _ => None,
    }
}

impl Rgb {
    fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// WCAG relative luminance.
    pub(crate) fn luminance(self) -> f64 {
        fn lin(c: f64) -> f64 {
            if c <= 0.039_28 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        0.2126 * lin(self.r) + 0.7152 * lin(self.g) + 0.0722 * lin(self.b)
    }
}

/// Light-on-dark classification for a custom palette.
///
/// Decided by the background when it parses, otherwise by the foreground.
pub(crate) fn is_dark_palette(background: &str, foreground: &str) -> bool {
    if let Some(bg) = parse_rgb(background) {
        return bg.luminance() < LUMINANCE_SPLIT;
    }
    parse_rgb(foreground).is_some_and(|fg| fg.luminance() > LUMINANCE_SPLIT)
}

#[cfg(test)]
#[path = "../../tests/unit/paint/color.rs"]
mod tests;
