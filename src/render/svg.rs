//! Small SVG text helpers. Numbers are written with two decimals so output is stable.

use std::fmt::Write as _;

use kurbo::PathEl;

use crate::foundation::core::BezPath;

/// Escape text for use in attribute values and character data.
pub(crate) fn escape_xml(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Serialize a path as SVG path data.
pub(crate) fn path_data(path: &BezPath) -> String {
    let mut d = String::new();
    for el in path.elements() {
        if !d.is_empty() {
            d.push(' ');
        }
        let _ = match *el {
            PathEl::MoveTo(p) => write!(d, "M{:.2} {:.2}", p.x, p.y),
            PathEl::LineTo(p) => write!(d, "L{:.2} {:.2}", p.x, p.y),
            PathEl::QuadTo(c, p) => write!(d, "Q{:.2} {:.2} {:.2} {:.2}", c.x, c.y, p.x, p.y),
            PathEl::CurveTo(c1, c2, p) => write!(
                d,
                "C{:.2} {:.2} {:.2} {:.2} {:.2} {:.2}",
                c1.x, c1.y, c2.x, c2.y, p.x, p.y
            ),
            PathEl::ClosePath => write!(d, "Z"),
        };
    }
    d
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
