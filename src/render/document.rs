use std::fmt::{self, Write as _};

use base64::Engine as _;

use crate::design::config::{DECORATIVE_OPACITY, DesignConfig};
use crate::foundation::core::{Point, affine_attr, inset_affine};
use crate::foundation::error::{ShieldError, ShieldResult};
use crate::grid::QrGrid;
use crate::paint::palette::Palette;
use crate::render::GridLayout;
use crate::render::decor;
use crate::render::finder::{is_finder_cell, write_finders};
use crate::render::pattern::{CellMask, marks};
use crate::render::primitives::Mark;
use crate::render::svg::{escape_xml, path_data};
use crate::shapes::registry::{ShapeRegistry, ShapeVariation};

/// Prefix of the data URI form of a document.
pub const DATA_URI_PREFIX: &str = "data:image/svg+xml;base64,";

/// A finished, self-contained SVG document.
#[derive(Clone, Debug, PartialEq)]
pub struct SvgDocument {
    svg: String,
    width: f64,
    height: f64,
}

impl SvgDocument {
    pub(crate) fn new(svg: String, width: f64, height: f64) -> Self {
        Self { svg, width, height }
    }

    /// Document markup.
    pub fn as_str(&self) -> &str {
        &self.svg
    }

    /// Consume the document, returning its markup.
    pub fn into_string(self) -> String {
        self.svg
    }

    /// UTF-8 bytes of the markup.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.svg.as_bytes().to_vec()
    }

    /// Base64 data URI suitable for an `<img src>`.
    pub fn to_data_uri(&self) -> String {
        let encoded = base64::engine::general_purpose::STANDARD.encode(self.svg.as_bytes());
        format!("{DATA_URI_PREFIX}{encoded}")
    }

    /// View box width in user units.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// View box height in user units.
    pub fn height(&self) -> f64 {
        self.height
    }
}

impl fmt::Display for SvgDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.svg)
    }
}

/// Render `grid` with the styling in `config`, using shapes from `registry`.
///
/// Output is deterministic: identical inputs produce byte-identical documents. Unknown shape,
/// preset and style names fall back to defaults; an empty grid or a gradient without colors is
/// rejected.
#[tracing::instrument(skip(grid, config, registry), fields(size = grid.size()))]
pub fn render_svg<G: QrGrid>(
    grid: &G,
    config: &DesignConfig,
    registry: &ShapeRegistry,
) -> ShieldResult<SvgDocument> {
    let n = grid.size();
    if n == 0 {
        return Err(ShieldError::config("cannot render an empty grid"));
    }

    let cfg = config.clamped();
    let resolved = registry.resolve(cfg.shape_selection())?;
    let shape = resolved.shape;
    let ids = Ids::new(&cfg.id_prefix);
    let palette = Palette::resolve(
        cfg.colors.as_ref(),
        &cfg.preset,
        cfg.gradient.as_ref(),
        &ids.gradient,
    )?;

    let canvas = shape.canvas();
    let layout = GridLayout::fit(n, shape.data_area);
    let modules = data_mask(grid, &layout, &cfg);

    let mut out = String::with_capacity(4096 + n * n * 64);
    let _ = write!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">",
        w = canvas.width,
        h = canvas.height
    );

    if shape.bare {
        write_bare(&mut out, grid, &layout, &modules, &cfg, &palette, shape, &ids)?;
    } else {
        write_framed(&mut out, grid, &layout, &modules, &cfg, &palette, shape, &ids)?;
    }
    out.push_str("</svg>");

    tracing::debug!(
        category = resolved.category,
        variation = resolved.variation,
        modules = modules.active_count(),
        bytes = out.len(),
        "rendered document"
    );
    Ok(SvgDocument::new(out, canvas.width, canvas.height))
}

struct Ids {
    clip: String,
    decor_clip: String,
    gradient: String,
    glow: String,
}

impl Ids {
    fn new(prefix: &str) -> Self {
        Self {
            clip: format!("{prefix}-clip"),
            decor_clip: format!("{prefix}-decor-clip"),
            gradient: format!("{prefix}-gradient"),
            glow: format!("{prefix}-glow"),
        }
    }
}

/// Dark data cells that are drawn as modules: finder cells and the cleared center are excluded.
fn data_mask<G: QrGrid>(grid: &G, layout: &GridLayout, cfg: &DesignConfig) -> CellMask {
    let n = layout.n;
    let side = layout.cell * n as f64;
    let center = Point::new(layout.origin.x + side / 2.0, layout.origin.y + side / 2.0);
    let clear_radius = cfg.center_size * side;
    CellMask::from_fn(n, n, layout.origin, layout.cell, |r, c| {
        if !grid.get(r, c) || is_finder_cell(n, r, c) {
            return false;
        }
        !(cfg.center_clear && layout.cell_center(r, c).distance(center) < clear_radius)
    })
}

fn write_group(out: &mut String, open: &str, items: &[Mark]) {
    out.push_str(open);
    for m in items {
        m.write_svg(out, None);
    }
    out.push_str("</g>");
}

#[allow(clippy::too_many_arguments)]
fn write_bare<G: QrGrid>(
    out: &mut String,
    grid: &G,
    layout: &GridLayout,
    modules: &CellMask,
    cfg: &DesignConfig,
    palette: &Palette,
    shape: &ShapeVariation,
    ids: &Ids,
) -> ShieldResult<()> {
    if let Some(g) = &cfg.gradient {
        let _ = write!(out, "<defs>{}</defs>", g.to_svg_def(&ids.gradient)?);
    }

    // The panel is always painted; a transparent background picks the contrasting panel color.
    let panel = palette.background_fill().unwrap_or_else(|| {
        let contrast = if palette.dark { "#000000" } else { "#ffffff" };
        contrast.to_owned()
    });
    let _ = write!(
        out,
        "<rect class=\"background\" x=\"0\" y=\"0\" width=\"{}\" height=\"{}\" fill=\"{panel}\"/>",
        shape.width, shape.height
    );

    let fg = palette.foreground.fill();
    write_group(
        out,
        &format!("<g class=\"modules\" fill=\"{fg}\">"),
        &marks(modules, cfg.module_style, cfg.module_scale),
    );
    write_finders(
        out,
        grid,
        layout,
        cfg.finder_style,
        cfg.finder_mode,
        cfg.finder_scale,
        palette,
    );
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn write_framed<G: QrGrid>(
    out: &mut String,
    grid: &G,
    layout: &GridLayout,
    modules: &CellMask,
    cfg: &DesignConfig,
    palette: &Palette,
    shape: &ShapeVariation,
    ids: &Ids,
) -> ShieldResult<()> {
    let outline = shape.outline_path()?;
    let d = path_data(&outline);
    let bounds = shape.outline_bounds();

    // Definitions.
    out.push_str("<defs>");
    let _ = write!(out, "<clipPath id=\"{}\"><path d=\"{d}\"/></clipPath>", ids.clip);
    if cfg.decorative {
        let inset = affine_attr(inset_affine(bounds, cfg.decorative_inset));
        let _ = write!(
            out,
            "<clipPath id=\"{}\"><path d=\"{d}\" transform=\"{inset}\"/></clipPath>",
            ids.decor_clip
        );
    }
    if let Some(g) = &cfg.gradient {
        out.push_str(&g.to_svg_def(&ids.gradient)?);
    }
    if cfg.glow {
        let _ = write!(
            out,
            "<filter id=\"{}\" x=\"-50%\" y=\"-50%\" width=\"200%\" height=\"200%\">\
             <feGaussianBlur in=\"SourceGraphic\" stdDeviation=\"{:.2}\" result=\"blur\"/>\
             <feMerge><feMergeNode in=\"blur\"/><feMergeNode in=\"SourceGraphic\"/></feMerge>\
             </filter>",
            ids.glow, cfg.glow_radius
        );
    }
    out.push_str("</defs>");

    // Background shape and quiet-zone panel.
    if let Some(bg) = palette.background_fill() {
        let _ = write!(out, "<path class=\"background\" d=\"{d}\" fill=\"{bg}\"/>");
        let q = cfg.quiet_zone * layout.cell;
        let size = layout.cell * layout.n as f64 + 2.0 * q;
        let _ = write!(
            out,
            "<rect class=\"quiet-zone\" x=\"{:.2}\" y=\"{:.2}\" width=\"{size:.2}\" height=\"{size:.2}\" fill=\"{bg}\" clip-path=\"url(#{})\"/>",
            layout.origin.x - q,
            layout.origin.y - q,
            ids.clip
        );
    }

    // Modules and finders.
    let fg = palette.foreground.fill();
    let _ = write!(
        out,
        "<g class=\"modules\" clip-path=\"url(#{})\" fill=\"{fg}\">",
        ids.clip
    );
    for m in &marks(modules, cfg.module_style, cfg.module_scale) {
        m.write_svg(out, None);
    }
    write_finders(
        out,
        grid,
        layout,
        cfg.finder_style,
        cfg.finder_mode,
        cfg.finder_scale,
        palette,
    );
    out.push_str("</g>");

    if cfg.decorative {
        let mask = decor::sample(
            shape.canvas(),
            shape.data_area,
            layout.cell,
            cfg.decorative_density,
            cfg.decorative_margin,
        );
        let style = cfg.decorative_style.unwrap_or(cfg.module_style);
        let fill = cfg
            .decorative_color
            .as_deref()
            .map_or_else(|| fg.clone(), escape_xml);
        write_group(
            out,
            &format!(
                "<g class=\"decorative\" clip-path=\"url(#{})\" opacity=\"{DECORATIVE_OPACITY}\" fill=\"{fill}\">",
                ids.decor_clip
            ),
            &marks(&mask, style, cfg.decorative_scale),
        );
    }

    let stroke = escape_xml(&palette.outline);
    let width = palette.outline_width;
    if cfg.inner_border {
        let inset = affine_attr(inset_affine(bounds, cfg.inner_border_inset));
        let _ = write!(
            out,
            "<path class=\"inner-border\" d=\"{d}\" transform=\"{inset}\" fill=\"none\" stroke=\"{stroke}\" stroke-width=\"{:.2}\" vector-effect=\"non-scaling-stroke\"/>",
            width / 2.0
        );
    }

    let filter = if cfg.glow {
        format!(" filter=\"url(#{})\"", ids.glow)
    } else {
        String::new()
    };
    let _ = write!(
        out,
        "<path class=\"outline\" d=\"{d}\" fill=\"none\" stroke=\"{stroke}\" stroke-width=\"{width:.2}\" stroke-linejoin=\"round\"{filter}/>"
    );
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/document.rs"]
mod tests;
