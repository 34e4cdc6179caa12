use std::fmt::Write as _;

use crate::foundation::core::{Point, Rect};
use crate::foundation::error::ShieldResult;
use crate::render::document::SvgDocument;
use crate::render::svg::{escape_xml, path_data};
use crate::shapes::registry::ShapeRegistry;
use crate::sticker::config::{CaptionPosition, ContainerShape, ShapeKind, StickerConfig};
use crate::sticker::geometry::{ArcCurvature, StickerGeometry, shield_transform};

struct Fill<'a> {
    fill: &'a str,
    stroke: &'a str,
    stroke_width: f64,
}

/// Frame document for a sticker: outer container, optional inner container and caption.
///
/// The QR itself is not part of the frame; callers place it using
/// [`StickerGeometry::qr`](crate::StickerGeometry).
#[tracing::instrument(skip(cfg, registry))]
pub fn frame_svg(cfg: &StickerConfig, registry: &ShapeRegistry) -> ShieldResult<SvgDocument> {
    let geo = StickerGeometry::compute(cfg, registry)?;
    let mut out = String::new();
    let _ = write!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w:.2}\" height=\"{h:.2}\" viewBox=\"0 0 {w:.2} {h:.2}\">",
        w = geo.width,
        h = geo.height
    );

    let caption = cfg.caption();
    let caption_id = cfg.caption_path_id();
    if let Some(text) = caption {
        let d = caption_arc(&geo, text.position);
        let _ = write!(
            out,
            "<defs><path id=\"{caption_id}\" d=\"{d}\" fill=\"none\"/></defs>"
        );
    }

    let outer_fill = escape_xml(&cfg.outer_color);
    let outer_stroke = escape_xml(&cfg.outer_border_color);
    write_container(
        &mut out,
        "outer",
        &cfg.outer,
        geo.outer_rect(),
        &Fill {
            fill: &outer_fill,
            stroke: &outer_stroke,
            stroke_width: cfg.outer_border_width,
        },
        registry,
    )?;

    if let Some(inner) = &cfg.inner {
        let inner_fill = escape_xml(&cfg.inner_color);
        let inner_stroke = escape_xml(&cfg.inner_border_color);
        write_container(
            &mut out,
            "inner",
            inner,
            geo.inner_rect(),
            &Fill {
                fill: &inner_fill,
                stroke: &inner_stroke,
                stroke_width: cfg.inner_border_width,
            },
            registry,
        )?;
    }

    if let Some(text) = caption {
        let _ = write!(
            out,
            "<text class=\"caption\" fill=\"{}\" font-size=\"{:.2}\" font-family=\"{}\" letter-spacing=\"{:.2}\" text-anchor=\"middle\">\
             <textPath href=\"#{caption_id}\" startOffset=\"50%\">{}</textPath></text>",
            escape_xml(&cfg.text_color),
            text.font_size,
            escape_xml(&text.font_family),
            text.letter_spacing,
            escape_xml(&text.content)
        );
    }

    out.push_str("</svg>");
    Ok(SvgDocument::new(out, geo.width, geo.height))
}

fn write_container(
    out: &mut String,
    class: &str,
    shape: &ContainerShape,
    bounds: Rect,
    paint: &Fill<'_>,
    registry: &ShapeRegistry,
) -> ShieldResult<()> {
    let style = format!(
        "fill=\"{}\" stroke=\"{}\" stroke-width=\"{:.2}\"",
        paint.fill, paint.stroke, paint.stroke_width
    );
    let c = bounds.center();
    let _ = match shape.kind {
        ShapeKind::Circle => write!(
            out,
            "<ellipse class=\"{class}\" cx=\"{:.2}\" cy=\"{:.2}\" rx=\"{:.2}\" ry=\"{:.2}\" {style}/>",
            c.x,
            c.y,
            bounds.width() / 2.0,
            bounds.height() / 2.0
        ),
        ShapeKind::Square | ShapeKind::Portrait | ShapeKind::Landscape => write!(
            out,
            "<rect class=\"{class}\" x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" {style}/>",
            bounds.x0,
            bounds.y0,
            bounds.width(),
            bounds.height()
        ),
        ShapeKind::Shield => {
            let outline = registry.shield(&shape.shield)?.outline_path()?;
            let placement = shield_transform(&shape.shield, bounds, registry)?;
            write!(
                out,
                "<path class=\"{class}\" d=\"{}\" transform=\"{}\" vector-effect=\"non-scaling-stroke\" {style}/>",
                path_data(&outline),
                placement.matrix
            )
        }
    };
    Ok(())
}

/// Caption baseline through the point `text_arc_radius` above or below the center.
///
/// Outward arcs follow a circle about the canvas center; inverted arcs use the mirror circle,
/// so the baseline bends away from the container.
fn caption_arc(geo: &StickerGeometry, position: CaptionPosition) -> String {
    let c = geo.center();
    let r = geo.text_arc_radius.abs().max(1.0);
    // +1 places the baseline below the center.
    let side = match position {
        CaptionPosition::Top => -1.0,
        CaptionPosition::Bottom => 1.0,
    };
    let (y, sweep) = match geo.curvature {
        ArcCurvature::Flat => {
            let y = c.y + side * r;
            return format!(
                "M{:.2} {y:.2} L{:.2} {y:.2}",
                c.x - r,
                c.x + r
            );
        }
        ArcCurvature::Outward => (c.y, if side < 0.0 { 1 } else { 0 }),
        ArcCurvature::Inverted => (c.y + side * 2.0 * r, if side < 0.0 { 0 } else { 1 }),
    };
    let start = Point::new(c.x - r, y);
    let end = Point::new(c.x + r, y);
    format!(
        "M{:.2} {:.2} A{r:.2} {r:.2} 0 0 {sweep} {:.2} {:.2}",
        start.x, start.y, end.x, end.y
    )
}

#[cfg(test)]
#[path = "../../tests/unit/sticker/frame.rs"]
mod tests;
