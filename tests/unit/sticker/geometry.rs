use kurbo::Shape as _;

use super::*;
use crate::sticker::config::CaptionText;

fn registry() -> ShapeRegistry {
    ShapeRegistry::with_builtins()
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

fn with_outer(kind: ShapeKind) -> StickerConfig {
    StickerConfig {
        outer: ContainerShape::new(kind),
        ..StickerConfig::default()
    }
}

fn with_caption(offset: f64) -> StickerConfig {
    StickerConfig {
        text: Some(CaptionText {
            content: "HELLO".to_owned(),
            arc_offset: offset,
            ..CaptionText::default()
        }),
        ..StickerConfig::default()
    }
}

#[test]
fn aspect_follows_outer_kind() {
    let reg = registry();
    let g = StickerGeometry::compute(&with_outer(ShapeKind::Square), &reg).unwrap();
    assert_eq!((g.width, g.height), (400.0, 400.0));

    let g = StickerGeometry::compute(&with_outer(ShapeKind::Portrait), &reg).unwrap();
    assert!(approx(g.height, 400.0 * 4.0 / 3.0));

    let g = StickerGeometry::compute(&with_outer(ShapeKind::Landscape), &reg).unwrap();
    assert!(approx(g.height, 300.0));

    let g = StickerGeometry::compute(&with_outer(ShapeKind::Shield), &reg).unwrap();
    let b = reg.shield("classic").unwrap().outline_bounds();
    assert!(approx(g.height / g.width, b.height() / b.width()));
}

#[test]
fn circle_defaults() {
    let g = StickerGeometry::compute(&StickerConfig::default(), &registry()).unwrap();
    assert!(approx(g.outer_half_width, 198.0));
    assert!(approx(g.inner_half_width, 0.78 * 198.0));
    assert!(approx(g.inner_half_height, g.inner_half_width));

    let expected = 2.0 * 0.78 * 198.0 / std::f64::consts::SQRT_2 * 0.9;
    assert!(approx(g.qr_size, expected));
    assert!(approx(g.qr.left + g.qr.width / 2.0, 50.0));
    assert!(approx(g.qr.top + g.qr.height / 2.0, 50.0));
    assert!(approx(g.qr.width, expected / 4.0));
}

#[test]
fn inner_shape_is_matched_independently() {
    let reg = registry();
    let cfg = StickerConfig {
        outer: ContainerShape::shield("classic"),
        inner: Some(ContainerShape::shield("kite")),
        ..StickerConfig::default()
    };
    let g = StickerGeometry::compute(&cfg, &reg).unwrap();
    let kite = reg.shield("kite").unwrap().outline_bounds();
    assert!(approx(
        g.inner_half_height / g.inner_half_width,
        kite.height() / kite.width()
    ));
    assert!(g.inner_half_height <= g.outer_half_height + 1e-9);
    assert!(g.inner_half_width <= g.outer_half_width + 1e-9);
}

#[test]
fn shield_qr_lies_inside_inner_container() {
    let cfg = StickerConfig {
        outer: ContainerShape::shield("crest"),
        qr_padding: 0.0,
        ..StickerConfig::default()
    };
    let g = StickerGeometry::compute(&cfg, &registry()).unwrap();
    let inner = g.inner_rect();
    let qr = Rect::from_center_size(g.qr_center, (g.qr_size, g.qr_size));
    assert!(qr.x0 >= inner.x0 - 1e-9 && qr.x1 <= inner.x1 + 1e-9);
    assert!(qr.y0 >= inner.y0 - 1e-9 && qr.y1 <= inner.y1 + 1e-9);
}

#[test]
fn zoom_scales_about_inner_center() {
    let reg = registry();
    let base = StickerGeometry::compute(&with_outer(ShapeKind::Square), &reg).unwrap();
    let zoomed = StickerGeometry::compute(
        &StickerConfig {
            qr_zoom: 2.0,
            ..with_outer(ShapeKind::Square)
        },
        &reg,
    )
    .unwrap();
    assert!(approx(zoomed.qr_size, base.qr_size * 2.0));
    assert_eq!(zoomed.qr_center, base.qr_center);
}

#[test]
fn caption_offset_sets_radius_and_curvature() {
    let reg = registry();
    let flat = StickerGeometry::compute(&StickerConfig::default(), &reg).unwrap();
    assert_eq!(flat.curvature, ArcCurvature::Flat);
    assert!(approx(flat.text_arc_radius, flat.outer_half_height));

    let out = StickerGeometry::compute(&with_caption(15.0), &reg).unwrap();
    assert_eq!(out.curvature, ArcCurvature::Outward);
    assert!(approx(out.text_arc_radius, out.outer_half_height + 15.0));

    let inv = StickerGeometry::compute(&with_caption(-20.0), &reg).unwrap();
    assert_eq!(inv.curvature, ArcCurvature::Inverted);
    assert!(approx(inv.text_arc_radius, inv.outer_half_height - 20.0));
}

#[test]
fn rejects_non_positive_size() {
    for size in [0.0, -10.0, f64::NAN] {
        let cfg = StickerConfig {
            size,
            ..StickerConfig::default()
        };
        let err = StickerGeometry::compute(&cfg, &registry()).unwrap_err();
        assert!(matches!(err, ShieldError::Config(_)));
    }
}

#[test]
fn shield_transform_fits_bounds() {
    let reg = registry();
    let bounds = Rect::new(10.0, 20.0, 160.0, 220.0);
    let placement = shield_transform("modern", bounds, &reg).unwrap();
    let outline = reg.shield("modern").unwrap().outline_path().unwrap();
    let mapped = (placement.transform * outline).bounding_box();
    assert!(mapped.x0 >= bounds.x0 - 1e-6 && mapped.x1 <= bounds.x1 + 1e-6);
    assert!(mapped.y0 >= bounds.y0 - 1e-6 && mapped.y1 <= bounds.y1 + 1e-6);
    let touches_x = approx(mapped.width(), bounds.width());
    let touches_y = approx(mapped.height(), bounds.height());
    assert!(touches_x || touches_y);
    assert!(placement.matrix.starts_with("matrix("));
}

#[test]
fn unknown_shield_variant_falls_back() {
    let reg = registry();
    let bounds = Rect::new(0.0, 0.0, 100.0, 100.0);
    assert_eq!(
        shield_transform("nope", bounds, &reg).unwrap(),
        shield_transform("classic", bounds, &reg).unwrap()
    );
}

#[test]
fn border_radius_by_kind() {
    assert_eq!(border_radius(ShapeKind::Circle), "50%");
    assert_eq!(border_radius(ShapeKind::Square), "0");
    assert_eq!(border_radius(ShapeKind::Shield), "0");
}
