use kurbo::{PathEl, Shape as _};

use super::*;

fn mask_from(rows: &[&str]) -> CellMask {
    let cols = rows[0].len();
    CellMask::from_fn(rows.len(), cols, Point::ORIGIN, 10.0, |r, c| {
        rows[r].as_bytes()[c] == b'#'
    })
}

fn quad_count(path: &BezPath) -> usize {
    path.elements()
        .iter()
        .filter(|el| matches!(el, PathEl::QuadTo(..)))
        .count()
}

#[test]
fn runs_merge_along_axis() {
    let mask = mask_from(&["##.#", "#...", "#..#"]);
    let h = runs(&mask, Axis::Horizontal);
    assert_eq!(
        h,
        vec![
            Run { line: 0, start: 0, len: 2 },
            Run { line: 0, start: 3, len: 1 },
            Run { line: 1, start: 0, len: 1 },
            Run { line: 2, start: 0, len: 1 },
            Run { line: 2, start: 3, len: 1 },
        ]
    );
    let v = runs(&mask, Axis::Vertical);
    assert_eq!(v[0], Run { line: 0, start: 0, len: 3 });
    assert_eq!(v.len(), 4);
}

#[test]
fn horizontal_bars_are_fully_rounded() {
    let mask = mask_from(&["###."]);
    let bars = bar_marks(&mask, Axis::Horizontal, 0.8);
    assert_eq!(bars.len(), 1);
    match bars[0] {
        Mark::Rect { x, y, w, h, r } => {
            assert!((x - 1.0).abs() < 1e-9);
            assert!((y - 1.0).abs() < 1e-9);
            assert!((w - 28.0).abs() < 1e-9);
            assert!((h - 8.0).abs() < 1e-9);
            assert!((r - 4.0).abs() < 1e-9);
        }
        ref other => panic!("unexpected mark {other:?}"),
    }
}

#[test]
fn vertical_bars_span_columns() {
    let mask = mask_from(&["#.", "##", "#."]);
    let bars = bar_marks(&mask, Axis::Vertical, 1.0);
    assert_eq!(bars.len(), 2);
    assert_eq!(
        bars[0],
        Mark::Rect {
            x: 0.0,
            y: 0.0,
            w: 10.0,
            h: 30.0,
            r: 5.0
        }
    );
    assert_eq!(
        bars[1],
        Mark::Rect {
            x: 10.0,
            y: 10.0,
            w: 10.0,
            h: 10.0,
            r: 5.0
        }
    );
}

#[test]
fn components_are_four_connected() {
    let mask = mask_from(&["#.#", ".#.", "##."]);
    let comps = components(&mask);
    assert_eq!(comps.len(), 3);
    assert_eq!(comps[0], vec![(0, 0)]);
    assert_eq!(comps[1], vec![(0, 2)]);
    assert_eq!(comps[2], vec![(1, 1), (2, 0), (2, 1)]);
}

#[test]
fn isolated_pond_cells_are_fully_rounded_blobs() {
    let mask = mask_from(&["#.#.", ".#.#", "#.#."]);
    let marks = pond_marks(&mask, 1.0);
    assert_eq!(marks.len(), mask.active_count());
    for m in &marks {
        match m {
            Mark::Path { path, even_odd } => {
                assert!(!even_odd);
                assert_eq!(quad_count(path), 4);
            }
            other => panic!("unexpected mark {other:?}"),
        }
    }
}

#[test]
fn adjacent_pond_cells_meet_flush() {
    let mask = mask_from(&["##"]);
    let left = pond_cell(&mask, 0, 0, 1.0);
    let right = pond_cell(&mask, 0, 1, 1.0);
    assert_eq!(left.rect.x1, 10.0);
    assert_eq!(right.rect.x0, 10.0);
    assert_eq!(left.rounded(), [true, false, false, true]);
    assert_eq!(right.rounded(), [false, true, true, false]);

    let marks = pond_marks(&mask, 1.0);
    assert_eq!(marks.len(), 1);
    let Mark::Path { path, .. } = &marks[0] else {
        panic!("pond emits paths");
    };
    assert_eq!(quad_count(path), 4);
    let b = path.bounding_box();
    assert!((b.x0 - 0.8).abs() < 1e-9);
    assert!((b.x1 - 19.2).abs() < 1e-9);
}

#[test]
fn pond_scale_shrinks_exposed_edges_only() {
    let single = mask_from(&["#"]);
    let bounds = |scale: f64| {
        let marks = pond_marks(&single, scale);
        let Mark::Path { path, .. } = &marks[0] else {
            panic!("pond emits paths");
        };
        path.bounding_box()
    };
    let full = bounds(1.0);
    let half = bounds(0.5);
    assert!((full.width() - 8.4).abs() < 1e-9);
    assert!((half.width() - 4.2).abs() < 1e-9);
    assert!((half.center().x - 5.0).abs() < 1e-9);
    assert!(bounds(0.2).width() < half.width());

    let pair = mask_from(&["##"]);
    let left = pond_cell(&pair, 0, 0, 0.5);
    let right = pond_cell(&pair, 0, 1, 0.5);
    assert_eq!(left.rect.x1, 10.0);
    assert_eq!(right.rect.x0, left.rect.x1);
    assert!((left.rect.x0 - 2.9).abs() < 1e-9);
    assert!((left.rect.height() - 4.2).abs() < 1e-9);
    assert!(left.radius > 0.0);
}

#[test]
fn pond_style_honours_scale_through_dispatch() {
    let mask = mask_from(&["#.#", ".#."]);
    assert_ne!(
        marks(&mask, ModuleStyle::Pond, 0.2),
        marks(&mask, ModuleStyle::Pond, 1.0)
    );
}

#[test]
fn pond_rounds_only_convex_corners() {
    // L shape: the concave elbow at the top-left of (1,1) stays square.
    let mask = mask_from(&["#.", "##"]);
    assert_eq!(pond_cell(&mask, 0, 0, 1.0).rounded(), [true, true, false, false]);
    assert_eq!(pond_cell(&mask, 1, 0, 1.0).rounded(), [false, false, false, true]);
    assert_eq!(pond_cell(&mask, 1, 1, 1.0).rounded(), [false, true, true, false]);
}

#[test]
fn pond_geometry_follows_grid_rotation() {
    let rows = ["##.#.", "#..##", ".###.", "#.#..", "##..#"];
    let n = rows.len();
    let mask = mask_from(&rows);
    // 90 degrees clockwise: new (r, c) = old (n - 1 - c, r).
    let rotated = CellMask::from_fn(n, n, Point::ORIGIN, 10.0, |r, c| {
        mask.is_active(n - 1 - c, r)
    });

    for r in 0..n {
        for c in 0..n {
            if !mask.is_active(r, c) {
                continue;
            }
            let old = pond_cell(&mask, r, c, 0.6);
            let new = pond_cell(&rotated, c, n - 1 - r, 0.6);
            let [t, ri, b, l] = old.exposed;
            assert_eq!(new.exposed, [l, t, ri, b], "cell ({r}, {c})");
            let [tl, tr, br, bl] = old.rounded();
            assert_eq!(new.rounded(), [bl, tl, tr, br], "cell ({r}, {c})");
            assert!((new.rect.width() - old.rect.height()).abs() < 1e-9);
        }
    }
}

#[test]
fn independent_styles_emit_one_mark_per_cell() {
    let mask = mask_from(&["##.", "..#"]);
    for style in [
        ModuleStyle::Square,
        ModuleStyle::Rounded,
        ModuleStyle::Circle,
        ModuleStyle::Diamond,
    ] {
        assert_eq!(marks(&mask, style, 0.9).len(), 3, "{style:?}");
    }
    assert_eq!(marks(&mask, ModuleStyle::HorizontalBars, 0.9).len(), 2);
    assert_eq!(marks(&mask, ModuleStyle::VerticalBars, 0.9).len(), 3);
    assert_eq!(marks(&mask, ModuleStyle::Pond, 0.9).len(), 2);
}

#[test]
fn empty_mask_draws_nothing() {
    let mask = CellMask::new(3, 3, Point::ORIGIN, 5.0);
    for style in ModuleStyle::ALL {
        assert!(marks(&mask, style, 1.0).is_empty());
    }
}
