use super::*;
use crate::foundation::core::{DataArea, Point};
use crate::grid::ModuleGrid;
use crate::paint::palette::CustomColors;

fn finder_grid(n: usize) -> ModuleGrid {
    ModuleGrid::from_fn(n, |r, c| {
        !matches!(classify(n, r, c), Some((_, FinderPart::Space)))
    })
}

fn palette(background: &str) -> Palette {
    let colors = CustomColors {
        background: background.to_owned(),
        foreground: "#102030".to_owned(),
        outline: None,
        finder_outer: Some("#aa0000".to_owned()),
        finder_inner: None,
        outline_width: None,
    };
    Palette::resolve(Some(&colors), "cyber", None, "qr-gradient").unwrap()
}

#[test]
fn classification_covers_three_blocks() {
    for n in [21, 25, 57, 177] {
        for region in [
            FinderRegion::TopLeft,
            FinderRegion::TopRight,
            FinderRegion::BottomLeft,
        ] {
            let mut counts = [0usize; 3];
            for r in 0..n {
                for c in 0..n {
                    match classify(n, r, c) {
                        Some((reg, FinderPart::Outer)) if reg == region => counts[0] += 1,
                        Some((reg, FinderPart::Space)) if reg == region => counts[1] += 1,
                        Some((reg, FinderPart::Inner)) if reg == region => counts[2] += 1,
                        _ => {}
                    }
                }
            }
            assert_eq!(counts, [24, 16, 9], "n={n} {region:?}");
        }
    }
}

#[test]
fn cells_outside_blocks_are_unclassified() {
    assert_eq!(classify(21, 7, 7), None);
    assert_eq!(classify(21, 10, 10), None);
    assert_eq!(classify(21, 20, 20), None);
    assert_eq!(
        classify(21, 0, 14),
        Some((FinderRegion::TopRight, FinderPart::Outer))
    );
    assert_eq!(
        classify(21, 17, 3),
        Some((FinderRegion::BottomLeft, FinderPart::Inner))
    );
    assert_eq!(
        classify(21, 1, 1),
        Some((FinderRegion::TopLeft, FinderPart::Space))
    );
}

#[test]
fn origins_are_the_three_fixed_blocks() {
    assert_eq!(
        finder_origins(21),
        Some([
            (FinderRegion::TopLeft, 0, 0),
            (FinderRegion::TopRight, 0, 14),
            (FinderRegion::BottomLeft, 14, 0),
        ])
    );
    // A 7x7 grid is one block seen three times; top-left claims every cell.
    for r in 0..7 {
        for c in 0..7 {
            assert!(matches!(classify(7, r, c), Some((FinderRegion::TopLeft, _))));
        }
    }
}

#[test]
fn grids_smaller_than_a_finder_have_none() {
    assert!(finder_origins(5).is_none());
    assert!(finder_origins(7).is_some());
    assert!(!is_finder_cell(5, 0, 0));
}

#[test]
fn pattern_mode_splits_outer_and_inner() {
    let grid = finder_grid(21);
    let layout = GridLayout::fit(21, DataArea::new(0.0, 0.0, 210.0));
    let (outer, inner) = pattern_marks(&grid, &layout, FinderStyle::Circle, 1.0);
    assert_eq!(outer.len(), 3 * 24);
    assert_eq!(inner.len(), 3 * 9);
    assert!(matches!(outer[0], Mark::Circle { .. }));
}

#[test]
fn solid_finder_is_concentric() {
    let layout = GridLayout::fit(21, DataArea::new(0.0, 0.0, 210.0));
    let f = solid_finder(&layout, 0, 14, FinderStyle::Square, 1.0);
    assert_eq!(
        f.outer,
        Mark::Rect {
            x: 140.0,
            y: 0.0,
            w: 70.0,
            h: 70.0,
            r: 0.0
        }
    );
    assert_eq!(
        f.inner,
        Mark::Rect {
            x: 160.0,
            y: 20.0,
            w: 30.0,
            h: 30.0,
            r: 0.0
        }
    );

    let scaled = solid_finder(&layout, 0, 0, FinderStyle::Circle, 0.5);
    assert_eq!(
        scaled.space,
        Mark::Circle {
            cx: 35.0,
            cy: 35.0,
            r: 12.5
        }
    );
    assert_eq!(layout.cell_center(3, 3), Point::new(35.0, 35.0));
}

#[test]
fn solid_mode_on_transparent_background_emits_rings() {
    let grid = finder_grid(21);
    let layout = GridLayout::fit(21, DataArea::new(0.0, 0.0, 210.0));
    let mut out = String::new();
    write_finders(
        &mut out,
        &grid,
        &layout,
        FinderStyle::Rounded,
        FinderMode::Solid,
        1.0,
        &palette("transparent"),
    );
    assert_eq!(out.matches("fill-rule=\"evenodd\"").count(), 3);
    assert_eq!(out.matches("fill=\"#aa0000\"").count(), 3);
    assert_eq!(out.matches("fill=\"#102030\"").count(), 3);
    assert!(!out.contains("transparent"));
}

#[test]
fn solid_mode_on_opaque_background_paints_space() {
    let grid = finder_grid(21);
    let layout = GridLayout::fit(21, DataArea::new(0.0, 0.0, 210.0));
    let mut out = String::new();
    write_finders(
        &mut out,
        &grid,
        &layout,
        FinderStyle::Diamond,
        FinderMode::Solid,
        1.0,
        &palette("#eeeeee"),
    );
    assert!(!out.contains("evenodd"));
    assert_eq!(out.matches("<polygon").count(), 9);
    assert_eq!(out.matches("fill=\"#eeeeee\"").count(), 3);
}

#[test]
fn pattern_mode_groups_by_part() {
    let grid = finder_grid(21);
    let layout = GridLayout::fit(21, DataArea::new(0.0, 0.0, 210.0));
    let mut out = String::new();
    write_finders(
        &mut out,
        &grid,
        &layout,
        FinderStyle::Square,
        FinderMode::Pattern,
        1.0,
        &palette("#ffffff"),
    );
    assert!(out.starts_with("<g class=\"finder-outer\" fill=\"#aa0000\">"));
    assert!(out.contains("<g class=\"finder-inner\" fill=\"#102030\">"));
    assert_eq!(out.matches("<rect").count(), 3 * (24 + 9));
}
