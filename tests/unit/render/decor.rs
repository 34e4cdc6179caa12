use super::*;

fn canvas() -> Canvas {
    Canvas {
        width: 300.0,
        height: 340.0,
    }
}

#[test]
fn sampling_is_deterministic() {
    let data = DataArea::new(75.0, 80.0, 150.0);
    let a = sample(canvas(), data, 150.0 / 21.0, 0.3, 2.0);
    let b = sample(canvas(), data, 150.0 / 21.0, 0.3, 2.0);
    assert_eq!(a, b);
    assert!(a.active_count() > 0);
}

#[test]
fn keeps_data_area_and_margin_clear() {
    let data = DataArea::new(75.0, 80.0, 150.0);
    for cell in [150.0 / 21.0, 150.0 / 33.0, 6.5, 10.0] {
        for margin in [0.0, 0.5, 2.0, 5.0] {
            for density in [0.05, 0.3, 0.75, 1.0] {
                let mask = sample(canvas(), data, cell, density, margin);
                let pad = margin * cell;
                for (r, c) in mask.active_cells() {
                    let cx = c as f64 * cell + cell / 2.0;
                    let cy = r as f64 * cell + cell / 2.0;
                    let inside = cx >= 75.0 - pad
                        && cx <= 225.0 + pad
                        && cy >= 80.0 - pad
                        && cy <= 230.0 + pad;
                    assert!(
                        !inside,
                        "cell ({r}, {c}) overlaps the data area (cell {cell}, margin {margin}, density {density})"
                    );
                }
                if density == 1.0 {
                    assert!(mask.active_count() > 0);
                }
            }
        }
    }
}

#[test]
fn density_bounds() {
    let data = DataArea::new(75.0, 80.0, 150.0);
    assert_eq!(sample(canvas(), data, 10.0, 0.0, 2.0).active_count(), 0);

    let full = sample(canvas(), data, 10.0, 1.0, 0.0);
    assert_eq!(full.cols, 30);
    assert_eq!(full.rows, 34);
    // Cells whose centers are within [75, 225] x [80, 230]: columns 7..=22, rows 8..=22.
    assert_eq!(full.active_count(), 30 * 34 - 16 * 15);
}

#[test]
fn selection_follows_cell_hash() {
    let data = DataArea::new(0.0, 0.0, 10.0);
    let mask = sample(canvas(), data, 10.0, 0.5, 0.0);
    // Cell (0, 0) is reserved by the data area; (0, 1) sits at pixel (10, 0).
    assert!(!mask.is_active(0, 0));
    assert_eq!(mask.is_active(0, 1), cell_noise(10, 0) < 0.5);
    assert_eq!(mask.is_active(3, 2), cell_noise(20, 30) < 0.5);
}
