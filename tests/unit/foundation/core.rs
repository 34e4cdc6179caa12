use super::*;

#[test]
fn data_area_containment() {
    let canvas = Canvas {
        width: 300.0,
        height: 340.0,
    };
    assert!(DataArea::new(75.0, 80.0, 150.0).fits_in(canvas));
    assert!(DataArea::new(0.0, 0.0, 300.0).fits_in(canvas));
    assert!(!DataArea::new(200.0, 80.0, 150.0).fits_in(canvas));
    assert!(!DataArea::new(-1.0, 0.0, 10.0).fits_in(canvas));
    assert!(!DataArea::new(10.0, 10.0, 0.0).fits_in(canvas));
}

#[test]
fn inset_affine_moves_edges_inward() {
    let rect = Rect::new(0.0, 0.0, 200.0, 100.0);
    let a = inset_affine(rect, 10.0);
    let p0 = a * Point::new(0.0, 0.0);
    let p1 = a * Point::new(200.0, 100.0);
    assert!((p0.x - 10.0).abs() < 1e-9);
    assert!((p0.y - 10.0).abs() < 1e-9);
    assert!((p1.x - 190.0).abs() < 1e-9);
    assert!((p1.y - 90.0).abs() < 1e-9);
}

#[test]
fn affine_attr_formats_matrix() {
    let s = affine_attr(Affine::translate((5.0, -2.5)));
    assert_eq!(s, "matrix(1.0000 0.0000 0.0000 1.0000 5.00 -2.50)");
}
