use super::*;

#[test]
fn cell_hash_known_vectors() {
    assert_eq!(cell_hash(0, 0), 0);
    assert_eq!(cell_hash(1, 0), 2_182_377_942);
    assert_eq!(cell_hash(0, 1), 3_299_714_085);
    assert_eq!(cell_hash(12, 34), 168_855_034);
    assert_eq!(cell_hash(-6, 250), 2_307_919_561);
}

#[test]
fn cell_noise_is_in_unit_interval_and_stable() {
    for y in -20..20 {
        for x in -20..20 {
            let n = cell_noise(x * 7, y * 13);
            assert!((0.0..1.0).contains(&n));
            assert_eq!(n, cell_noise(x * 7, y * 13));
        }
    }
    assert!((cell_noise(1, 0) - 0.508_124_460_931_867_4).abs() < 1e-12);
}

#[test]
fn cell_hash_is_not_symmetric() {
    assert_ne!(cell_hash(3, 9), cell_hash(9, 3));
}
