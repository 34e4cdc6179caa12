//! Integer mixing used by the decorative fill sampler.
//!
//! The constants and shift amounts are part of the saved-configuration contract: a stored
//! design must sprinkle exactly the same cells on every build. Do not tune them.

pub(crate) const HASH_MUL_X: u32 = 374_761_393;
pub(crate) const HASH_MUL_Y: u32 = 668_265_263;
pub(crate) const HASH_MIX: u32 = 1_274_126_177;

const U32_RANGE: f64 = 4_294_967_296.0;

/// Two-input 32-bit hash of integer pixel coordinates (two's-complement wrapping).
pub(crate) fn cell_hash(x: i32, y: i32) -> u32 {
    let mut h = (x as u32)
        .wrapping_mul(HASH_MUL_X)
        .wrapping_add((y as u32).wrapping_mul(HASH_MUL_Y));
    h = (h ^ (h >> 13)).wrapping_mul(HASH_MIX);
    h ^ (h >> 16)
}

/// [`cell_hash`] reduced to `[0, 1)`.
pub(crate) fn cell_noise(x: i32, y: i32) -> f64 {
    f64::from(cell_hash(x, y)) / U32_RANGE
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
