use qrcode::{Color, EcLevel, QrCode};

use crate::foundation::error::ShieldResult;
use crate::grid::ModuleGrid;

/// Error-correction level requested from the encoder.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum EccLevel {
    /// ~7% recovery.
    Low,
    /// ~15% recovery.
    #[default]
    Medium,
    /// ~25% recovery.
    Quartile,
    /// ~30% recovery.
    High,
}

impl From<EccLevel> for EcLevel {
    fn from(v: EccLevel) -> Self {
        match v {
            EccLevel::Low => EcLevel::L,
            EccLevel::Medium => EcLevel::M,
            EccLevel::Quartile => EcLevel::Q,
            EccLevel::High => EcLevel::H,
        }
    }
}

/// Encode `data` into a module grid using the `qrcode` crate.
///
/// Encoder failures (for example data too long for the largest version) are returned unchanged
/// as [`ShieldError::Encoder`](crate::ShieldError::Encoder).
pub fn encode_text(data: &str, ecc: EccLevel) -> ShieldResult<ModuleGrid> {
    let code = QrCode::with_error_correction_level(data.as_bytes(), ecc.into())?;
    let size = code.width();
    let colors = code.to_colors();
    Ok(ModuleGrid::from_fn(size, |row, col| {
        colors[row * size + col] == Color::Dark
    }))
}

#[cfg(test)]
#[path = "../../tests/unit/grid/encode.rs"]
mod tests;
