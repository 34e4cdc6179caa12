/// Convenience result type used across qrshield.
pub type ShieldResult<T> = Result<T, ShieldError>;

/// Top-level error taxonomy used by the rendering and container APIs.
///
/// Unknown styling choices (shapes, presets, styles) never produce an error; they fall back to
/// documented defaults. Only structurally broken input is rejected.
#[derive(thiserror::Error, Debug)]
pub enum ShieldError {
    /// A required configuration value is missing or structurally invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// A shape definition could not be registered.
    #[error("shape registry error: {0}")]
    Registry(String),

    /// Configuration JSON could not be parsed.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Failure reported by the external QR encoder, passed through untouched.
    #[cfg(feature = "encode")]
    #[error(transparent)]
    Encoder(#[from] qrcode::types::QrError),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ShieldError {
    /// Build a [`ShieldError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`ShieldError::Registry`] value.
    pub fn registry(msg: impl Into<String>) -> Self {
        Self::Registry(msg.into())
    }

    /// Build a [`ShieldError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
