/// Convenience result type used across Odyssey.
pub type OdysseyResult<T> = Result<T, OdysseyError>;

/// Top-level error taxonomy.
///
/// Errors only surface from construction-time APIs (configuration, manifests, mapping tables).
/// Per-frame paths (ticks, pointer/scroll events, asset settlement) are infallible.
#[derive(thiserror::Error, Debug)]
pub enum OdysseyError {
    /// Invalid user-provided data (windows, viewports, paths).
    #[error("validation error: {0}")]
    Validation(String),

    /// Invalid interpolation or spring definitions.
    #[error("animation error: {0}")]
    Animation(String),

    /// Asset decoding or lookup failures.
    #[error("asset error: {0}")]
    Asset(String),

    /// Invalid configuration values.
    #[error("config error: {0}")]
    Config(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl OdysseyError {
    /// Build an [`OdysseyError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an [`OdysseyError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build an [`OdysseyError::Asset`] value.
    pub fn asset(msg: impl Into<String>) -> Self {
        Self::Asset(msg.into())
    }

    /// Build an [`OdysseyError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build an [`OdysseyError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
