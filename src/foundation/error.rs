/// Convenience result type used across Ledloom.
pub type LedloomResult<T> = Result<T, LedloomError>;

/// Top-level error taxonomy used by the core APIs.
///
/// Every failure in this crate is a caller configuration bug detected eagerly
/// at construction or call time; there is no retry or recovery logic behind
/// any of these variants.
#[derive(thiserror::Error, Debug)]
pub enum LedloomError {
    /// Invalid caller-provided configuration: non-positive pixel counts or
    /// duplicate pixel coordinates.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Fewer supplied values than the declared pixel count requires.
    #[error("out of range: {0}")]
    OutOfRange(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LedloomError {
    /// Build a [`LedloomError::InvalidConfiguration`] value.
    pub fn invalid_configuration(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }

    /// Build a [`LedloomError::OutOfRange`] value.
    pub fn out_of_range(msg: impl Into<String>) -> Self {
        Self::OutOfRange(msg.into())
    }

    /// Build a [`LedloomError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
