/// Convenience result type used across the crate.
pub type BlendResult<T> = Result<T, BlendError>;

/// Error taxonomy for fallible blending APIs.
///
/// Pixel math itself never fails; errors only come from names, options and
/// buffer geometry supplied by the caller.
#[derive(thiserror::Error, Debug)]
pub enum BlendError {
    /// Invalid user-provided names or options.
    #[error("validation error: {0}")]
    Validation(String),

    /// Pixel buffer length or dimensions do not describe an RGBA8 grid.
    #[error("buffer error: {0}")]
    Buffer(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BlendError {
    /// Build a [`BlendError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`BlendError::Buffer`] value.
    pub fn buffer(msg: impl Into<String>) -> Self {
        Self::Buffer(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
