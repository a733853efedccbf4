/// Convenience result type used across the slider engine.
pub type SliderResult<T> = Result<T, SliderError>;

/// Top-level error taxonomy used by slider APIs.
#[derive(thiserror::Error, Debug)]
pub enum SliderError {
    /// Point count, duration, initial position or easing parameters out of range.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A selection request outside `0..count`.
    #[error("invalid index {index}: expected a value in 0..{count}")]
    InvalidIndex {
        /// Requested index.
        index: usize,
        /// Number of points in the slider.
        count: usize,
    },

    /// Errors when serializing or deserializing configuration or frames.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SliderError {
    /// Build a [`SliderError::Configuration`] value.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Build a [`SliderError::InvalidIndex`] value.
    pub fn invalid_index(index: usize, count: usize) -> Self {
        Self::InvalidIndex { index, count }
    }

    /// Build a [`SliderError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
