/// Convenience result type used across the crate.
pub type CrossfadeResult<T> = Result<T, CrossfadeError>;

/// Error taxonomy shared by the envelope, mask, and node APIs.
#[derive(thiserror::Error, Debug)]
pub enum CrossfadeError {
    /// Inputs outside the documented domain of a routine.
    #[error("contract violation: {0}")]
    Contract(String),

    /// Mask lookup outside `[0, len)`.
    #[error("index {index} out of range for mask of length {len}")]
    IndexOutOfRange {
        /// Requested index, as supplied by the caller.
        index: i64,
        /// Length of the mask that was queried.
        len: usize,
    },

    /// Errors when serializing or deserializing requests and outputs.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CrossfadeError {
    /// Build a [`CrossfadeError::Contract`] value.
    pub fn contract(msg: impl Into<String>) -> Self {
        Self::Contract(msg.into())
    }

    /// Build a [`CrossfadeError::IndexOutOfRange`] value.
    pub fn index_out_of_range(index: i64, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    /// Build a [`CrossfadeError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for CrossfadeError {
    fn from(e: serde_json::Error) -> Self {
        Self::serde(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
