//! Error types for reflow-core

/// Result type for reflow-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in reflow-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Line {number} is out of range (max line number {max})")]
    LineOutOfRange { number: usize, max: usize },

    #[error("Document has no lines")]
    EmptyDocument,

    #[error("Invalid paragraph boundary: start {start} is after end {end}")]
    InvalidBoundary { start: usize, end: usize },

    /// A settings key held the wrong type.
    #[error("Invalid settings: {message}")]
    InvalidSettings { message: String },
}

impl Error {
    pub fn out_of_range(number: usize, max: usize) -> Self {
        Self::LineOutOfRange { number, max }
    }

    pub fn settings(message: impl Into<String>) -> Self {
        Self::InvalidSettings {
            message: message.into(),
        }
    }
}
