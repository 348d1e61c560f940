//! Error types for classification

use thiserror::Error;

/// Errors that can occur while computing class breaks
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A strategy name that does not match any known classifier
    #[error("Unknown classification strategy: {0:?}")]
    UnknownStrategy(String),

    /// Error from validation, options or splines
    #[error(transparent)]
    Core(#[from] breaks_core::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Whether the input range or domain admits no classification
    pub fn is_degenerate(&self) -> bool {
        matches!(self, Self::Core(core) if core.is_degenerate())
    }

    /// Check that at least one class was requested
    pub fn check_num_classes(num_classes: usize) -> Result<()> {
        if num_classes == 0 {
            return Err(breaks_core::Error::InvalidParameter(
                "num_classes must be at least 1".to_string(),
            )
            .into());
        }
        Ok(())
    }
}
