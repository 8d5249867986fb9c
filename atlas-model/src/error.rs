use thiserror::Error;

/// Errors produced by model constructors and validation routines.
#[derive(Debug, Error)]
pub enum ModelError {
    /// A country record failed validation.
    #[error("invalid country: {0}")]
    InvalidCountry(String),
}

/// Convenience alias for model-level results.
pub type Result<T> = std::result::Result<T, ModelError>;
