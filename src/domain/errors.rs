// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("unknown category: {0}")]
    InvalidCategory(String),
    #[error("unknown subcategory `{subcategory}` for category `{category}`")]
    InvalidSubcategory {
        category: String,
        subcategory: String,
    },
    #[error("article filename already registered: {0}")]
    DuplicateFilename(String),
    #[error("article index at {path} is unreadable: {reason}")]
    CorruptIndex { path: String, reason: String },
    #[error("persistence error: {0}")]
    Persistence(String),
}

impl DomainError {
    /// Errors caused by operator input rather than by the filesystem.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::Validation(_)
                | Self::InvalidCategory(_)
                | Self::InvalidSubcategory { .. }
                | Self::DuplicateFilename(_)
        )
    }
}
