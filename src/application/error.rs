// src/application/error.rs
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

/// Process exit status for input problems (bad category, duplicate, ...).
pub const EXIT_VALIDATION: u8 = 1;
/// Process exit status for filesystem problems (missing files, corrupt index).
pub const EXIT_IO: u8 = 2;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("template not found: {0}")]
    MissingTemplate(String),

    #[error("file not found: {0}")]
    MissingFile(String),

    #[error("infrastructure failure: {0}")]
    Infrastructure(String),
}

impl ApplicationError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn missing_template(path: impl Into<String>) -> Self {
        Self::MissingTemplate(path.into())
    }

    pub fn missing_file(path: impl Into<String>) -> Self {
        Self::MissingFile(path.into())
    }

    pub fn infrastructure(msg: impl Into<String>) -> Self {
        Self::Infrastructure(msg.into())
    }

    pub fn is_validation(&self) -> bool {
        match self {
            Self::Validation(_) => true,
            Self::Domain(err) => err.is_input_error(),
            Self::MissingTemplate(_) | Self::MissingFile(_) | Self::Infrastructure(_) => false,
        }
    }

    pub fn exit_code(&self) -> u8 {
        if self.is_validation() {
            EXIT_VALIDATION
        } else {
            EXIT_IO
        }
    }
}
