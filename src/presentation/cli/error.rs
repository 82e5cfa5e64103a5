// src/presentation/cli/error.rs
use crate::application::{
    ApplicationResult,
    error::{ApplicationError, EXIT_VALIDATION},
};
use std::fmt;

/// A failed command, carrying the process exit status it maps to.
#[derive(Debug)]
pub struct CliError {
    code: u8,
    message: String,
}

impl CliError {
    pub fn from_error(err: ApplicationError) -> Self {
        Self::new(err.exit_code(), err.to_string())
    }

    /// Work finished but some items failed; details are already printed.
    pub fn partial_failure(message: impl Into<String>) -> Self {
        Self::new(EXIT_VALIDATION, message.into())
    }

    fn new(code: u8, message: String) -> Self {
        Self { code, message }
    }

    pub fn code(&self) -> u8 {
        self.code
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

impl From<ApplicationError> for CliError {
    fn from(err: ApplicationError) -> Self {
        Self::from_error(err)
    }
}

pub type CliResult<T> = Result<T, CliError>;

pub trait IntoCliResult<T> {
    fn into_cli(self) -> CliResult<T>;
}

impl<T> IntoCliResult<T> for ApplicationResult<T> {
    fn into_cli(self) -> CliResult<T> {
        self.map_err(CliError::from_error)
    }
}
