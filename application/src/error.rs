use std::io;

use thiserror::Error;

use domain::error::DomainError;

/// Application error taxonomy. Validation, decode and auth failures are
/// caller faults; everything below them is a server fault.
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Invalid request: {message}")]
    ValidationError { message: String },

    #[error("Could not decode image: {message}")]
    DecodeError { message: String },

    #[error("{message}")]
    AuthError { message: String },

    #[error("Image processing failed: {message}")]
    ProcessingError { message: String },

    #[error("Invalid configuration: {message}")]
    ConfigError { message: String },

    #[error("Background task failed: {message}")]
    TaskError { message: String },

    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    #[error("Internal server error")]
    InternalServerError,
}

pub type AppResult<T> = Result<T, AppError>;
