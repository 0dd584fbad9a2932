use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Unsupported image format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid quality value: {0}")]
    InvalidQuality(String),

    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),

    #[error("Invalid crop region: {0}")]
    InvalidCropRegion(String),

    #[error("Invalid pixel buffer: {0}")]
    InvalidBuffer(String),
}

pub type DomainResult<T> = Result<T, DomainError>;
