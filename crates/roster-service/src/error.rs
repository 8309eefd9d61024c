use thiserror::Error;

/// Service layer errors
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    RfcError(#[from] roster_rfc::error::RfcError),

    #[error(transparent)]
    CoreError(#[from] roster_core::error::CoreError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Meeting text that does not describe a fixed weekly time.
    #[error("Parse failure: {0}")]
    ParseFailure(String),
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
