use thiserror::Error;

/// Errors raised while building calendar data
#[derive(Error, Debug)]
pub enum RfcError {
    #[error("Non-existent local time (DST gap): {0}")]
    NonExistentTime(String),

    #[error(transparent)]
    CoreError(#[from] roster_core::error::CoreError),
}

pub type RfcResult<T> = std::result::Result<T, RfcError>;
