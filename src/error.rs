use thiserror::Error;

/// Errors raised by the numerology engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumerologyError {
    #[error("Invalid date format '{0}'. Please use MM-DD-YYYY or MM/DD/YYYY")]
    InvalidDateFormat(String),
}

/// Errors produced while turning raw user input into search criteria
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("Validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error(transparent)]
    Numerology(#[from] NumerologyError),
}
