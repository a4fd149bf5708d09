//! Error types for the RSVP ecosystem.

use thiserror::Error;

/// Errors that can occur in RSVP operations.
///
/// None of these are fatal: the worst case is the guest being pointed at
/// the manual (text message) RSVP channel.
#[derive(Error, Debug)]
pub enum RsvpError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Please wait {wait_secs}s before submitting again")]
    RateLimited { wait_secs: u64 },

    #[error("Invalid field: {0}")]
    InvalidField(String),

    #[error("Event ends before it starts")]
    InvalidEventWindow,

    #[error("Submission failed: {0}")]
    Transport(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for RSVP operations.
pub type RsvpResult<T> = Result<T, RsvpError>;
