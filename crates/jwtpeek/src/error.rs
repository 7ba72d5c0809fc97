//! Errors for jwtpeek

use thiserror::Error;

/// jwtpeek errors
///
/// Decode errors carry what went wrong with the input; accessor errors tag
/// which stage of the pipeline the caller asked for, preserving the
/// underlying cause as a chained source.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    // ============================================================================
    // Decode Errors
    // ============================================================================
    #[error("Invalid JWT format: expected three segments separated by '.', found {0}")]
    IncorrectSegmentCount(usize),

    #[error("Base64URL decoding failed for segment: {0}")]
    InvalidBase64Url(String),

    #[error("Invalid token: segment does not deserialize into the expected structure")]
    InvalidToken,

    // ============================================================================
    // Accessor Errors
    // ============================================================================
    #[error("Unable to get header: {0}")]
    UnableToGetHeader(#[source] Box<Error>),

    #[error("Unable to get body: {0}")]
    UnableToGetBody(#[source] Box<Error>),

    #[error("Unable to get signature: {0}")]
    UnableToGetSignature(#[source] Box<Error>),

    #[error("No token held: decode or store a token first")]
    UnableToGetJwt,
}

/// Result type alias for jwtpeek operations
pub type Result<T> = std::result::Result<T, Error>;
