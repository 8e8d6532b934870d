//! Error handling for the resumable-media library.
//!
//! Every fallible operation in the crate returns [`Result`], whose error side
//! is the [`Error`] enum below. Errors are returned to the caller as soon as
//! they are detected; nothing in this crate retries.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can happen while negotiating byte ranges.
#[derive(Error, Debug)]
pub enum Error {
    /// A header the caller relies on is absent from the response.
    ///
    /// Returned by [`header_required`](crate::http::header_required), most
    /// notably when a server answers a range request without a
    /// `Content-Range` header.
    #[error("Response headers must contain header \"{header}\"")]
    MissingHeader {
        /// Name of the header that was looked up.
        header: String,
        /// Status of the response, when the header source carries one.
        status: Option<StatusCode>,
    },

    /// The response is present but does not have the expected shape.
    ///
    /// Carries the observed header value and a description of the expected
    /// format so that callers can log it or surface it to an end user.
    #[error("{message}: {value:?} ({expected})")]
    InvalidResponse {
        /// Status of the response, when the header source carries one.
        status: Option<StatusCode>,
        /// Human readable summary of the failure.
        message: String,
        /// The offending value as received.
        value: String,
        /// Description of the value that was expected.
        expected: String,
    },

    /// Error from the underlying URL parser or the expected URL format.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Result type alias for operations that can fail with a resumable-media error.
pub type Result<T> = std::result::Result<T, Error>;
