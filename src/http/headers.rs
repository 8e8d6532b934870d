//! Header lookup on HTTP responses.
//!
//! The range parser does not care which HTTP client produced a response; it
//! only needs to read headers off it. [`HeaderSource`] is that capability,
//! implemented here for the `reqwest` and `http` response types and for a bare
//! [`HeaderMap`].
//!
//! # Example
//!
//! ```rust
//! use reqwest::header::{HeaderMap, HeaderValue, CONTENT_RANGE};
//! use resumable_media::http::{header_required, CONTENT_RANGE_HEADER};
//!
//! let mut headers = HeaderMap::new();
//! headers.insert(CONTENT_RANGE, HeaderValue::from_static("bytes 0-9/10"));
//!
//! let value = header_required(&headers, CONTENT_RANGE_HEADER)?;
//! assert_eq!(value, "bytes 0-9/10");
//! # Ok::<(), resumable_media::Error>(())
//! ```

use crate::error::{Error, Result};

use reqwest::{header::HeaderMap, StatusCode};
use std::borrow::Cow;

/// Name of the request header carrying the requested byte range.
pub const RANGE_HEADER: &str = "range";

/// Name of the response header carrying the served byte range.
pub const CONTENT_RANGE_HEADER: &str = "content-range";

/// Anything headers can be read from.
pub trait HeaderSource {
    /// Returns the value of the header `name`, if present.
    ///
    /// Lookups are case-insensitive. Values that are not valid UTF-8 are
    /// decoded lossily rather than reported as absent.
    fn header(&self, name: &str) -> Option<Cow<'_, str>>;

    /// Status of the response, if the source has one.
    fn status(&self) -> Option<StatusCode> {
        None
    }
}

impl HeaderSource for HeaderMap {
    fn header(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name)
            .map(|value| String::from_utf8_lossy(value.as_bytes()))
    }
}

impl HeaderSource for reqwest::Response {
    fn header(&self, name: &str) -> Option<Cow<'_, str>> {
        self.headers().header(name)
    }

    fn status(&self) -> Option<StatusCode> {
        Some(reqwest::Response::status(self))
    }
}

impl<B> HeaderSource for http::Response<B> {
    fn header(&self, name: &str) -> Option<Cow<'_, str>> {
        self.headers().header(name)
    }

    fn status(&self) -> Option<StatusCode> {
        Some(http::Response::status(self))
    }
}

/// Retrieve a header from a response, failing if it is missing.
///
/// # Errors
///
/// Returns [`Error::MissingHeader`] when `response` has no header `name`.
pub fn header_required<'a, R>(response: &'a R, name: &str) -> Result<Cow<'a, str>>
where
    R: HeaderSource + ?Sized,
{
    response.header(name).ok_or_else(|| Error::MissingHeader {
        header: name.to_string(),
        status: response.status(),
    })
}

/// Callback that does nothing; the default failure hook.
pub fn do_nothing() {}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::{HeaderValue, CONTENT_RANGE, RANGE};

    #[test]
    fn test_header_names_match_reqwest() {
        assert_eq!(RANGE.as_str(), RANGE_HEADER);
        assert_eq!(CONTENT_RANGE.as_str(), CONTENT_RANGE_HEADER);
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_RANGE, HeaderValue::from_static("bytes 0-0/1"));
        assert_eq!(headers.header("Content-Range").as_deref(), Some("bytes 0-0/1"));
        assert_eq!(headers.header("CONTENT-RANGE").as_deref(), Some("bytes 0-0/1"));
    }

    #[test]
    fn test_header_non_utf8_is_present() {
        let mut headers = HeaderMap::new();
        headers.insert(
            CONTENT_RANGE,
            HeaderValue::from_bytes(b"bytes \xff-1/2").unwrap(),
        );
        let value = headers.header(CONTENT_RANGE_HEADER).unwrap();
        assert!(value.starts_with("bytes "));
    }

    #[test]
    fn test_header_required_missing() {
        let headers = HeaderMap::new();
        match header_required(&headers, CONTENT_RANGE_HEADER) {
            Err(Error::MissingHeader { header, status }) => {
                assert_eq!(header, CONTENT_RANGE_HEADER);
                assert!(status.is_none());
            }
            other => panic!("expected a missing header error, got {:?}", other),
        }
    }

    #[test]
    fn test_header_required_reports_status() {
        let response = http::Response::builder()
            .status(StatusCode::OK)
            .body(())
            .unwrap();
        match header_required(&response, CONTENT_RANGE_HEADER) {
            Err(Error::MissingHeader { status, .. }) => {
                assert_eq!(status, Some(StatusCode::OK));
            }
            other => panic!("expected a missing header error, got {:?}", other),
        }
    }

    #[test]
    fn test_reqwest_response_source() {
        let response = http::Response::builder()
            .status(StatusCode::PARTIAL_CONTENT)
            .header(CONTENT_RANGE, "bytes 0-1023/2048")
            .body("")
            .unwrap();
        let response = reqwest::Response::from(response);
        assert_eq!(
            HeaderSource::status(&response),
            Some(StatusCode::PARTIAL_CONTENT)
        );
        assert_eq!(
            header_required(&response, CONTENT_RANGE_HEADER).unwrap(),
            "bytes 0-1023/2048"
        );
    }
}
