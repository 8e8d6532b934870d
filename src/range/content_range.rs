//! Parsing of `Content-Range` response headers.
//!
//! After a range request the server reports the bytes it actually served,
//! which can differ from what was asked for (servers may cap the size of a
//! single response). The header has the form `bytes {start}-{end}/{total}`.
//!
//! # Example
//!
//! ```rust
//! use resumable_media::range::{get_range_info, ContentRange};
//!
//! let response = http::Response::builder()
//!     .status(206)
//!     .header("Content-Range", "bytes 500-999/1000")
//!     .body(())?;
//!
//! let range = get_range_info(&response)?;
//! assert_eq!(range, ContentRange { start: 500, end: 999, total: 1000 });
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::error::{Error, Result};
use crate::http::{do_nothing, header_required, HeaderSource, CONTENT_RANGE_HEADER};

use tracing::{debug, warn};

const BYTES_UNIT: &str = "bytes";

/// The byte extent reported by a `Content-Range` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentRange {
    /// First byte served.
    pub start: u64,
    /// Last byte served, inclusive.
    pub end: u64,
    /// Size of the whole resource.
    pub total: u64,
}

impl ContentRange {
    /// Whether the served bytes reach the end of the resource.
    pub fn is_complete(&self) -> bool {
        self.end.saturating_add(1) >= self.total
    }
}

/// Parse a `Content-Range` header value of the form `bytes {start}-{end}/{total}`.
///
/// The `bytes` unit is matched case-insensitively and must be followed by
/// exactly one space. Each number is a run of ASCII digits. The value must
/// start with the unit, but whatever follows the total is ignored. No
/// relation between the three numbers is checked.
///
/// Returns `None` if the value does not have that shape or a number does not
/// fit in a `u64`.
///
/// # Example
///
/// ```rust
/// use resumable_media::range::parse_content_range;
///
/// let range = parse_content_range("Bytes 0-0/1").unwrap();
/// assert_eq!((range.start, range.end, range.total), (0, 0, 1));
/// assert!(parse_content_range("bytes */1000").is_none());
/// ```
pub fn parse_content_range(value: &str) -> Option<ContentRange> {
    let unit = value.get(..BYTES_UNIT.len())?;
    if !unit.eq_ignore_ascii_case(BYTES_UNIT) {
        return None;
    }
    let rest = value[BYTES_UNIT.len()..].strip_prefix(' ')?;
    let (start, rest) = take_number(rest)?;
    let (end, rest) = take_number(rest.strip_prefix('-')?)?;
    let (total, _) = take_number(rest.strip_prefix('/')?)?;
    Some(ContentRange { start, end, total })
}

/// Splits a leading run of ASCII digits off `input` and parses it.
fn take_number(input: &str) -> Option<(u64, &str)> {
    let len = input.bytes().take_while(u8::is_ascii_digit).count();
    if len == 0 {
        return None;
    }
    let (digits, rest) = input.split_at(len);
    digits.parse().ok().map(|n| (n, rest))
}

/// Get the start, end and total bytes from a response's `Content-Range` header.
///
/// Same as [`get_range_info_with`] with a callback that does nothing.
pub fn get_range_info<R>(response: &R) -> Result<ContentRange>
where
    R: HeaderSource + ?Sized,
{
    get_range_info_with(response, do_nothing)
}

/// Get the start, end and total bytes from a response's `Content-Range` header.
///
/// `callback` runs exactly once if the header is malformed, before the error
/// is returned. It is not run when the header is missing.
///
/// # Errors
///
/// - [`Error::MissingHeader`] if the response has no `Content-Range` header.
/// - [`Error::InvalidResponse`] if the header is not of the form
///   `bytes {start}-{end}/{total}`.
pub fn get_range_info_with<R, F>(response: &R, callback: F) -> Result<ContentRange>
where
    R: HeaderSource + ?Sized,
    F: FnOnce(),
{
    let content_range = header_required(response, CONTENT_RANGE_HEADER)?;
    match parse_content_range(&content_range) {
        Some(range) => {
            debug!(
                "Server sent bytes {}-{} of {}",
                range.start, range.end, range.total
            );
            Ok(range)
        }
        None => {
            warn!("Unexpected content-range header {:?}", content_range);
            callback();
            Err(Error::InvalidResponse {
                status: response.status(),
                message: "Unexpected content-range header".into(),
                value: content_range.into_owned(),
                expected: "Expected to be of the form \"bytes {start}-{end}/{total}\"".into(),
            })
        }
    }
}
