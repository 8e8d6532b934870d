//! Construction of `Range` request headers.
//!
//! A [`ByteRange`] describes which bytes of a resource a request asks for.
//! Both bounds are optional, which gives the four legal shapes of an HTTP
//! byte range:
//!
//! | start    | end  | header value      |
//! |----------|------|-------------------|
//! | `None`   | `None` | *(no header)*   |
//! | `None`   | `E`  | `bytes=0-E`       |
//! | `S >= 0` | `None` | `bytes=S-`      |
//! | `S < 0`  | `None` | `bytes=S` (suffix) |
//! | `S`      | `E`  | `bytes=S-E`       |
//!
//! The bounds are formatted, never validated: `start > end` or a negative
//! `start` together with an `end` produce a header the server will reject.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, RANGE};
use tracing::debug;

/// A requested byte interval, inclusive on both ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ByteRange {
    /// First byte to request. A negative value with no `end` asks for the
    /// last `|start|` bytes of the resource.
    pub start: Option<i64>,
    /// Last byte to request. Assumed to be non-negative.
    pub end: Option<u64>,
}

impl ByteRange {
    /// Creates a new [`ByteRange`].
    ///
    /// `start` must not be negative when `end` is set.
    pub fn new(start: Option<i64>, end: Option<u64>) -> Self {
        Self { start, end }
    }

    /// Whether the range covers the whole resource, i.e. no header is needed.
    pub fn is_full(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// The range token, without the `bytes=` unit prefix.
    pub fn token(&self) -> Option<String> {
        let token = match (self.start, self.end) {
            (None, None) => return None,
            (None, Some(end)) => format!("0-{}", end),
            (Some(start), None) if start < 0 => start.to_string(),
            (Some(start), None) => format!("{}-", start),
            (Some(start), Some(end)) => format!("{}-{}", start, end),
        };
        Some(token)
    }

    /// The full `Range` header value, e.g. `bytes=500-999`.
    pub fn header_value(&self) -> Option<String> {
        self.token().map(|token| format!("bytes={}", token))
    }

    /// The `Range` header entry to merge into a request, if one is needed.
    pub fn range_header(&self) -> Option<(HeaderName, HeaderValue)> {
        let value = self.header_value()?;
        // Only ASCII digits, '-' and '=' end up in the value.
        HeaderValue::try_from(value)
            .ok()
            .map(|value| (RANGE, value))
    }
}

impl From<(Option<i64>, Option<u64>)> for ByteRange {
    fn from((start, end): (Option<i64>, Option<u64>)) -> Self {
        Self::new(start, end)
    }
}

/// Add a bytes range to a header map.
///
/// Nothing is added when both `start` and `end` are `None`. An existing
/// `Range` entry is replaced.
///
/// # Example
///
/// ```rust
/// use reqwest::header::{HeaderMap, RANGE};
/// use resumable_media::range::add_bytes_range;
///
/// let mut headers = HeaderMap::new();
/// add_bytes_range(None, None, &mut headers);
/// assert!(headers.is_empty());
///
/// add_bytes_range(Some(500), Some(999), &mut headers);
/// assert_eq!(headers[RANGE], "bytes=500-999");
///
/// add_bytes_range(Some(-500), None, &mut headers);
/// assert_eq!(headers[RANGE], "bytes=-500");
/// ```
pub fn add_bytes_range(start: Option<i64>, end: Option<u64>, headers: &mut HeaderMap) {
    if let Some((name, value)) = ByteRange::new(start, end).range_header() {
        debug!("Requesting {:?}", value);
        headers.insert(name, value);
    }
}
