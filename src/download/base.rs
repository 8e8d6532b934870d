//! Shared state of a media download.
//!
//! A [`DownloadBase`] holds what every kind of download needs to know: the
//! media URL, the byte bounds to request and any extra request headers. It
//! builds the request headers and interprets the server's `Content-Range`
//! answer, leaving the actual transfer to the caller's HTTP client.
//!
//! # Example
//!
//! ```rust
//! use reqwest::header::RANGE;
//! use resumable_media::download::DownloadBase;
//! use std::convert::TryFrom;
//!
//! let mut download = DownloadBase::try_from("https://example.com/media/video.mp4")?
//!     .with_range(Some(0), Some(1023));
//!
//! let headers = download.request_headers();
//! assert_eq!(headers[RANGE], "bytes=0-1023");
//!
//! let response = http::Response::builder()
//!     .status(206)
//!     .header("Content-Range", "bytes 0-1023/1024")
//!     .body(())?;
//! let served = download.process_range_response(&response)?;
//! assert_eq!(served.total, 1024);
//! assert!(download.finished());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::error::{Error, Result};
use crate::http::HeaderSource;
use crate::range::{add_bytes_range, get_range_info_with, ContentRange};

use reqwest::{header::HeaderMap, Url};
use tracing::debug;

/// Configuration and progress flags of a single media download.
#[derive(Debug, Clone)]
pub struct DownloadBase {
    media_url: Url,
    start: Option<i64>,
    end: Option<u64>,
    headers: HeaderMap,
    finished: bool,
    invalid: bool,
}

impl DownloadBase {
    /// Creates a new [`DownloadBase`] for the whole resource at `media_url`.
    pub fn new(media_url: &Url) -> Self {
        Self {
            media_url: media_url.clone(),
            start: None,
            end: None,
            headers: HeaderMap::new(),
            finished: false,
            invalid: false,
        }
    }

    /// Restrict the download to a byte range.
    ///
    /// See [`ByteRange`](crate::range::ByteRange) for the meaning of the bounds.
    pub fn with_range(mut self, start: Option<i64>, end: Option<u64>) -> Self {
        self.start = start;
        self.end = end;
        self
    }

    /// Extra headers to send with every request, e.g. encryption keys.
    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }

    /// The URL containing the media to be downloaded.
    pub fn media_url(&self) -> &Url {
        &self.media_url
    }

    /// The first byte in a range to be downloaded.
    pub fn start(&self) -> Option<i64> {
        self.start
    }

    /// The last byte in a range to be downloaded.
    pub fn end(&self) -> Option<u64> {
        self.end
    }

    /// Extra headers sent with the request.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Flag indicating if the download has completed.
    pub fn finished(&self) -> bool {
        self.finished
    }

    /// Flag indicating if the server sent an unusable range response.
    pub fn invalid(&self) -> bool {
        self.invalid
    }

    /// Headers for the next request: the extra headers plus the `Range` header.
    pub fn request_headers(&self) -> HeaderMap {
        let mut headers = self.headers.clone();
        add_bytes_range(self.start, self.end, &mut headers);
        headers
    }

    /// Read the range the server served from its response.
    ///
    /// A malformed `Content-Range` header marks the download as invalid. The
    /// download is finished once the served range reaches the last byte of
    /// the resource.
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`get_range_info_with`].
    pub fn process_range_response<R>(&mut self, response: &R) -> Result<ContentRange>
    where
        R: HeaderSource + ?Sized,
    {
        let invalid = &mut self.invalid;
        let range = get_range_info_with(response, || *invalid = true)?;
        if range.is_complete() {
            debug!("Finished downloading {}", self.media_url);
            self.finished = true;
        }
        Ok(range)
    }
}

impl TryFrom<&Url> for DownloadBase {
    type Error = crate::error::Error;

    fn try_from(value: &Url) -> Result<Self> {
        match value.scheme() {
            "http" | "https" => Ok(DownloadBase::new(value)),
            scheme => Err(Error::InvalidUrl(format!(
                "The url \"{}\" has unsupported scheme \"{}\"",
                value, scheme
            ))),
        }
    }
}

impl TryFrom<&str> for DownloadBase {
    type Error = crate::error::Error;

    fn try_from(value: &str) -> Result<Self> {
        Url::parse(value)
            .map_err(|e| {
                Error::InvalidUrl(format!("The url \"{}\" cannot be parsed: {}", value, e))
            })
            .and_then(|u| DownloadBase::try_from(&u))
    }
}
