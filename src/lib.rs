//! Resumable-media is a crate implementing the byte-range negotiation of a
//! resumable media download client.
//!
//! It builds `Range` request headers from partial or open-ended byte
//! intervals and parses the `Content-Range` header a server answers with. It
//! performs no I/O: requests are sent by whatever HTTP client the caller uses.
//!
//! # Quick Start
//!
//! ```rust
//! use reqwest::header::{HeaderMap, RANGE};
//! use resumable_media::{add_bytes_range, get_range_info};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut headers = HeaderMap::new();
//! add_bytes_range(Some(500), Some(999), &mut headers);
//! assert_eq!(headers[RANGE], "bytes=500-999");
//!
//! let response = http::Response::builder()
//!     .status(206)
//!     .header("Content-Range", "bytes 500-999/1000")
//!     .body(())?;
//! let served = get_range_info(&response)?;
//! assert_eq!((served.start, served.end, served.total), (500, 999, 1000));
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`range`] - `Range` header construction and `Content-Range` parsing
//! - [`download`] - The `DownloadBase` holding a download's URL, bounds and headers
//! - [`error`] - Centralized error handling with the `Error` enum
//! - [`http`] - Header lookup on responses of any HTTP client

pub mod download;
pub mod error;
pub mod http;
pub mod range;

pub use download::DownloadBase;
pub use error::{Error, Result};
pub use crate::http::{header_required, HeaderSource};
pub use range::{
    add_bytes_range, get_range_info, get_range_info_with, parse_content_range, ByteRange,
    ContentRange,
};
