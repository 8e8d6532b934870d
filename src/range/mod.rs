//! Byte-range negotiation.
//!
//! Requests ask for a byte range through the `Range` header and the server
//! answers with the range it served in `Content-Range`.
//!
//! - [`bytes_range`] - building `Range` request headers from [`ByteRange`]s
//! - [`content_range`] - parsing `Content-Range` response headers into
//!   [`ContentRange`]s
//!
//! # Example
//!
//! ```rust
//! use reqwest::header::{HeaderMap, RANGE};
//! use resumable_media::range::{add_bytes_range, get_range_info};
//!
//! let mut headers = HeaderMap::new();
//! add_bytes_range(None, Some(1023), &mut headers);
//! assert_eq!(headers[RANGE], "bytes=0-1023");
//!
//! let response = http::Response::builder()
//!     .status(206)
//!     .header("Content-Range", "bytes 0-1023/2048")
//!     .body(())?;
//! let served = get_range_info(&response)?;
//! assert_eq!(served.total, 2048);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod bytes_range;
pub mod content_range;

pub use bytes_range::{add_bytes_range, ByteRange};
pub use content_range::{get_range_info, get_range_info_with, parse_content_range, ContentRange};
