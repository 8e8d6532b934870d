//! HTTP module containing the header plumbing shared by the range helpers.
//!
//! # Overview
//!
//! - [`headers`] - the [`HeaderSource`] capability, canonical header names and
//!   required-header lookup
//!
//! # Examples
//!
//! ## Reading a required header from a response
//!
//! ```rust
//! use resumable_media::http::{header_required, CONTENT_RANGE_HEADER};
//!
//! let response = http::Response::builder()
//!     .status(206)
//!     .header("Content-Range", "bytes 0-1023/2048")
//!     .body(())?;
//!
//! let content_range = header_required(&response, CONTENT_RANGE_HEADER)?;
//! assert_eq!(content_range, "bytes 0-1023/2048");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod headers;

pub use headers::{
    do_nothing, header_required, HeaderSource, CONTENT_RANGE_HEADER, RANGE_HEADER,
};
