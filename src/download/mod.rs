//! Download module containing the state shared by media downloads.
//!
//! - [`base`] - [`DownloadBase`], which holds the media URL, the requested
//!   byte bounds and extra headers, and turns them into request headers
//!
//! # Examples
//!
//! ## Requesting the last bytes of a resource
//!
//! ```rust
//! use reqwest::header::RANGE;
//! use resumable_media::download::DownloadBase;
//!
//! let download = DownloadBase::try_from("https://example.com/media/song.ogg")?
//!     .with_range(Some(-4096), None);
//! assert_eq!(download.request_headers()[RANGE], "bytes=-4096");
//! # Ok::<(), resumable_media::Error>(())
//! ```

pub mod base;

pub use base::DownloadBase;
