#![allow(dead_code)]

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_RANGE, USER_AGENT};
use reqwest::StatusCode;
use resumable_media::DownloadBase;
use std::sync::Once;
use tracing_subscriber::EnvFilter;

// Common test constants
pub const TEST_MEDIA_URL: &str = "https://example.com/media/video.mp4";
pub const TEST_USER_AGENT: &str = "resumable-media-test-agent";

static TRACING: Once = Once::new();

/// Installs a tracing subscriber honouring `RUST_LOG`, once per test binary
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Creates a `206 Partial Content` reqwest response with the given Content-Range
pub fn create_partial_response(content_range: &str) -> reqwest::Response {
    let response = http::Response::builder()
        .status(StatusCode::PARTIAL_CONTENT)
        .header(CONTENT_RANGE, content_range)
        .body("")
        .expect("Failed to build test response");
    reqwest::Response::from(response)
}

/// Creates a `200 OK` reqwest response without any Content-Range header
pub fn create_full_response() -> reqwest::Response {
    let response = http::Response::builder()
        .status(StatusCode::OK)
        .body("")
        .expect("Failed to build test response");
    reqwest::Response::from(response)
}

/// Creates a header map carrying only a Content-Range header
pub fn create_content_range_headers(content_range: &'static str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_RANGE, HeaderValue::from_static(content_range));
    headers
}

/// Creates test headers with a custom user agent
pub fn create_test_headers_with_agent(agent: &'static str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(agent));
    headers
}

/// Creates a download of the test media URL
pub fn create_test_download() -> DownloadBase {
    DownloadBase::try_from(TEST_MEDIA_URL).expect("Failed to create test download")
}

/// Returns the Range header produced for the given bounds, if any
pub fn range_header_for(start: Option<i64>, end: Option<u64>) -> Option<String> {
    let mut headers = HeaderMap::new();
    resumable_media::add_bytes_range(start, end, &mut headers);
    headers
        .get(reqwest::header::RANGE)
        .map(|value| value.to_str().expect("Range header is ASCII").to_string())
}
