//! CORS headers for browser clients on authenticated routes.
//!
//! Note:
//! - CORS is enforced by browsers. Native apps and server-to-server calls are not
//!   restricted by CORS.
//!
//! Policy:
//! - Exact-match allowlist of origins (from Config).
//! - Credentials are allowed, so the origin is echoed back and never `*`.

use axum::http::{HeaderMap, HeaderValue, header};

pub const ALLOW_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";
pub const ALLOW_HEADERS: &str = "Content-Type, Authorization";

#[derive(Debug, Clone, Default)]
pub struct CorsPolicy {
    allowed_origins: Vec<String>,
}

impl CorsPolicy {
    pub fn new<I, S>(allowed_origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed_origins: allowed_origins.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_allowed(&self, origin: &str) -> bool {
        self.allowed_origins.iter().any(|o| o == origin)
    }

    /// Response headers for `origin`, or `None` when it is absent or not allowed.
    pub fn headers_for(&self, origin: Option<&str>) -> Option<HeaderMap> {
        let origin = origin.filter(|o| self.is_allowed(o))?;
        let origin = HeaderValue::from_str(origin).ok()?;

        let mut headers = HeaderMap::with_capacity(4);
        headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin);
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
            HeaderValue::from_static("true"),
        );
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOW_METHODS),
        );
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOW_HEADERS),
        );
        Some(headers)
    }
}
