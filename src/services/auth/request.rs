//! Read-only view over the parts of an HTTP request that authentication looks at.

use axum::http::{HeaderMap, Method, header, request::Parts};

const BEARER_PREFIX: &str = "Bearer ";

#[derive(Debug, Clone, Copy)]
pub struct IncomingRequest<'a> {
    method: &'a Method,
    headers: &'a HeaderMap,
}

impl<'a> IncomingRequest<'a> {
    pub fn new(method: &'a Method, headers: &'a HeaderMap) -> Self {
        Self { method, headers }
    }

    pub fn from_parts(parts: &'a Parts) -> Self {
        Self::new(&parts.method, &parts.headers)
    }

    pub fn is_preflight(&self) -> bool {
        *self.method == Method::OPTIONS
    }

    pub fn origin(&self) -> Option<&'a str> {
        self.header_str(header::ORIGIN)
    }

    /// Token from `Authorization: Bearer <token>`.
    ///
    /// The prefix is case-sensitive. An empty remainder counts as no token.
    pub fn bearer_token(&self) -> Option<&'a str> {
        self.header_str(header::AUTHORIZATION)?
            .strip_prefix(BEARER_PREFIX)
            .filter(|t| !t.is_empty())
    }

    /// First non-empty cookie named `name`, across all `Cookie` headers.
    pub fn cookie(&self, name: &str) -> Option<&'a str> {
        self.headers
            .get_all(header::COOKIE)
            .into_iter()
            .filter_map(|v| v.to_str().ok())
            .flat_map(|raw| raw.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(k, v)| k.trim() == name && !v.trim().is_empty())
            .map(|(_, v)| v.trim().trim_matches('"'))
    }

    // Non-UTF-8 header values are treated as absent.
    fn header_str(&self, name: header::HeaderName) -> Option<&'a str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}
