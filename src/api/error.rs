//
//  app-directory
//  api/error.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Error types for App Directory API operations.
//!
//! Every non-2xx response is turned into a single [`ApiError`] value tagged
//! with an [`ErrorKind`]. Callers match on the kind instead of on a family of
//! error types:
//!
//! ```rust
//! use app_directory::{ApiError, ErrorKind};
//!
//! fn describe(err: &ApiError) -> &'static str {
//!     match err.kind() {
//!         ErrorKind::NotFound => "no such app",
//!         ErrorKind::Auth => "an admin API key is required",
//!         ErrorKind::Forbidden => "the key lacks permission",
//!         _ => "request failed",
//!     }
//! }
//! ```
//!
//! Transport failures (DNS, refused connections, timeouts) never reach the
//! classifier. They surface as [`Error::Transport`] so that reachability
//! checks can tell "the server said no" apart from "there is no server".

use std::fmt;

use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Taxonomy of classified HTTP failures.
///
/// | Kind | HTTP Status |
/// |------|-------------|
/// | `Auth` | 401 |
/// | `Forbidden` | 403 |
/// | `NotFound` | 404 |
/// | `Conflict` | 409 |
/// | `RateLimit` | 429 |
/// | `Validation` | 400, 422 |
/// | `Server` | 5xx |
/// | `Generic` | anything else |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// API key required or invalid.
    Auth,
    /// The credential was accepted but lacks permission.
    Forbidden,
    /// The app, review, webhook or key does not exist.
    NotFound,
    /// The resource is already in the requested state (e.g. already deprecated).
    Conflict,
    /// Too many requests from this caller.
    RateLimit,
    /// The server rejected the request parameters.
    Validation,
    /// The server failed while handling the request.
    Server,
    /// Any other failure, including undecodable success responses.
    Generic,
}

impl ErrorKind {
    /// Maps an HTTP status code to its kind.
    ///
    /// Order matters only for readability; the arms are disjoint.
    pub fn from_status(status: u16) -> Self {
        match status {
            401 => Self::Auth,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            409 => Self::Conflict,
            429 => Self::RateLimit,
            400 | 422 => Self::Validation,
            s if s >= 500 => Self::Server,
            _ => Self::Generic,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Auth => "authentication error",
            Self::Forbidden => "forbidden",
            Self::NotFound => "not found",
            Self::Conflict => "conflict",
            Self::RateLimit => "rate limit exceeded",
            Self::Validation => "validation error",
            Self::Server => "server error",
            Self::Generic => "API error",
        };
        f.write_str(name)
    }
}

/// A classified failure returned by the directory service.
///
/// Carries the original status code, the parsed JSON body (when the body was
/// JSON) and the raw body text, so callers can inspect server-specific
/// details such as machine-readable error codes.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    kind: ErrorKind,
    message: String,
    status: u16,
    body: Option<Value>,
    raw_body: String,
}

impl ApiError {
    /// Creates an error with an explicit kind.
    pub fn new(kind: ErrorKind, message: impl Into<String>, status: u16) -> Self {
        Self {
            kind,
            message: message.into(),
            status,
            body: None,
            raw_body: String::new(),
        }
    }

    /// Classifies a non-2xx response.
    ///
    /// The message is taken from the JSON `error` field, then the `message`
    /// field, and falls back to `HTTP <status>` when neither is a non-empty
    /// string or the body is not JSON at all.
    pub fn from_response(status: u16, raw: &[u8]) -> Self {
        let raw_body = String::from_utf8_lossy(raw).into_owned();
        let body = serde_json::from_slice::<Value>(raw).ok();
        let message = body
            .as_ref()
            .and_then(extract_message)
            .unwrap_or_else(|| format!("HTTP {status}"));

        Self {
            kind: ErrorKind::from_status(status),
            message,
            status,
            body,
            raw_body,
        }
    }

    /// A success response whose declared JSON body could not be parsed.
    pub(crate) fn undecodable(status: u16, raw: &[u8], cause: &serde_json::Error) -> Self {
        Self {
            kind: ErrorKind::Generic,
            message: format!("invalid JSON in response: {cause}"),
            status,
            body: None,
            raw_body: String::from_utf8_lossy(raw).into_owned(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The HTTP status code of the failed response.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// The parsed JSON body, if the body was valid JSON.
    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    /// The response body exactly as received, decoded lossily as UTF-8.
    pub fn raw_body(&self) -> &str {
        &self.raw_body
    }

    /// The server's machine-readable error code when it sent one alongside
    /// a separate human-readable message, e.g. `"NOT_FOUND"`.
    pub fn code(&self) -> Option<&str> {
        let body = self.body.as_ref()?;
        body.get("message")?;
        body.get("error").and_then(Value::as_str)
    }

    pub fn is_not_found(&self) -> bool {
        self.kind == ErrorKind::NotFound
    }

    pub fn is_auth(&self) -> bool {
        self.kind == ErrorKind::Auth
    }

    pub fn is_forbidden(&self) -> bool {
        self.kind == ErrorKind::Forbidden
    }

    pub fn is_conflict(&self) -> bool {
        self.kind == ErrorKind::Conflict
    }

    pub fn is_validation(&self) -> bool {
        self.kind == ErrorKind::Validation
    }

    pub fn is_rate_limited(&self) -> bool {
        self.kind == ErrorKind::RateLimit
    }

    pub fn is_server_error(&self) -> bool {
        self.kind == ErrorKind::Server
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = StatusCode::from_u16(self.status)
            .ok()
            .and_then(|s| s.canonical_reason());
        match reason {
            Some(reason) => write!(f, "{} (HTTP {} {})", self.message, self.status, reason),
            None => write!(f, "{} (HTTP {})", self.message, self.status),
        }
    }
}

impl std::error::Error for ApiError {}

fn extract_message(body: &Value) -> Option<String> {
    ["error", "message"]
        .iter()
        .filter_map(|field| body.get(field).and_then(Value::as_str))
        .find(|msg| !msg.is_empty())
        .map(str::to_string)
}

/// Top-level error for every client operation.
#[derive(Error, Debug)]
pub enum Error {
    /// The server answered with a non-2xx status, or with a body that could
    /// not be decoded.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// No HTTP response was obtained: connection refused, DNS failure,
    /// timeout, or a broken response stream.
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The client configuration or a request could not be turned into a
    /// valid HTTP request.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// Returns the classified API error, if this is one.
    pub fn as_api(&self) -> Option<&ApiError> {
        match self {
            Self::Api(err) => Some(err),
            _ => None,
        }
    }

    /// Returns the taxonomy kind for classified errors.
    pub fn kind(&self) -> Option<ErrorKind> {
        self.as_api().map(ApiError::kind)
    }

    /// Returns the HTTP status code for classified errors.
    pub fn status(&self) -> Option<u16> {
        self.as_api().map(ApiError::status)
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping_is_total_over_error_range() {
        for status in 400u16..=599 {
            let expected = match status {
                401 => ErrorKind::Auth,
                403 => ErrorKind::Forbidden,
                404 => ErrorKind::NotFound,
                409 => ErrorKind::Conflict,
                429 => ErrorKind::RateLimit,
                400 | 422 => ErrorKind::Validation,
                500..=599 => ErrorKind::Server,
                _ => ErrorKind::Generic,
            };
            assert_eq!(ErrorKind::from_status(status), expected, "status {status}");
        }
    }

    #[test]
    fn test_message_prefers_error_field() {
        let err = ApiError::from_response(404, br#"{"error":"NOT_FOUND","message":"App not found"}"#);
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.message(), "NOT_FOUND");
        assert_eq!(err.code(), Some("NOT_FOUND"));
        assert_eq!(err.status(), 404);
    }

    #[test]
    fn test_message_falls_back_to_message_field() {
        let err = ApiError::from_response(422, br#"{"error":"","message":"rating must be 1-5"}"#);
        assert_eq!(err.message(), "rating must be 1-5");
        assert!(err.is_validation());
    }

    #[test]
    fn test_message_falls_back_to_status() {
        let err = ApiError::from_response(502, b"<html>Bad Gateway</html>");
        assert_eq!(err.message(), "HTTP 502");
        assert!(err.body().is_none());
        assert_eq!(err.raw_body(), "<html>Bad Gateway</html>");
        assert!(err.is_server_error());
    }

    #[test]
    fn test_non_object_json_body_uses_status_message() {
        let err = ApiError::from_response(418, b"[1,2,3]");
        assert_eq!(err.kind(), ErrorKind::Generic);
        assert_eq!(err.message(), "HTTP 418");
        assert!(err.body().is_some());
    }

    #[test]
    fn test_display_includes_status() {
        let err = ApiError::from_response(409, br#"{"error":"ALREADY_DEPRECATED"}"#);
        assert_eq!(err.to_string(), "ALREADY_DEPRECATED (HTTP 409 Conflict)");
        assert_eq!(err.code(), None);
    }

    #[test]
    fn test_error_accessors() {
        let err: Error = ApiError::from_response(429, b"").into();
        assert_eq!(err.kind(), Some(ErrorKind::RateLimit));
        assert_eq!(err.status(), Some(429));
        assert!(!err.is_transport());

        let err = Error::Config("bad url".into());
        assert_eq!(err.kind(), None);
    }
}
