//
//  app-directory
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # App Directory Client Library
//!
//! Typed, blocking access to the App Directory HTTP API: browsing and
//! searching apps, submitting and editing listings, moderation, reviews,
//! statistics, health checks, webhooks and API key management.
//!
//! ## Overview
//!
//! Every operation is a method on [`DirectoryClient`] that builds one
//! request, attaches at most one credential, performs exactly one HTTP
//! exchange and either returns the decoded body or a classified error.
//! There are no retries, no caches and no background threads.
//!
//! ## Module Structure
//!
//! - [`api`]: the request pipeline and all API operations
//! - [`auth`]: credential resolution (admin key vs. edit token)
//! - [`config`]: client configuration and the settings file
//! - [`cli`]: command-line definitions for the `ad` binary
//! - [`output`]: terminal output formatting for the `ad` binary
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use app_directory::{DirectoryClient, ErrorKind};
//! use app_directory::api::{NewApp, SearchQuery};
//!
//! let client = DirectoryClient::from_env()?;
//!
//! if client.is_healthy() {
//!     let results = client.search(&SearchQuery::new("monitoring"))?;
//!     println!("{} matches", results["total"]);
//! }
//!
//! let submitted = client.submit(&NewApp::new(
//!     "My Service",
//!     "A useful tool",
//!     "Full description",
//!     "Alice",
//! ))?;
//! println!("Edit token: {}", submitted["edit_token"]);
//!
//! match client.get_app("nonexistent") {
//!     Err(e) if e.kind() == Some(ErrorKind::NotFound) => println!("not listed"),
//!     other => println!("{other:?}"),
//! }
//! # Ok::<(), app_directory::Error>(())
//! ```
//!
//! ## Credentials
//!
//! | Credential | Header | Used for |
//! |------------|--------|----------|
//! | Admin API key | `Authorization: Bearer` | moderation, keys, webhooks, scheduled checks |
//! | Edit token | `X-Edit-Token` | updating or deleting the one app it was issued for |

/// The request pipeline and API operations.
///
/// Provides [`DirectoryClient`] and the request/response types used by its
/// methods.
pub mod api;

/// Credential resolution.
///
/// Decides per request whether to send the admin key, an edit token, or
/// nothing.
pub mod auth;

/// Command-line interface definitions.
///
/// Contains the `ad` commands defined using the clap derive API.
pub mod cli;

/// Client configuration.
///
/// [`ClientConfig`] for the library, plus the TOML settings file read by
/// the `ad` binary.
pub mod config;

/// Output formatting for the `ad` binary.
///
/// Pretty JSON for scripting, tables for app listings.
pub mod output;

pub use api::{ApiError, DirectoryClient, Error, ErrorKind, Result};
pub use cli::Cli;
pub use config::ClientConfig;

/// Application name constant.
///
/// The name of the CLI binary, used for display purposes.
pub const APP_NAME: &str = "ad";

/// Crate version, sent in the User-Agent header.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit codes for the CLI.
///
/// Standardized exit codes following Unix conventions, allowing scripts
/// to detect the outcome of a command.
///
/// # Exit Code Ranges
///
/// - `0`: Success
/// - `1-3`: General errors and usage issues
/// - `4-7`: Authentication-related issues
/// - `8-15`: Resource-related issues
/// - `16-31`: Request-related issues
/// - `32+`: Service issues
pub mod exit_codes {
    use crate::api::{Error, ErrorKind};

    /// Successful execution.
    pub const SUCCESS: i32 = 0;

    /// General error. Check stderr for details.
    pub const ERROR: i32 = 1;

    /// Invalid usage, arguments or configuration.
    pub const USAGE: i32 = 2;

    /// API key missing or invalid (HTTP 401).
    pub const AUTH_ERROR: i32 = 4;

    /// The credential lacks permission (HTTP 403).
    pub const FORBIDDEN: i32 = 5;

    /// The app, webhook or key does not exist (HTTP 404).
    pub const NOT_FOUND: i32 = 8;

    /// The resource is already in the requested state (HTTP 409).
    pub const CONFLICT: i32 = 9;

    /// The server rejected the request parameters (HTTP 400/422).
    pub const VALIDATION: i32 = 16;

    /// API rate limit exceeded (HTTP 429).
    pub const RATE_LIMIT: i32 = 32;

    /// The server failed (HTTP 5xx).
    pub const SERVER_ERROR: i32 = 33;

    /// The server could not be reached at all.
    pub const UNREACHABLE: i32 = 34;

    /// Maps a client error to the exit code reported by `ad`.
    pub fn for_error(err: &Error) -> i32 {
        match err {
            Error::Transport(_) => UNREACHABLE,
            Error::Config(_) => USAGE,
            Error::Api(api) => match api.kind() {
                ErrorKind::Auth => AUTH_ERROR,
                ErrorKind::Forbidden => FORBIDDEN,
                ErrorKind::NotFound => NOT_FOUND,
                ErrorKind::Conflict => CONFLICT,
                ErrorKind::Validation => VALIDATION,
                ErrorKind::RateLimit => RATE_LIMIT,
                ErrorKind::Server => SERVER_ERROR,
                ErrorKind::Generic => ERROR,
            },
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::api::ApiError;

        #[test]
        fn test_for_error() {
            let not_found: Error = ApiError::from_response(404, b"{}").into();
            assert_eq!(for_error(&not_found), NOT_FOUND);

            let teapot: Error = ApiError::from_response(418, b"").into();
            assert_eq!(for_error(&teapot), ERROR);

            assert_eq!(for_error(&Error::Config("x".into())), USAGE);
        }
    }
}
