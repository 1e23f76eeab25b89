//
//  app-directory
//  auth/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Authentication Module
//!
//! The directory service accepts two kinds of credential:
//!
//! - **Admin API key**: an account-level key sent as `Authorization: Bearer`.
//!   Required for moderation, webhooks, API keys and scheduled checks.
//! - **Edit token**: a capability returned when an app is submitted. It is
//!   sent as `X-Edit-Token` and authorizes changes to that one app only.
//!
//! ## Resolution
//!
//! [`resolve`] picks at most one credential per request. The first rule that
//! matches wins:
//!
//! 1. an edit token passed for this call;
//! 2. the admin key, if the call is privileged and the client has one;
//! 3. the client's default edit token, for PATCH and DELETE only;
//! 4. nothing.
//!
//! An explicit edit token is scoped by the caller to one app, so it takes
//! priority over a client-wide admin key. The default edit token only fills
//! the gap when nothing else applies.
//!
//! ## Example
//!
//! ```rust
//! use app_directory::api::RequestDescriptor;
//! use app_directory::auth::{resolve, Credential};
//! use app_directory::config::ClientConfig;
//!
//! let config = ClientConfig::builder()
//!     .api_key("ad_admin")
//!     .build_with_env(|_| None)?;
//!
//! let req = RequestDescriptor::patch("/api/v1/apps")
//!     .segment("app-1")
//!     .privileged()
//!     .edit_token(Some("tok_123"));
//!
//! assert_eq!(resolve(&req, &config), Some(Credential::EditToken("tok_123".into())));
//! # Ok::<(), app_directory::Error>(())
//! ```

use std::fmt;

use reqwest::blocking::RequestBuilder;

use crate::api::RequestDescriptor;
use crate::config::ClientConfig;

/// Header carrying an edit token.
pub const EDIT_TOKEN_HEADER: &str = "X-Edit-Token";

/// The single credential attached to a request.
#[derive(Clone, PartialEq, Eq)]
pub enum Credential {
    /// Admin API key, sent as a bearer token.
    Bearer(String),
    /// Per-app edit token, sent in [`EDIT_TOKEN_HEADER`].
    EditToken(String),
}

impl Credential {
    /// Adds the credential's header to a request.
    pub fn apply_to_request(&self, request: RequestBuilder) -> RequestBuilder {
        match self {
            Self::Bearer(key) => request.bearer_auth(key),
            Self::EditToken(token) => request.header(EDIT_TOKEN_HEADER, token),
        }
    }

    /// Short label for logs. Never includes the secret.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Bearer(_) => "bearer",
            Self::EditToken(_) => "edit-token",
        }
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Credential::{}(<redacted>)", self.kind())
    }
}

/// Decides which credential, if any, accompanies `request`.
pub fn resolve(request: &RequestDescriptor, config: &ClientConfig) -> Option<Credential> {
    let policy = request.auth();

    if let Some(token) = &policy.edit_token {
        return Some(Credential::EditToken(token.clone()));
    }

    if policy.privileged {
        if let Some(key) = config.api_key() {
            return Some(Credential::Bearer(key.to_string()));
        }
    }

    if request.is_mutation() {
        if let Some(token) = config.edit_token() {
            return Some(Credential::EditToken(token.to_string()));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(api_key: Option<&str>, edit_token: Option<&str>) -> ClientConfig {
        let mut builder = ClientConfig::builder();
        if let Some(key) = api_key {
            builder = builder.api_key(key);
        }
        if let Some(token) = edit_token {
            builder = builder.edit_token(token);
        }
        builder.build_with_env(|_| None).unwrap()
    }

    fn bearer(s: &str) -> Option<Credential> {
        Some(Credential::Bearer(s.to_string()))
    }

    fn edit(s: &str) -> Option<Credential> {
        Some(Credential::EditToken(s.to_string()))
    }

    #[test]
    fn test_explicit_edit_token_beats_admin_key() {
        let req = RequestDescriptor::delete("/api/v1/apps/a")
            .privileged()
            .edit_token(Some("explicit"));
        assert_eq!(resolve(&req, &config(Some("admin"), Some("default"))), edit("explicit"));
    }

    #[test]
    fn test_explicit_edit_token_applies_to_any_method() {
        let req = RequestDescriptor::get("/api/v1/apps/a").edit_token(Some("explicit"));
        assert_eq!(resolve(&req, &config(None, None)), edit("explicit"));
    }

    #[test]
    fn test_privileged_uses_admin_key() {
        let req = RequestDescriptor::patch("/api/v1/apps/a").privileged();
        assert_eq!(resolve(&req, &config(Some("admin"), Some("default"))), bearer("admin"));
    }

    #[test]
    fn test_default_edit_token_only_for_mutations() {
        let cfg = config(None, Some("default"));

        let patch = RequestDescriptor::patch("/api/v1/apps/a").privileged();
        assert_eq!(resolve(&patch, &cfg), edit("default"));

        let delete = RequestDescriptor::delete("/api/v1/apps/a");
        assert_eq!(resolve(&delete, &cfg), edit("default"));

        let post = RequestDescriptor::post("/api/v1/apps/a/approve").privileged();
        assert_eq!(resolve(&post, &cfg), None);

        let get = RequestDescriptor::get("/api/v1/apps/a");
        assert_eq!(resolve(&get, &cfg), None);
    }

    #[test]
    fn test_unprivileged_call_ignores_admin_key() {
        let req = RequestDescriptor::post("/api/v1/apps");
        assert_eq!(resolve(&req, &config(Some("admin"), None)), None);
    }

    #[test]
    fn test_privileged_without_key_is_unauthenticated() {
        let req = RequestDescriptor::post("/api/v1/apps/a/approve").privileged();
        assert_eq!(resolve(&req, &config(None, None)), None);
    }

    #[test]
    fn test_debug_hides_secret() {
        let debug = format!("{:?}", Credential::Bearer("ad_secret".into()));
        assert_eq!(debug, "Credential::bearer(<redacted>)");
    }
}
