//
//  app-directory
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # HTTP Client for the App Directory API
//!
//! This module provides [`DirectoryClient`], the entry point for every API
//! operation. Each call runs the same pipeline:
//!
//! 1. the facade method builds a [`RequestDescriptor`]
//! 2. [`auth::resolve`](crate::auth::resolve) picks the credential
//! 3. [`HttpTransport`] performs one HTTP exchange
//! 4. [`RawResponse::decode`] parses the body or classifies the failure
//!
//! ## Features
//!
//! - Blocking, one network attempt per call, no retries
//! - Layered credential resolution (edit token, admin key, default edit token)
//! - Structured error taxonomy via [`ApiError`](super::ApiError)
//! - Custom User-Agent header

use serde_json::Value;
use tracing::{debug, warn};

use super::error::{Error, Result};
use super::request::RequestDescriptor;
use super::response::ResponseBody;
use super::transport::HttpTransport;
use crate::auth::{self, Credential};
use crate::config::ClientConfig;

/// The main client for the App Directory API.
///
/// The client holds only immutable configuration and a connection-reusing
/// HTTP client, so it can be shared between threads (`&DirectoryClient` is
/// `Send + Sync`).
///
/// # Creating a Client
///
/// ```rust,no_run
/// use app_directory::{ClientConfig, DirectoryClient};
///
/// // From APP_DIRECTORY_URL / APP_DIRECTORY_KEY, or http://localhost:3003
/// let client = DirectoryClient::from_env()?;
///
/// // Fully explicit
/// let admin = DirectoryClient::new(
///     ClientConfig::builder()
///         .base_url("https://apps.example.com")
///         .api_key("ad_...")
///         .build()?,
/// )?;
/// # Ok::<(), app_directory::Error>(())
/// ```
///
/// # Error Handling
///
/// ```rust,no_run
/// use app_directory::{DirectoryClient, Error, ErrorKind};
///
/// let client = DirectoryClient::from_env()?;
/// match client.get_app("does-not-exist") {
///     Ok(app) => println!("{}", app["name"]),
///     Err(Error::Api(e)) if e.kind() == ErrorKind::NotFound => println!("no such app"),
///     Err(Error::Transport(e)) => println!("server unreachable: {e}"),
///     Err(e) => return Err(e),
/// }
/// # Ok::<(), app_directory::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct DirectoryClient {
    config: ClientConfig,
    transport: HttpTransport,
}

impl DirectoryClient {
    /// Creates a client from a resolved configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] if the underlying HTTP client could not
    /// be initialized (e.g. the TLS backend failed to load).
    pub fn new(config: ClientConfig) -> Result<Self> {
        let transport = HttpTransport::new(config.timeout())?;
        Ok(Self { config, transport })
    }

    /// Creates a client configured from the environment and defaults.
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn base_url(&self) -> &str {
        self.config.base_url()
    }

    /// Runs any descriptor through the pipeline.
    ///
    /// This is the escape hatch for endpoints without a dedicated method:
    ///
    /// ```rust,no_run
    /// use app_directory::DirectoryClient;
    /// use app_directory::api::RequestDescriptor;
    ///
    /// let client = DirectoryClient::from_env()?;
    /// let events = client.send(
    ///     RequestDescriptor::get("/api/v1/apps").query("status", "all"),
    /// )?;
    /// # Ok::<(), app_directory::Error>(())
    /// ```
    ///
    /// # Errors
    ///
    /// - [`Error::Api`] for non-2xx responses and undecodable JSON bodies
    /// - [`Error::Transport`] when no response was received
    /// - [`Error::Config`] when the request could not be built
    pub fn send(&self, request: RequestDescriptor) -> Result<ResponseBody> {
        self.send_raw(&request).map(|(_, body)| body)
    }

    /// Runs the pipeline and requires a JSON (or empty) body.
    pub(crate) fn send_json(&self, request: RequestDescriptor) -> Result<Value> {
        let (status, body) = self.send_raw(&request)?;
        body.into_json(status)
    }

    /// Runs the pipeline and returns the body as text.
    pub(crate) fn send_text(&self, request: RequestDescriptor) -> Result<String> {
        self.send(request).map(ResponseBody::into_text)
    }

    fn send_raw(&self, request: &RequestDescriptor) -> Result<(u16, ResponseBody)> {
        let url = request.url(self.config.base_url())?;
        let credential = auth::resolve(request, &self.config);

        debug!(
            method = %request.method(),
            url = %url,
            auth = credential.as_ref().map_or("none", Credential::kind),
            "sending request"
        );

        let raw = self.transport.execute(url, request, credential.as_ref())?;
        let status = raw.status;
        debug!(status, bytes = raw.body.len(), "received response");

        match raw.decode() {
            Ok(body) => Ok((status, body)),
            Err(Error::Api(err)) => {
                warn!(
                    method = %request.method(),
                    path = %request.path(),
                    status = err.status(),
                    kind = %err.kind(),
                    "request failed: {}",
                    err.message()
                );
                Err(Error::Api(err))
            }
            Err(other) => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_client_is_send_and_sync() {
        assert_send_sync::<DirectoryClient>();
    }

    #[test]
    fn test_unreachable_server_is_transport_error() {
        let config = ClientConfig::builder()
            .base_url("http://127.0.0.1:1")
            .timeout(std::time::Duration::from_secs(2))
            .build_with_env(|_| None)
            .unwrap();
        let client = DirectoryClient::new(config).unwrap();

        let err = client.send(RequestDescriptor::get("/api/v1/health")).unwrap_err();
        assert!(err.is_transport(), "expected transport error, got {err:?}");
        assert_eq!(err.kind(), None);
    }
}
