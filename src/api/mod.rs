//
//  app-directory
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! Typed access to the App Directory REST API (`/api/v1`).
//!
//! ## Architecture
//!
//! The request/response pipeline:
//!
//! - [`request`]: [`RequestDescriptor`] builder (method, path, query, body, auth flags)
//! - [`transport`]: one blocking HTTP exchange with a timeout
//! - [`response`]: JSON/raw decoding of success bodies
//! - [`error`]: the [`ApiError`] taxonomy for non-2xx responses
//! - [`client`]: [`DirectoryClient`], which wires the pieces together
//!
//! The operations, implemented as methods on [`DirectoryClient`]:
//!
//! - [`apps`]: list, search, submit, update, delete, categories
//! - [`moderation`]: approve, reject, deprecate, undeprecate
//! - [`reviews`]: submit and list reviews
//! - [`stats`]: view counts and trending apps
//! - [`checks`]: health checks of listed apps
//! - [`webhooks`]: webhook registration
//! - [`keys`]: API key management
//! - [`system`]: service health and discovery documents
//!
//! ## Error Handling
//!
//! Non-2xx responses become [`ApiError`] values tagged with an [`ErrorKind`]:
//!
//! - `Auth`: 401 Unauthorized
//! - `Forbidden`: 403 Forbidden
//! - `NotFound`: 404 Not Found
//! - `Conflict`: 409 Conflict
//! - `RateLimit`: 429 Too Many Requests
//! - `Validation`: 400 Bad Request, 422 Unprocessable Entity
//! - `Server`: 5xx
//! - `Generic`: everything else

pub mod apps;
pub mod checks;
pub mod client;
pub mod error;
pub mod keys;
pub mod moderation;
pub mod request;
pub mod response;
pub mod reviews;
pub mod stats;
pub mod system;
pub mod transport;
pub mod webhooks;

pub use apps::{AppUpdate, ListAppsQuery, NewApp, Page, SearchQuery, PROTOCOLS, SORT_ORDERS, STATUS_FILTERS};
pub use client::DirectoryClient;
pub use error::{ApiError, Error, ErrorKind, Result};
pub use keys::NewKey;
pub use moderation::Deprecation;
pub use request::{AuthPolicy, QueryValue, RequestDescriptor};
pub use response::{RawResponse, ResponseBody};
pub use reviews::NewReview;
pub use webhooks::{NewWebhook, WebhookUpdate, WEBHOOK_EVENTS};
