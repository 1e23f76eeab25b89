//
//  app-directory
//  api/webhooks.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Webhook registration (admin only).
//!
//! Deliveries are signed with HMAC-SHA256 when a secret is set. The server
//! only returns the secret once, in the creation response.

use serde::Serialize;
use serde_json::Value;

use super::client::DirectoryClient;
use super::error::Result;
use super::request::RequestDescriptor;

/// Event names a webhook can subscribe to.
pub const WEBHOOK_EVENTS: &[&str] = &[
    "app.submitted",
    "app.approved",
    "app.rejected",
    "app.deprecated",
    "app.undeprecated",
    "app.updated",
    "app.deleted",
    "review.submitted",
    "health.checked",
];

/// Request body for [`DirectoryClient::create_webhook`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NewWebhook {
    pub url: String,

    /// Subscribed events; all of [`WEBHOOK_EVENTS`] when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
}

impl NewWebhook {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    pub fn with_events<I, S>(mut self, events: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.events = Some(events.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_secret(mut self, secret: impl Into<String>) -> Self {
        self.secret = Some(secret.into());
        self
    }
}

/// Request body for [`DirectoryClient::update_webhook`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WebhookUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<String>>,

    /// Re-enabling a webhook also resets its failure count.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

impl DirectoryClient {
    /// `POST /api/v1/webhooks`
    pub fn create_webhook(&self, webhook: &NewWebhook) -> Result<Value> {
        self.send_json(
            RequestDescriptor::post("/api/v1/webhooks")
                .json(webhook)?
                .privileged(),
        )
    }

    /// `GET /api/v1/webhooks`
    pub fn list_webhooks(&self) -> Result<Value> {
        self.send_json(RequestDescriptor::get("/api/v1/webhooks").privileged())
    }

    /// `PATCH /api/v1/webhooks/{id}`
    pub fn update_webhook(&self, id: &str, update: &WebhookUpdate) -> Result<Value> {
        self.send_json(
            RequestDescriptor::patch("/api/v1/webhooks")
                .segment(id)
                .json(update)?
                .privileged(),
        )
    }

    /// `DELETE /api/v1/webhooks/{id}`
    pub fn delete_webhook(&self, id: &str) -> Result<Value> {
        self.send_json(
            RequestDescriptor::delete("/api/v1/webhooks")
                .segment(id)
                .privileged(),
        )
    }
}
