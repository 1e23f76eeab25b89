//
//  app-directory
//  api/moderation.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Admin moderation: approve, reject, deprecate and restore apps.
//!
//! All four operations require the admin API key. Without one the request
//! goes out unauthenticated and the server answers 401, which surfaces as
//! [`ErrorKind::Auth`](super::ErrorKind::Auth). Repeating a transition that
//! already happened (e.g. deprecating a deprecated app) yields
//! [`ErrorKind::Conflict`](super::ErrorKind::Conflict).

use serde::Serialize;
use serde_json::Value;

use super::client::DirectoryClient;
use super::error::Result;
use super::request::RequestDescriptor;

#[derive(Debug, Clone, Default, Serialize)]
struct ApproveBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    note: Option<&'a str>,
}

#[derive(Debug, Clone, Serialize)]
struct RejectBody<'a> {
    reason: &'a str,
}

/// Request body for [`DirectoryClient::deprecate`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Deprecation {
    pub reason: String,

    /// ID of the app users should move to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replacement_app_id: Option<String>,

    /// ISO-8601 date after which the app stops working.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sunset_at: Option<String>,
}

impl Deprecation {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
            ..Default::default()
        }
    }

    pub fn with_replacement(mut self, app_id: impl Into<String>) -> Self {
        self.replacement_app_id = Some(app_id.into());
        self
    }

    pub fn with_sunset(mut self, sunset_at: impl Into<String>) -> Self {
        self.sunset_at = Some(sunset_at.into());
        self
    }
}

impl DirectoryClient {
    /// `POST /api/v1/apps/{id}/approve`
    pub fn approve(&self, id: &str, note: Option<&str>) -> Result<Value> {
        self.send_json(
            RequestDescriptor::post("/api/v1/apps")
                .segment(id)
                .then("approve")
                .json(&ApproveBody { note })?
                .privileged(),
        )
    }

    /// `POST /api/v1/apps/{id}/reject`. The server requires a non-empty reason.
    pub fn reject(&self, id: &str, reason: &str) -> Result<Value> {
        self.send_json(
            RequestDescriptor::post("/api/v1/apps")
                .segment(id)
                .then("reject")
                .json(&RejectBody { reason })?
                .privileged(),
        )
    }

    /// `POST /api/v1/apps/{id}/deprecate`
    pub fn deprecate(&self, id: &str, deprecation: &Deprecation) -> Result<Value> {
        self.send_json(
            RequestDescriptor::post("/api/v1/apps")
                .segment(id)
                .then("deprecate")
                .json(deprecation)?
                .privileged(),
        )
    }

    /// `POST /api/v1/apps/{id}/undeprecate`
    pub fn undeprecate(&self, id: &str) -> Result<Value> {
        self.send_json(
            RequestDescriptor::post("/api/v1/apps")
                .segment(id)
                .then("undeprecate")
                .json(&serde_json::json!({}))?
                .privileged(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_approve_body_without_note_is_empty_object() {
        assert_eq!(serde_json::to_value(ApproveBody::default()).unwrap(), json!({}));
    }

    #[test]
    fn test_deprecation_body() {
        let body = Deprecation::new("superseded")
            .with_replacement("new-id")
            .with_sunset("2026-12-31");
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"reason": "superseded", "replacement_app_id": "new-id", "sunset_at": "2026-12-31"})
        );
        assert_eq!(
            serde_json::to_value(Deprecation::new("old")).unwrap(),
            json!({"reason": "old"})
        );
    }
}
