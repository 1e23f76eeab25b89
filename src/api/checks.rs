//
//  app-directory
//  api/checks.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Health checks of listed apps.
//!
//! The directory periodically probes each app's `api_url`. Admins can
//! trigger checks on demand; history and the summary are public.

use serde::Serialize;
use serde_json::Value;

use super::apps::Page;
use super::client::DirectoryClient;
use super::error::Result;
use super::request::RequestDescriptor;

#[derive(Debug, Clone, Default, Serialize)]
struct BatchBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    app_ids: Option<&'a [String]>,
}

impl DirectoryClient {
    /// `POST /api/v1/apps/{id}/health-check` (admin)
    pub fn health_check(&self, app_id: &str) -> Result<Value> {
        self.send_json(
            RequestDescriptor::post("/api/v1/apps")
                .segment(app_id)
                .then("health-check")
                .json(&serde_json::json!({}))?
                .privileged(),
        )
    }

    /// `POST /api/v1/apps/health-check/batch` (admin). Checks every app
    /// with an API URL when `app_ids` is `None`.
    pub fn health_check_batch(&self, app_ids: Option<&[String]>) -> Result<Value> {
        self.send_json(
            RequestDescriptor::post("/api/v1/apps/health-check/batch")
                .json(&BatchBody { app_ids })?
                .privileged(),
        )
    }

    /// `GET /api/v1/apps/{id}/health`
    pub fn health_history(&self, app_id: &str, page: Page) -> Result<Value> {
        self.send_json(page.apply(
            RequestDescriptor::get("/api/v1/apps")
                .segment(app_id)
                .then("health"),
        ))
    }

    /// `GET /api/v1/apps/health/summary`
    pub fn health_summary(&self) -> Result<Value> {
        self.send_json(RequestDescriptor::get("/api/v1/apps/health/summary"))
    }

    /// `GET /api/v1/health-check/schedule` (admin)
    pub fn health_schedule(&self) -> Result<Value> {
        self.send_json(RequestDescriptor::get("/api/v1/health-check/schedule").privileged())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_batch_body() {
        assert_eq!(serde_json::to_value(BatchBody::default()).unwrap(), json!({}));
        let ids = vec!["a".to_string(), "b".to_string()];
        assert_eq!(
            serde_json::to_value(BatchBody { app_ids: Some(&ids) }).unwrap(),
            json!({"app_ids": ["a", "b"]})
        );
    }
}
