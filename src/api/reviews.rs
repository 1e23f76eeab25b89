//
//  app-directory
//  api/reviews.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! App reviews.
//!
//! Reviews submitted with an API key are upserted, one per key and app.
//! Anonymous reviews always create a new entry. This client never attaches
//! a credential to review submissions, so every review it posts is anonymous.

use serde::Serialize;
use serde_json::Value;

use super::apps::Page;
use super::client::DirectoryClient;
use super::error::Result;
use super::request::RequestDescriptor;

/// Request body for [`DirectoryClient::submit_review`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NewReview {
    /// 1 to 5 stars.
    pub rating: u8,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    /// Display name; the server shows "anonymous" when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviewer_name: Option<String>,
}

impl NewReview {
    pub fn new(rating: u8) -> Self {
        Self {
            rating,
            ..Default::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn with_reviewer(mut self, name: impl Into<String>) -> Self {
        self.reviewer_name = Some(name.into());
        self
    }
}

impl DirectoryClient {
    /// `POST /api/v1/apps/{id}/reviews`
    pub fn submit_review(&self, app_id: &str, review: &NewReview) -> Result<Value> {
        self.send_json(
            RequestDescriptor::post("/api/v1/apps")
                .segment(app_id)
                .then("reviews")
                .json(review)?,
        )
    }

    /// `GET /api/v1/apps/{id}/reviews`
    pub fn list_reviews(&self, app_id: &str, page: Page) -> Result<Value> {
        self.send_json(page.apply(
            RequestDescriptor::get("/api/v1/apps")
                .segment(app_id)
                .then("reviews"),
        ))
    }
}
