//
//  app-directory
//  api/keys.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! API key management (admin only).

use serde::Serialize;
use serde_json::Value;

use super::client::DirectoryClient;
use super::error::Result;
use super::request::RequestDescriptor;

/// Request body for [`DirectoryClient::create_key`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NewKey {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_admin: Option<bool>,

    /// Requests per minute; the server default applies when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_limit: Option<u32>,
}

impl NewKey {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn admin(mut self, is_admin: bool) -> Self {
        self.is_admin = Some(is_admin);
        self
    }

    pub fn with_rate_limit(mut self, rate_limit: u32) -> Self {
        self.rate_limit = Some(rate_limit);
        self
    }
}

impl DirectoryClient {
    /// `GET /api/v1/keys`
    pub fn list_keys(&self) -> Result<Value> {
        self.send_json(RequestDescriptor::get("/api/v1/keys").privileged())
    }

    /// `POST /api/v1/keys`. The response contains the plaintext key, which
    /// the server never shows again.
    pub fn create_key(&self, key: &NewKey) -> Result<Value> {
        self.send_json(RequestDescriptor::post("/api/v1/keys").json(key)?.privileged())
    }

    /// `DELETE /api/v1/keys/{id}`
    pub fn revoke_key(&self, id: &str) -> Result<Value> {
        self.send_json(RequestDescriptor::delete("/api/v1/keys").segment(id).privileged())
    }
}
