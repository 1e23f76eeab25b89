//
//  app-directory
//  api/system.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Service health and discovery documents.
//!
//! Discovery endpoints describe the API for agents and tooling. Markdown and
//! plain-text documents come back as `String`, JSON documents as `Value`.

use serde_json::Value;
use tracing::debug;

use super::client::DirectoryClient;
use super::error::Result;
use super::request::RequestDescriptor;

impl DirectoryClient {
    /// `GET /api/v1/health`
    pub fn health(&self) -> Result<Value> {
        self.send_json(RequestDescriptor::get("/api/v1/health"))
    }

    /// True when the service answers `/api/v1/health` with `status: "ok"`.
    ///
    /// Every failure counts as unhealthy, including transport errors such as
    /// a refused connection.
    pub fn is_healthy(&self) -> bool {
        match self.health() {
            Ok(body) => body.get("status").and_then(Value::as_str) == Some("ok"),
            Err(e) => {
                debug!("health probe failed: {e}");
                false
            }
        }
    }

    /// `GET /api/v1/llms.txt`: service documentation for language models.
    pub fn llms_txt(&self) -> Result<String> {
        self.send_text(RequestDescriptor::get("/api/v1/llms.txt"))
    }

    /// `GET /llms.txt`: the root-level summary.
    pub fn llms_txt_root(&self) -> Result<String> {
        self.send_text(RequestDescriptor::get("/llms.txt"))
    }

    /// `GET /api/v1/openapi.json`
    pub fn openapi(&self) -> Result<Value> {
        self.send_json(RequestDescriptor::get("/api/v1/openapi.json"))
    }

    /// `GET /.well-known/skills/index.json`
    pub fn skills(&self) -> Result<Value> {
        self.send_json(RequestDescriptor::get("/.well-known/skills/index.json"))
    }

    /// `GET /.well-known/skills/app-directory/SKILL.md`
    pub fn skill_md(&self) -> Result<String> {
        self.send_text(RequestDescriptor::get("/.well-known/skills/app-directory/SKILL.md"))
    }

    /// `GET /api/v1/skills/SKILL.md`
    pub fn skill_md_v1(&self) -> Result<String> {
        self.send_text(RequestDescriptor::get("/api/v1/skills/SKILL.md"))
    }
}
