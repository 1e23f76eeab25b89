//
//  app-directory
//  api/stats.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! View statistics and trending apps.

use serde_json::Value;

use super::client::DirectoryClient;
use super::error::Result;
use super::request::RequestDescriptor;

impl DirectoryClient {
    /// `GET /api/v1/apps/{id}/stats`: view counts and unique viewers.
    ///
    /// Counters grow with every `get_app`, so two calls may differ.
    pub fn app_stats(&self, id_or_slug: &str) -> Result<Value> {
        self.send_json(
            RequestDescriptor::get("/api/v1/apps")
                .segment(id_or_slug)
                .then("stats"),
        )
    }

    /// `GET /api/v1/apps/trending`: apps by recent views.
    ///
    /// `days` ranges 1-90 (server default 7), `limit` 1-50 (default 10).
    pub fn trending(&self, days: Option<u32>, limit: Option<u32>) -> Result<Value> {
        self.send_json(
            RequestDescriptor::get("/api/v1/apps/trending")
                .query_opt("days", days)
                .query_opt("limit", limit),
        )
    }
}
