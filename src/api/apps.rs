//
//  app-directory
//  api/apps.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! App listing, search, submission and management.
//!
//! # Overview
//!
//! Apps are the core resource of the directory. Anyone may submit one; the
//! submission response contains an `edit_token` that authorizes later
//! updates and deletion of that app without an API key. Save it.
//!
//! # Example
//!
//! ```rust,no_run
//! use app_directory::DirectoryClient;
//! use app_directory::api::{AppUpdate, ListAppsQuery, NewApp};
//!
//! let client = DirectoryClient::from_env()?;
//!
//! let submitted = client.submit(
//!     &NewApp::new("Weather API", "Forecasts", "Hourly forecasts for any city", "Alice")
//!         .with_protocol("rest")
//!         .with_tags(["weather", "forecast"]),
//! )?;
//! let id = submitted["id"].as_str().unwrap_or_default();
//! let token = submitted["edit_token"].as_str();
//!
//! client.update_app(id, &AppUpdate::new().set("name", "Weather API v2"), token)?;
//!
//! let featured = client.list_apps(&ListAppsQuery {
//!     featured: Some(true),
//!     ..Default::default()
//! })?;
//! # Ok::<(), app_directory::Error>(())
//! ```
//!
//! # Notes
//!
//! - `get_app` accepts either the UUID or the URL slug
//! - Status, featured and verified changes via `update_app` require an admin key

use serde::Serialize;
use serde_json::{Map, Value};

use super::client::DirectoryClient;
use super::error::Result;
use super::request::RequestDescriptor;

/// Protocols the directory knows about.
pub const PROTOCOLS: &[&str] = &["rest", "graphql", "grpc", "mcp", "a2a", "websocket", "other"];

/// Sort orders accepted by [`DirectoryClient::list_apps`].
pub const SORT_ORDERS: &[&str] = &["name", "newest", "oldest", "rating"];

/// Status filters accepted by [`DirectoryClient::list_apps`].
pub const STATUS_FILTERS: &[&str] = &["pending", "approved", "rejected", "deprecated", "all"];

/// Pagination parameters. Pages are 1-based.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Page {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl Page {
    pub fn new(page: u32, per_page: u32) -> Self {
        Self {
            page: Some(page),
            per_page: Some(per_page),
        }
    }

    pub(crate) fn apply(self, request: RequestDescriptor) -> RequestDescriptor {
        request
            .query_opt("page", self.page)
            .query_opt("per_page", self.per_page)
    }
}

/// Filters for [`DirectoryClient::list_apps`]. Unset fields are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListAppsQuery {
    pub category: Option<String>,
    pub protocol: Option<String>,
    /// One of [`STATUS_FILTERS`]. The server defaults to approved apps.
    pub status: Option<String>,
    pub featured: Option<bool>,
    pub verified: Option<bool>,
    /// Latest health check result, e.g. `healthy`.
    pub health: Option<String>,
    /// One of [`SORT_ORDERS`].
    pub sort: Option<String>,
    pub page: Option<u32>,
    /// Results per page (server default 20, max 100).
    pub per_page: Option<u32>,
}

impl ListAppsQuery {
    fn apply(&self, request: RequestDescriptor) -> RequestDescriptor {
        request
            .query_opt("category", self.category.as_deref())
            .query_opt("protocol", self.protocol.as_deref())
            .query_opt("status", self.status.as_deref())
            .query_opt("featured", self.featured)
            .query_opt("verified", self.verified)
            .query_opt("health", self.health.as_deref())
            .query_opt("sort", self.sort.as_deref())
            .query_opt("page", self.page)
            .query_opt("per_page", self.per_page)
    }
}

/// Full-text search parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub q: String,
    pub category: Option<String>,
    pub protocol: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl SearchQuery {
    pub fn new(q: impl Into<String>) -> Self {
        Self {
            q: q.into(),
            ..Default::default()
        }
    }

    fn apply(&self, request: RequestDescriptor) -> RequestDescriptor {
        request
            .query("q", self.q.as_str())
            .query_opt("category", self.category.as_deref())
            .query_opt("protocol", self.protocol.as_deref())
            .query_opt("page", self.page)
            .query_opt("per_page", self.per_page)
    }
}

/// Request body for submitting a new app.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NewApp {
    pub name: String,
    pub short_description: String,
    pub description: String,
    pub author_name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub homepage_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,

    /// OpenAPI or GraphQL schema location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_spec_url: Option<String>,

    /// One of [`PROTOCOLS`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_url: Option<String>,
}

impl NewApp {
    /// A submission with the four required fields.
    pub fn new(
        name: impl Into<String>,
        short_description: impl Into<String>,
        description: impl Into<String>,
        author_name: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            short_description: short_description.into(),
            description: description.into(),
            author_name: author_name.into(),
            ..Default::default()
        }
    }

    pub fn with_protocol(mut self, protocol: impl Into<String>) -> Self {
        self.protocol = Some(protocol.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_homepage_url(mut self, url: impl Into<String>) -> Self {
        self.homepage_url = Some(url.into());
        self
    }

    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = Some(url.into());
        self
    }

    pub fn with_api_spec_url(mut self, url: impl Into<String>) -> Self {
        self.api_spec_url = Some(url.into());
        self
    }

    pub fn with_logo_url(mut self, url: impl Into<String>) -> Self {
        self.logo_url = Some(url.into());
        self
    }

    pub fn with_author_url(mut self, url: impl Into<String>) -> Self {
        self.author_url = Some(url.into());
        self
    }
}

/// Field changes for [`DirectoryClient::update_app`].
///
/// The field set is open: whatever names are set are sent as-is and the
/// server decides which ones it accepts.
///
/// ```rust
/// use app_directory::api::AppUpdate;
///
/// let update = AppUpdate::new()
///     .set("name", "Renamed")
///     .set("tags", vec!["a", "b"]);
/// assert_eq!(update.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AppUpdate(Map<String, Value>);

impl AppUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `field` to `value`, replacing any earlier value for that field.
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(field.into(), value.into());
        self
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for AppUpdate {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

/// Copies `app_id` to `id` in a submission response when `id` is missing.
pub(crate) fn normalize_submission(mut response: Value) -> Value {
    if let Value::Object(fields) = &mut response {
        if !fields.contains_key("id") {
            if let Some(app_id) = fields.get("app_id").cloned() {
                fields.insert("id".to_string(), app_id);
            }
        }
    }
    response
}

impl DirectoryClient {
    /// `GET /api/v1/apps`: lists apps matching `query`.
    ///
    /// Returns an object with `apps`, `total`, `page` and `per_page`.
    pub fn list_apps(&self, query: &ListAppsQuery) -> Result<Value> {
        self.send_json(query.apply(RequestDescriptor::get("/api/v1/apps")))
    }

    /// `GET /api/v1/apps/{id_or_slug}`: fetches one app by UUID or slug.
    pub fn get_app(&self, id_or_slug: &str) -> Result<Value> {
        self.send_json(RequestDescriptor::get("/api/v1/apps").segment(id_or_slug))
    }

    /// `GET /api/v1/apps/search`: full-text search.
    pub fn search(&self, query: &SearchQuery) -> Result<Value> {
        self.send_json(query.apply(RequestDescriptor::get("/api/v1/apps/search")))
    }

    /// `GET /api/v1/apps/mine`: apps submitted with the configured API key.
    pub fn my_apps(&self) -> Result<Value> {
        self.send_json(RequestDescriptor::get("/api/v1/apps/mine").privileged())
    }

    /// `GET /api/v1/apps/pending`: the moderation queue (admin only).
    pub fn pending(&self, page: Page) -> Result<Value> {
        self.send_json(page.apply(RequestDescriptor::get("/api/v1/apps/pending").privileged()))
    }

    /// `POST /api/v1/apps`: submits a new app. No credential is sent.
    ///
    /// The response carries `app_id`, `slug`, `status` and `edit_token`;
    /// `id` is added as an alias of `app_id` when the server omits it.
    pub fn submit(&self, app: &NewApp) -> Result<Value> {
        let response = self.send_json(RequestDescriptor::post("/api/v1/apps").json(app)?)?;
        Ok(normalize_submission(response))
    }

    /// `PATCH /api/v1/apps/{id}`: changes the given fields.
    ///
    /// Authorized by `edit_token` when given, otherwise by the admin key,
    /// otherwise by the client's default edit token.
    pub fn update_app(&self, id: &str, fields: &AppUpdate, edit_token: Option<&str>) -> Result<Value> {
        self.send_json(
            RequestDescriptor::patch("/api/v1/apps")
                .segment(id)
                .json(fields)?
                .privileged()
                .edit_token(edit_token),
        )
    }

    /// `DELETE /api/v1/apps/{id}`: deletes an app and its reviews.
    pub fn delete_app(&self, id: &str, edit_token: Option<&str>) -> Result<Value> {
        self.send_json(
            RequestDescriptor::delete("/api/v1/apps")
                .segment(id)
                .privileged()
                .edit_token(edit_token),
        )
    }

    /// `GET /api/v1/categories`: categories with app counts.
    pub fn categories(&self) -> Result<Value> {
        self.send_json(RequestDescriptor::get("/api/v1/categories"))
    }

    /// Searches for `name` and returns the first app whose name matches it
    /// case-insensitively.
    pub fn find_by_name(&self, name: &str) -> Result<Option<Value>> {
        let results = self.search(&SearchQuery::new(name))?;
        let wanted = name.to_lowercase();
        let found = results
            .get("apps")
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .find(|app| {
                app.get("name")
                    .and_then(Value::as_str)
                    .is_some_and(|n| n.to_lowercase() == wanted)
            })
            .cloned();
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_query_skips_unset_fields() {
        let query = ListAppsQuery {
            category: Some("data".into()),
            featured: Some(false),
            per_page: Some(50),
            ..Default::default()
        };
        let req = query.apply(RequestDescriptor::get("/api/v1/apps"));
        assert_eq!(req.query_string(), "category=data&featured=false&per_page=50");
    }

    #[test]
    fn test_default_list_query_is_empty() {
        let req = ListAppsQuery::default().apply(RequestDescriptor::get("/api/v1/apps"));
        assert!(req.query_pairs().is_empty());
    }

    #[test]
    fn test_search_always_sends_q() {
        let req = SearchQuery::new("").apply(RequestDescriptor::get("/api/v1/apps/search"));
        assert_eq!(req.query_string(), "q=");
    }

    #[test]
    fn test_new_app_omits_optional_fields() {
        let body = serde_json::to_value(NewApp::new("n", "s", "d", "a")).unwrap();
        assert_eq!(
            body,
            json!({"name": "n", "short_description": "s", "description": "d", "author_name": "a"})
        );

        let body = serde_json::to_value(NewApp::new("n", "s", "d", "a").with_tags(["x", "y"])).unwrap();
        assert_eq!(body["tags"], json!(["x", "y"]));
    }

    #[test]
    fn test_update_serializes_as_flat_map() {
        let update = AppUpdate::new().set("name", "New").set("featured", true);
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({"name": "New", "featured": true})
        );
    }

    #[test]
    fn test_submission_gets_id_alias() {
        let normalized = normalize_submission(json!({"app_id": "abc", "slug": "x"}));
        assert_eq!(normalized["id"], "abc");

        let untouched = normalize_submission(json!({"app_id": "abc", "id": "other"}));
        assert_eq!(untouched["id"], "other");

        assert_eq!(normalize_submission(json!([1])), json!([1]));
    }
}
