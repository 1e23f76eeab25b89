//
//  app-directory
//  api/request.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Request Descriptors
//!
//! A [`RequestDescriptor`] is the fully assembled description of one pending
//! request: method, path segments, query pairs, headers, optional JSON body
//! and the authorization flags the resolver needs. The facade builds one per
//! call and hands it to [`DirectoryClient::send`](super::DirectoryClient::send).
//!
//! ## Query Parameters
//!
//! Optional parameters are added with [`RequestDescriptor::query_opt`]. A
//! `None` value is dropped entirely, so the server never sees an empty key:
//!
//! ```rust
//! use app_directory::api::RequestDescriptor;
//!
//! let req = RequestDescriptor::get("/api/v1/apps")
//!     .query_opt("category", Some("data"))
//!     .query_opt("featured", Some(true))
//!     .query_opt::<u32>("page", None);
//!
//! assert_eq!(req.query_string(), "category=data&featured=true");
//! ```
//!
//! ## Path Segments
//!
//! Caller-supplied identifiers are appended with [`RequestDescriptor::segment`].
//! They are used verbatim except for the percent-encoding a path segment
//! requires, so an ID and a slug travel the same way.

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use url::Url;

use super::error::{Error, Result};

/// A value that can appear in a query string.
///
/// Booleans render as the literal strings `"true"` and `"false"`.
pub trait QueryValue {
    fn to_query_value(&self) -> String;
}

impl QueryValue for bool {
    fn to_query_value(&self) -> String {
        let literal = if *self { "true" } else { "false" };
        literal.to_string()
    }
}

impl QueryValue for str {
    fn to_query_value(&self) -> String {
        self.to_string()
    }
}

impl QueryValue for String {
    fn to_query_value(&self) -> String {
        self.clone()
    }
}

impl<T: QueryValue + ?Sized> QueryValue for &T {
    fn to_query_value(&self) -> String {
        (**self).to_query_value()
    }
}

macro_rules! numeric_query_value {
    ($($t:ty),*) => {
        $(impl QueryValue for $t {
            fn to_query_value(&self) -> String {
                self.to_string()
            }
        })*
    };
}

numeric_query_value!(u8, u16, u32, u64, usize, i32, i64);

/// Authorization inputs for one request.
///
/// The descriptor only records what the call site asked for; the decision of
/// which credential to attach is made by [`crate::auth::resolve`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthPolicy {
    /// The operation needs the admin credential when the client has one.
    pub privileged: bool,
    /// An edit token supplied for this call only.
    pub edit_token: Option<String>,
}

/// One pending HTTP request described as plain data.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    method: Method,
    segments: Vec<String>,
    query: Vec<(String, String)>,
    headers: Vec<(String, String)>,
    body: Option<Value>,
    auth: AuthPolicy,
}

impl RequestDescriptor {
    /// Starts a descriptor for `path`, a static route such as `/api/v1/apps`.
    pub fn new(method: Method, path: &str) -> Self {
        Self {
            method,
            segments: path
                .split('/')
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
            auth: AuthPolicy::default(),
        }
    }

    pub fn get(path: &str) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: &str) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn patch(path: &str) -> Self {
        Self::new(Method::PATCH, path)
    }

    pub fn delete(path: &str) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Appends a caller-supplied identifier as a single path segment.
    pub fn segment(mut self, id: impl Into<String>) -> Self {
        self.segments.push(id.into());
        self
    }

    /// Appends a static route component after an identifier, e.g. `reviews`.
    pub fn then(self, path: &str) -> Self {
        path.split('/')
            .filter(|s| !s.is_empty())
            .fold(self, |req, s| req.segment(s))
    }

    /// Adds a query parameter that is always present.
    pub fn query<V: QueryValue + ?Sized>(mut self, key: &str, value: &V) -> Self {
        self.query.push((key.to_string(), value.to_query_value()));
        self
    }

    /// Adds a query parameter only when `value` is `Some`.
    pub fn query_opt<V: QueryValue>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(v) => self.query(key, &v),
            None => self,
        }
    }

    pub fn header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.push((name.to_string(), value.into()));
        self
    }

    /// Attaches a JSON body, setting `Content-Type` unless one is already set.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self> {
        let value = serde_json::to_value(body)
            .map_err(|e| Error::Config(format!("could not serialize request body: {e}")))?;
        if self.header_value("content-type").is_none() {
            self.headers
                .push(("Content-Type".to_string(), "application/json".to_string()));
        }
        self.body = Some(value);
        Ok(self)
    }

    /// Marks the request as needing the admin credential when available.
    pub fn privileged(mut self) -> Self {
        self.auth.privileged = true;
        self
    }

    /// Supplies an edit token for this call only.
    pub fn edit_token(mut self, token: Option<&str>) -> Self {
        self.auth.edit_token = token.map(str::to_string);
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    /// The unencoded path, for logging and assertions.
    pub fn path(&self) -> String {
        format!("/{}", self.segments.join("/"))
    }

    pub fn query_pairs(&self) -> &[(String, String)] {
        &self.query
    }

    /// The query string as it will be sent, without the leading `?`.
    pub fn query_string(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.query.iter())
            .finish()
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Case-insensitive header lookup.
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    pub fn auth(&self) -> &AuthPolicy {
        &self.auth
    }

    /// PATCH and DELETE change an existing resource.
    pub fn is_mutation(&self) -> bool {
        self.method == Method::PATCH || self.method == Method::DELETE
    }

    /// Resolves the absolute URL against `base_url`.
    ///
    /// Any path prefix on the base (e.g. `https://host/directory`) is kept.
    pub fn url(&self, base_url: &str) -> Result<Url> {
        let mut url = Url::parse(base_url)
            .map_err(|e| Error::Config(format!("invalid base URL '{base_url}': {e}")))?;
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| Error::Config(format!("base URL '{base_url}' cannot carry a path")))?;
            path.pop_if_empty();
            path.extend(self.segments.iter());
        }
        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(self.query.iter());
        }
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_absent_values_are_dropped() {
        let req = RequestDescriptor::get("/api/v1/apps")
            .query_opt::<&str>("category", None)
            .query_opt("protocol", Some("rest"))
            .query_opt::<u32>("page", None);
        assert_eq!(req.query_pairs(), &[("protocol".to_string(), "rest".to_string())]);
    }

    #[test]
    fn test_booleans_are_lowercase_literals() {
        let req = RequestDescriptor::get("/api/v1/apps")
            .query_opt("featured", Some(true))
            .query_opt("verified", Some(false));
        assert_eq!(req.query_string(), "featured=true&verified=false");
    }

    #[test]
    fn test_url_without_query_has_no_question_mark() {
        let url = RequestDescriptor::get("/api/v1/health")
            .url("http://localhost:3003")
            .unwrap();
        assert_eq!(url.as_str(), "http://localhost:3003/api/v1/health");
    }

    #[test]
    fn test_url_keeps_base_prefix() {
        let url = RequestDescriptor::get("/api/v1/apps")
            .segment("my-app")
            .then("reviews")
            .query("page", &2u32)
            .url("https://example.com/directory")
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://example.com/directory/api/v1/apps/my-app/reviews?page=2"
        );
    }

    #[test]
    fn test_segment_is_encoded_as_one_segment() {
        let url = RequestDescriptor::get("/api/v1/apps")
            .segment("a b/c")
            .url("http://localhost:3003")
            .unwrap();
        assert_eq!(url.path(), "/api/v1/apps/a%20b%2Fc");
    }

    #[test]
    fn test_json_sets_content_type_once() {
        let req = RequestDescriptor::post("/api/v1/apps")
            .header("content-type", "application/vnd.custom+json")
            .json(&json!({"name": "x"}))
            .unwrap();
        assert_eq!(req.headers().len(), 1);
        assert_eq!(req.header_value("Content-Type"), Some("application/vnd.custom+json"));

        let req = RequestDescriptor::post("/api/v1/apps").json(&json!({})).unwrap();
        assert_eq!(req.header_value("content-type"), Some("application/json"));
    }

    #[test]
    fn test_no_body_unless_supplied() {
        let req = RequestDescriptor::delete("/api/v1/keys").segment("k1");
        assert!(req.body().is_none());
        assert!(req.header_value("content-type").is_none());
        assert!(req.is_mutation());
        assert!(!RequestDescriptor::post("/x").is_mutation());
    }

    #[test]
    fn test_invalid_base_url() {
        let err = RequestDescriptor::get("/api/v1/health").url("not a url").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
