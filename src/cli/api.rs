//
//  app-directory
//  cli/api.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Direct API access command
//!
//! Sends one request through the same pipeline as every other command, so
//! credentials and error handling behave identically. Useful for endpoints
//! without a dedicated command, or for debugging.
//!
//! ## Examples
//!
//! ```bash
//! # Any GET, query string included
//! ad api /api/v1/apps?status=all
//!
//! # A privileged POST with a JSON body
//! ad api -X POST /api/v1/apps/<id>/approve --admin -F note="Looks good"
//!
//! # Body from a file (- for stdin)
//! ad api -X PATCH /api/v1/apps/<id> --input patch.json
//! ```

use std::fs;

use anyhow::{bail, Context, Result};
use clap::Args;
use reqwest::Method;
use serde_json::{Map, Value};

use crate::api::{RequestDescriptor, ResponseBody};

use super::GlobalOptions;

/// Make a raw API request
#[derive(Args, Debug)]
pub struct ApiCommand {
    /// API path, optionally with a query string (e.g. /api/v1/apps?page=2)
    pub endpoint: String,

    /// HTTP method (GET, POST, PUT, PATCH, DELETE)
    #[arg(long, short = 'X', default_value = "GET")]
    pub method: String,

    /// Request headers as 'Name: Value' (repeatable)
    #[arg(long, short = 'H', action = clap::ArgAction::Append)]
    pub header: Vec<String>,

    /// Body fields as key=value; values are parsed as JSON when possible
    /// (repeatable)
    #[arg(long, short = 'F', action = clap::ArgAction::Append)]
    pub field: Vec<String>,

    /// Read the JSON body from a file (- for stdin)
    #[arg(long, short = 'f', conflicts_with = "field")]
    pub input: Option<String>,

    /// Send the admin API key
    #[arg(long)]
    pub admin: bool,

    /// Edit token for this request only. Wins over the admin key; the global
    /// --edit-token is only a default for PATCH and DELETE.
    #[arg(long, value_name = "TOKEN")]
    pub token: Option<String>,
}

impl ApiCommand {
    pub fn run(&self, global: &GlobalOptions) -> Result<()> {
        let request = self.build_request()?;
        let client = global.client()?;

        match client.send(request)? {
            ResponseBody::Json(value) => global.writer().write_value(&value),
            ResponseBody::Raw(bytes) => {
                global.writer().write_text(&String::from_utf8_lossy(&bytes));
                Ok(())
            }
        }
    }

    fn build_request(&self) -> Result<RequestDescriptor> {
        let method = self.parse_method()?;
        let (path, query) = match self.endpoint.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (self.endpoint.as_str(), None),
        };

        let mut request = RequestDescriptor::new(method, path);
        if let Some(query) = query {
            for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
                request = request.query(&key, &*value);
            }
        }

        for header in &self.header {
            let (name, value) = header
                .split_once(':')
                .with_context(|| format!("Invalid header format: {header}. Expected 'Name: Value'"))?;
            request = request.header(name.trim(), value.trim());
        }

        if let Some(body) = self.build_body()? {
            request = request.json(&body)?;
        }

        if self.admin {
            request = request.privileged();
        }
        Ok(request.edit_token(self.token.as_deref()))
    }

    fn parse_method(&self) -> Result<Method> {
        match self.method.to_uppercase().as_str() {
            "GET" => Ok(Method::GET),
            "POST" => Ok(Method::POST),
            "PUT" => Ok(Method::PUT),
            "PATCH" => Ok(Method::PATCH),
            "DELETE" => Ok(Method::DELETE),
            _ => bail!("Unsupported HTTP method: {}", self.method),
        }
    }

    fn build_body(&self) -> Result<Option<Value>> {
        if let Some(input) = &self.input {
            let content = if input == "-" {
                let mut buffer = String::new();
                std::io::Read::read_to_string(&mut std::io::stdin(), &mut buffer)?;
                buffer
            } else {
                fs::read_to_string(input).with_context(|| format!("Failed to read {input}"))?
            };
            return Ok(Some(serde_json::from_str(&content)?));
        }

        if self.field.is_empty() {
            return Ok(None);
        }

        let mut body = Map::new();
        for field in &self.field {
            let (key, raw) = field
                .split_once('=')
                .with_context(|| format!("Invalid field format: {field}. Expected key=value"))?;
            let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
            body.insert(key.to_string(), value);
        }
        Ok(Some(Value::Object(body)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::resolve;
    use crate::config::ClientConfig;
    use serde_json::json;

    fn command(endpoint: &str) -> ApiCommand {
        ApiCommand {
            endpoint: endpoint.to_string(),
            method: "GET".to_string(),
            header: Vec::new(),
            field: Vec::new(),
            input: None,
            admin: false,
            token: None,
        }
    }

    #[test]
    fn test_build_request_splits_query() {
        let request = command("/api/v1/apps?status=all&page=2").build_request().unwrap();
        assert_eq!(request.path(), "/api/v1/apps");
        assert_eq!(request.query_string(), "status=all&page=2");
        assert!(request.body().is_none());
    }

    #[test]
    fn test_build_request_fields_and_flags() {
        let mut cmd = command("/api/v1/apps/abc/approve");
        cmd.method = "post".to_string();
        cmd.field = vec!["note=Looks good".to_string(), "count=3".to_string()];
        cmd.header = vec!["X-Trace: 1".to_string()];
        cmd.admin = true;

        let request = cmd.build_request().unwrap();
        assert_eq!(request.method(), &Method::POST);
        assert_eq!(request.body(), Some(&json!({"note": "Looks good", "count": 3})));
        assert_eq!(request.header_value("x-trace"), Some("1"));
        assert!(request.auth().privileged);
        assert_eq!(request.auth().edit_token, None);
    }

    fn config_with_key_and_default_token() -> ClientConfig {
        ClientConfig::builder()
            .api_key("admin")
            .edit_token("envtok")
            .build_with_env(|_| None)
            .unwrap()
    }

    #[test]
    fn test_default_edit_token_stays_off_reads_and_admin_calls() {
        let config = config_with_key_and_default_token();

        let read = command("/api/v1/apps/abc").build_request().unwrap();
        assert!(resolve(&read, &config).is_none());

        let mut approve = command("/api/v1/apps/abc/approve");
        approve.method = "POST".to_string();
        approve.admin = true;
        let request = approve.build_request().unwrap();
        assert_eq!(resolve(&request, &config).map(|c| c.kind()), Some("bearer"));
    }

    #[test]
    fn test_token_flag_is_explicit() {
        let config = config_with_key_and_default_token();

        let mut cmd = command("/api/v1/apps/abc");
        cmd.method = "PATCH".to_string();
        cmd.admin = true;
        cmd.token = Some("per-call".to_string());
        let request = cmd.build_request().unwrap();

        assert_eq!(request.auth().edit_token.as_deref(), Some("per-call"));
        assert_eq!(resolve(&request, &config).map(|c| c.kind()), Some("edit-token"));
    }

    #[test]
    fn test_rejects_unknown_method() {
        let mut cmd = command("/x");
        cmd.method = "TRACE".to_string();
        assert!(cmd.build_request().is_err());
    }
}
