//
//  app-directory
//  api/transport.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Blocking HTTP transport.
//!
//! Sends exactly one request per call and hands back a [`RawResponse`]
//! regardless of status. Classification happens later, in the decoder; only
//! failures that produced no response at all are reported here.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use url::Url;

use super::error::{Error, Result};
use super::request::RequestDescriptor;
use super::response::RawResponse;
use crate::auth::Credential;

/// Thin wrapper around a blocking `reqwest` client with a fixed timeout.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .user_agent(format!("app-directory-rust/{}", crate::VERSION))
            .timeout(timeout)
            .build()?;
        Ok(Self { http })
    }

    /// Performs the exchange described by `request` against `url`.
    pub fn execute(
        &self,
        url: Url,
        request: &RequestDescriptor,
        credential: Option<&Credential>,
    ) -> Result<RawResponse> {
        let mut builder = self.http.request(request.method().clone(), url);

        for (name, value) in request.headers() {
            builder = builder.header(name.as_str(), value.as_str());
        }

        if let Some(credential) = credential {
            builder = credential.apply_to_request(builder);
        }

        if let Some(body) = request.body() {
            let bytes = serde_json::to_vec(body)
                .map_err(|e| Error::Config(format!("could not encode request body: {e}")))?;
            builder = builder.body(bytes);
        }

        let response = builder.send().map_err(|e| {
            if e.is_builder() {
                Error::Config(e.to_string())
            } else {
                Error::Transport(e)
            }
        })?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.bytes()?.to_vec();

        Ok(RawResponse {
            status,
            content_type,
            body,
        })
    }
}
