//
//  app-directory
//  api/response.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Raw HTTP outcomes and their decoding.

use serde_json::Value;

use super::error::{ApiError, ErrorKind, Result};

/// The result of one HTTP exchange before decoding or classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// True when the declared content type is a JSON media type.
    pub fn is_json(&self) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|ct| ct.to_ascii_lowercase().contains("json"))
    }

    /// Decodes a success response, or classifies a failure.
    pub fn decode(self) -> Result<ResponseBody> {
        if !self.is_success() {
            return Err(ApiError::from_response(self.status, &self.body).into());
        }

        if self.is_json() {
            return match serde_json::from_slice::<Value>(&self.body) {
                Ok(value) => Ok(ResponseBody::Json(value)),
                Err(e) => Err(ApiError::undecodable(self.status, &self.body, &e).into()),
            };
        }

        Ok(ResponseBody::Raw(self.body))
    }
}

/// A decoded success body.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    /// The body declared a JSON content type and parsed.
    Json(Value),
    /// Any other content type, returned unmodified.
    Raw(Vec<u8>),
}

impl ResponseBody {
    /// The body as a JSON value.
    ///
    /// An empty non-JSON body (e.g. `204 No Content`) becomes `null`. A
    /// non-empty non-JSON body where JSON was expected is an error.
    pub fn into_json(self, status: u16) -> Result<Value> {
        match self {
            Self::Json(value) => Ok(value),
            Self::Raw(bytes) if bytes.is_empty() => Ok(Value::Null),
            Self::Raw(bytes) => Err(ApiError::new(
                ErrorKind::Generic,
                format!(
                    "expected a JSON response, got {} bytes of another content type",
                    bytes.len()
                ),
                status,
            )
            .into()),
        }
    }

    /// The body as text. JSON bodies are rendered back to their string form.
    pub fn into_text(self) -> String {
        match self {
            Self::Json(Value::String(s)) => s,
            Self::Json(value) => value.to_string(),
            Self::Raw(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        }
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Raw(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::error::Error;
    use serde_json::json;

    fn raw(status: u16, content_type: Option<&str>, body: &[u8]) -> RawResponse {
        RawResponse {
            status,
            content_type: content_type.map(str::to_string),
            body: body.to_vec(),
        }
    }

    #[test]
    fn test_json_success_is_parsed() {
        let body = raw(200, Some("application/json; charset=utf-8"), br#"{"status":"ok"}"#)
            .decode()
            .unwrap();
        assert_eq!(body, ResponseBody::Json(json!({"status": "ok"})));
    }

    #[test]
    fn test_text_success_is_returned_raw() {
        let body = raw(200, Some("text/plain"), b"# App Directory").decode().unwrap();
        assert_eq!(body.clone().into_text(), "# App Directory");
        assert!(body.as_json().is_none());
    }

    #[test]
    fn test_json_looking_text_is_not_parsed() {
        let body = raw(200, Some("text/markdown"), b"{}").decode().unwrap();
        assert_eq!(body, ResponseBody::Raw(b"{}".to_vec()));
    }

    #[test]
    fn test_broken_json_success_is_generic_error() {
        let err = raw(200, Some("application/json"), b"{not json").decode().unwrap_err();
        let api = err.as_api().unwrap();
        assert_eq!(api.kind(), ErrorKind::Generic);
        assert_eq!(api.status(), 200);
        assert_eq!(api.raw_body(), "{not json");
    }

    #[test]
    fn test_failure_is_classified() {
        let err = raw(404, Some("application/json"), br#"{"error":"NOT_FOUND"}"#)
            .decode()
            .unwrap_err();
        assert!(matches!(err, Error::Api(ref e) if e.is_not_found()));
    }

    #[test]
    fn test_into_json_handles_empty_and_text() {
        assert_eq!(ResponseBody::Raw(Vec::new()).into_json(204).unwrap(), Value::Null);
        let err = ResponseBody::Raw(b"hello".to_vec()).into_json(200).unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::Generic));
    }
}
