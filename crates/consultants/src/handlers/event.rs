//! API Gateway proxy event types.
//!
//! The raw event is decoded into [`ApiGatewayRequest`] and then narrowed into
//! a [`ConsultantRequest`] before anything reaches the service.

use std::collections::HashMap;

use axum::{
    body::Body,
    http::{header, HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};
use serde_json::json;

use consultants_core::consultant::{consultant_error_to_status_code, ConsultantError};

/// Inbound API Gateway proxy event (REST API, payload format 1.0).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiGatewayRequest {
    pub http_method: String,
    pub query_string_parameters: Option<HashMap<String, String>>,
    pub body: Option<String>,
    pub is_base64_encoded: bool,
}

impl ApiGatewayRequest {
    pub fn new(http_method: impl Into<String>) -> Self {
        Self {
            http_method: http_method.into(),
            ..Self::default()
        }
    }

    /// Adds a query string parameter.
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_string_parameters
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Sets a plain-text body.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Returns a non-empty query parameter.
    fn query(&self, key: &str) -> Option<&str> {
        self.query_string_parameters
            .as_ref()
            .and_then(|params| params.get(key))
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    /// Returns the body as text, decoding base64 when flagged.
    fn decoded_body(&self) -> Result<String, ConsultantError> {
        let Some(body) = &self.body else {
            return Ok(String::new());
        };

        if !self.is_base64_encoded {
            return Ok(body.clone());
        }

        STANDARD
            .decode(body)
            .ok()
            .and_then(|bytes| String::from_utf8(bytes).ok())
            .ok_or(ConsultantError::DecodeFailure)
    }
}

/// A validated consultant operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsultantRequest {
    /// Fetch one consultant, or all of them when no email is given.
    Get { email: Option<String> },
    Create { body: String },
    Update { body: String },
    Delete { email: String },
}

impl TryFrom<&ApiGatewayRequest> for ConsultantRequest {
    type Error = ConsultantError;

    fn try_from(request: &ApiGatewayRequest) -> Result<Self, Self::Error> {
        let email = request.query("email").map(str::to_string);

        match request.http_method.to_ascii_uppercase().as_str() {
            "GET" => Ok(Self::Get { email }),
            "POST" => Ok(Self::Create {
                body: request.decoded_body()?,
            }),
            "PUT" => Ok(Self::Update {
                body: request.decoded_body()?,
            }),
            "DELETE" => email
                .map(|email| Self::Delete { email })
                .ok_or(ConsultantError::MissingEmail),
            _ => Err(ConsultantError::MethodNotAllowed),
        }
    }
}

/// Outbound API Gateway proxy response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiGatewayResponse {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
    pub is_base64_encoded: bool,
}

impl ApiGatewayResponse {
    fn new(status_code: u16, content_type: &str, body: String) -> Self {
        let mut headers = HashMap::new();
        headers.insert("Content-Type".to_string(), content_type.to_string());

        Self {
            status_code,
            headers,
            body,
            is_base64_encoded: false,
        }
    }

    /// A JSON response.
    pub fn json<T: Serialize>(status_code: u16, value: &T) -> Self {
        match serde_json::to_string(value) {
            Ok(body) => Self::new(status_code, "application/json", body),
            Err(error) => {
                tracing::error!(%error, "Failed to serialize response body");
                Self::error(ConsultantError::EncodeFailure)
            }
        }
    }

    /// A 200 response with no body.
    pub fn empty() -> Self {
        Self::new(200, "application/json", String::new())
    }

    /// The response for a failed request.
    ///
    /// `MethodNotAllowed` is plain text; everything else is `{"error": "..."}`.
    pub fn error(error: ConsultantError) -> Self {
        let status_code = consultant_error_to_status_code(&error);

        match error {
            ConsultantError::MethodNotAllowed => {
                Self::new(status_code, "text/plain", error.to_string())
            }
            _ => Self::new(
                status_code,
                "application/json",
                json!({ "error": error.to_string() }).to_string(),
            ),
        }
    }
}

impl IntoResponse for ApiGatewayResponse {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status_code)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let mut response = Response::new(Body::from(self.body));
        *response.status_mut() = status;

        let headers = response.headers_mut();
        for (name, value) in &self.headers {
            if let (Ok(name), Ok(value)) = (
                HeaderName::from_bytes(name.as_bytes()),
                HeaderValue::from_str(value),
            ) {
                headers.insert(name, value);
            }
        }
        headers
            .entry(header::CONTENT_TYPE)
            .or_insert(HeaderValue::from_static("application/json"));

        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_proxy_event() {
        let event = json!({
            "httpMethod": "GET",
            "path": "/consultants",
            "queryStringParameters": {"email": "a@b.com"},
            "body": null,
            "isBase64Encoded": false,
            "requestContext": {"stage": "prod"}
        });

        let request: ApiGatewayRequest = serde_json::from_value(event).unwrap();

        assert_eq!(request, ApiGatewayRequest::new("GET").with_query("email", "a@b.com"));
    }

    #[test]
    fn test_get_without_email_lists() {
        let request = ApiGatewayRequest::new("GET");
        assert_eq!(
            ConsultantRequest::try_from(&request),
            Ok(ConsultantRequest::Get { email: None })
        );
    }

    #[test]
    fn test_get_with_empty_email_lists() {
        let request = ApiGatewayRequest::new("GET").with_query("email", "");
        assert_eq!(
            ConsultantRequest::try_from(&request),
            Ok(ConsultantRequest::Get { email: None })
        );
    }

    #[test]
    fn test_method_is_case_insensitive() {
        let request = ApiGatewayRequest::new("post").with_body("{}");
        assert_eq!(
            ConsultantRequest::try_from(&request),
            Ok(ConsultantRequest::Create {
                body: "{}".to_string()
            })
        );
    }

    #[test]
    fn test_delete_requires_email() {
        let request = ApiGatewayRequest::new("DELETE");
        assert_eq!(
            ConsultantRequest::try_from(&request),
            Err(ConsultantError::MissingEmail)
        );
    }

    #[test]
    fn test_unknown_method() {
        let request = ApiGatewayRequest::new("PATCH");
        assert_eq!(
            ConsultantRequest::try_from(&request),
            Err(ConsultantError::MethodNotAllowed)
        );
    }

    #[test]
    fn test_base64_body_is_decoded() {
        let mut request = ApiGatewayRequest::new("PUT").with_body(STANDARD.encode("{\"a\":1}"));
        request.is_base64_encoded = true;

        assert_eq!(
            ConsultantRequest::try_from(&request),
            Ok(ConsultantRequest::Update {
                body: "{\"a\":1}".to_string()
            })
        );
    }

    #[test]
    fn test_invalid_base64_body() {
        let mut request = ApiGatewayRequest::new("POST").with_body("%%%");
        request.is_base64_encoded = true;

        assert_eq!(
            ConsultantRequest::try_from(&request),
            Err(ConsultantError::DecodeFailure)
        );
    }

    #[test]
    fn test_error_response_body() {
        let response = ApiGatewayResponse::error(ConsultantError::DoesNotExist);

        assert_eq!(response.status_code, 400);
        assert_eq!(response.body, r#"{"error":"consultant is not registered"}"#);
        assert_eq!(response.headers["Content-Type"], "application/json");
    }

    #[test]
    fn test_method_not_allowed_is_plain_text() {
        let response = ApiGatewayResponse::error(ConsultantError::MethodNotAllowed);

        assert_eq!(response.status_code, 405);
        assert_eq!(response.body, "method not allowed");
        assert_eq!(response.headers["Content-Type"], "text/plain");
    }

    #[test]
    fn test_response_serializes_in_proxy_format() {
        let value = serde_json::to_value(ApiGatewayResponse::empty()).unwrap();

        assert_eq!(value["statusCode"], 200);
        assert_eq!(value["body"], "");
        assert_eq!(value["isBase64Encoded"], false);
    }
}
