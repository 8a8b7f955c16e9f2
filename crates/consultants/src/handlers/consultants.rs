//! Consultant request dispatch.
//!
//! Shared by the Lambda entry point and the local axum server: both hand over
//! an [`ApiGatewayRequest`] and get an [`ApiGatewayResponse`] back.

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::Method,
};
use std::collections::HashMap;

use consultants_core::consultant::ConsultantError;

use super::event::{ApiGatewayRequest, ApiGatewayResponse, ConsultantRequest};
use crate::service::ConsultantService;
use crate::state::AppState;

/// Routes one request to the service and renders the outcome.
///
/// | request                | success                   |
/// |------------------------|---------------------------|
/// | `GET ?email=`          | 200, one consultant       |
/// | `GET`                  | 200, array of consultants |
/// | `POST` with body       | 201, created consultant   |
/// | `PUT` with body        | 200, updated consultant   |
/// | `DELETE ?email=`       | 200, empty body           |
pub async fn handle_request(
    service: &ConsultantService,
    request: &ApiGatewayRequest,
) -> ApiGatewayResponse {
    tracing::debug!(method = %request.http_method, "Handling consultant request");

    match dispatch(service, request).await {
        Ok(response) => response,
        Err(error) => {
            tracing::debug!(method = %request.http_method, %error, "Consultant request failed");
            ApiGatewayResponse::error(error)
        }
    }
}

async fn dispatch(
    service: &ConsultantService,
    request: &ApiGatewayRequest,
) -> Result<ApiGatewayResponse, ConsultantError> {
    let response = match ConsultantRequest::try_from(request)? {
        ConsultantRequest::Get { email: Some(email) } => {
            ApiGatewayResponse::json(200, &service.fetch_one(&email).await?)
        }
        ConsultantRequest::Get { email: None } => {
            ApiGatewayResponse::json(200, &service.fetch_all().await?)
        }
        ConsultantRequest::Create { body } => {
            ApiGatewayResponse::json(201, &service.create(&body).await?)
        }
        ConsultantRequest::Update { body } => {
            ApiGatewayResponse::json(200, &service.update(&body).await?)
        }
        ConsultantRequest::Delete { email } => {
            service.delete(&email).await?;
            ApiGatewayResponse::empty()
        }
    };

    Ok(response)
}

/// ANY /consultants - local stand-in for the API Gateway proxy integration.
pub async fn consultants(
    State(state): State<AppState>,
    method: Method,
    Query(query): Query<HashMap<String, String>>,
    body: Bytes,
) -> ApiGatewayResponse {
    let body = match String::from_utf8(body.to_vec()) {
        Ok(body) => body,
        Err(error) => {
            tracing::debug!(%method, %error, "Rejected non UTF-8 body");
            return ApiGatewayResponse::error(ConsultantError::DecodeFailure);
        }
    };

    let request = ApiGatewayRequest {
        http_method: method.to_string(),
        query_string_parameters: (!query.is_empty()).then_some(query),
        body: (!body.is_empty()).then_some(body),
        is_base64_encoded: false,
    };

    handle_request(&state.service, &request).await
}

#[cfg(all(test, feature = "inmemory"))]
mod tests {
    use std::sync::Arc;

    use serde_json::{json, Value};

    use super::*;
    use crate::storage::InMemoryRepository;
    use consultants_core::consultant::Consultant;

    fn service_with(consultants: Vec<Consultant>) -> ConsultantService {
        ConsultantService::new(Arc::new(InMemoryRepository::with_consultants(consultants)))
    }

    fn body_json(response: &ApiGatewayResponse) -> Value {
        serde_json::from_str(&response.body).unwrap()
    }

    #[tokio::test]
    async fn test_get_one() {
        let service = service_with(vec![Consultant::new("a@b.com").with_name("Ann", "Lee")]);
        let request = ApiGatewayRequest::new("GET").with_query("email", "a@b.com");

        let response = handle_request(&service, &request).await;

        assert_eq!(response.status_code, 200);
        let body = body_json(&response);
        assert_eq!(body["email"], "a@b.com");
        assert_eq!(body["firstName"], "Ann");
    }

    #[tokio::test]
    async fn test_get_unknown_email_returns_empty_record() {
        let service = service_with(vec![]);
        let request = ApiGatewayRequest::new("GET").with_query("email", "nobody@x.com");

        let response = handle_request(&service, &request).await;

        assert_eq!(response.status_code, 200);
        let body = body_json(&response);
        assert_eq!(body["email"], "");
        assert_eq!(body["id"], "00000000-0000-0000-0000-000000000000");
    }

    #[tokio::test]
    async fn test_get_all() {
        let service = service_with(vec![
            Consultant::new("b@b.com"),
            Consultant::new("a@b.com"),
        ]);

        let response = handle_request(&service, &ApiGatewayRequest::new("GET")).await;

        assert_eq!(response.status_code, 200);
        let body = body_json(&response);
        let emails: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["email"].as_str().unwrap())
            .collect();
        assert_eq!(emails, vec!["a@b.com", "b@b.com"]);
    }

    #[tokio::test]
    async fn test_get_all_empty_is_array() {
        let service = service_with(vec![]);

        let response = handle_request(&service, &ApiGatewayRequest::new("GET")).await;

        assert_eq!(response.status_code, 200);
        assert_eq!(response.body, "[]");
    }

    #[tokio::test]
    async fn test_create_then_duplicate() {
        let service = service_with(vec![]);
        let request = ApiGatewayRequest::new("POST")
            .with_body(json!({"email": "a@b.com", "firstName": "Ann"}).to_string());

        let created = handle_request(&service, &request).await;
        assert_eq!(created.status_code, 201);
        let body = body_json(&created);
        assert_eq!(body["email"], "a@b.com");
        assert_ne!(body["id"], "00000000-0000-0000-0000-000000000000");

        let duplicate = handle_request(&service, &request).await;
        assert_eq!(duplicate.status_code, 400);
        assert_eq!(
            body_json(&duplicate),
            json!({"error": "consultant is already registered"})
        );
    }

    #[tokio::test]
    async fn test_create_invalid_email() {
        let service = service_with(vec![]);
        let request =
            ApiGatewayRequest::new("POST").with_body(json!({"email": "not-an-email"}).to_string());

        let response = handle_request(&service, &request).await;

        assert_eq!(response.status_code, 400);
        assert_eq!(body_json(&response), json!({"error": "invalid email"}));
    }

    #[tokio::test]
    async fn test_create_malformed_body() {
        let service = service_with(vec![]);
        let request = ApiGatewayRequest::new("POST").with_body("{not json");

        let response = handle_request(&service, &request).await;

        assert_eq!(response.status_code, 400);
        assert_eq!(
            body_json(&response),
            json!({"error": "failed to unmarshall the object"})
        );
    }

    #[tokio::test]
    async fn test_update_existing() {
        let existing = Consultant::new("a@b.com").with_role("Engineer");
        let id = existing.id;
        let service = service_with(vec![existing]);
        let request = ApiGatewayRequest::new("PUT")
            .with_body(json!({"email": "a@b.com", "role": "Architect"}).to_string());

        let response = handle_request(&service, &request).await;

        assert_eq!(response.status_code, 200);
        let body = body_json(&response);
        assert_eq!(body["role"], "Architect");
        assert_eq!(body["id"], id.to_string());
    }

    #[tokio::test]
    async fn test_update_missing() {
        let service = service_with(vec![]);
        let request =
            ApiGatewayRequest::new("PUT").with_body(json!({"email": "a@b.com"}).to_string());

        let response = handle_request(&service, &request).await;

        assert_eq!(response.status_code, 400);
        assert_eq!(
            body_json(&response),
            json!({"error": "consultant is not registered"})
        );
    }

    #[tokio::test]
    async fn test_delete_existing() {
        let service = service_with(vec![Consultant::new("a@b.com")]);
        let request = ApiGatewayRequest::new("DELETE").with_query("email", "a@b.com");

        let response = handle_request(&service, &request).await;

        assert_eq!(response.status_code, 200);
        assert!(response.body.is_empty());

        let after = handle_request(&service, &ApiGatewayRequest::new("GET")).await;
        assert_eq!(after.body, "[]");
    }

    #[tokio::test]
    async fn test_delete_missing() {
        let service = service_with(vec![]);
        let request = ApiGatewayRequest::new("DELETE").with_query("email", "missing@x.com");

        let response = handle_request(&service, &request).await;

        assert_eq!(response.status_code, 400);
        assert_eq!(
            body_json(&response),
            json!({"error": "consultant is not registered"})
        );
    }

    #[tokio::test]
    async fn test_delete_without_email() {
        let service = service_with(vec![]);

        let response = handle_request(&service, &ApiGatewayRequest::new("DELETE")).await;

        assert_eq!(response.status_code, 400);
        assert_eq!(
            body_json(&response),
            json!({"error": "email query parameter is required"})
        );
    }

    #[tokio::test]
    async fn test_unsupported_method() {
        let service = service_with(vec![]);

        let response = handle_request(&service, &ApiGatewayRequest::new("PATCH")).await;

        assert_eq!(response.status_code, 405);
        assert_eq!(response.body, "method not allowed");
    }
}
