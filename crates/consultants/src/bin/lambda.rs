use std::sync::Arc;

use lambda_runtime::{service_fn, Error, LambdaEvent};

use consultants::{
    config::Config,
    handlers::{handle_request, ApiGatewayRequest, ApiGatewayResponse},
    service::ConsultantService,
    storage::DynamoDbRepository,
};
use consultants_core::consultant::ConsultantError;

async fn handle_event(
    service: &ConsultantService,
    event: LambdaEvent<serde_json::Value>,
) -> Result<ApiGatewayResponse, Error> {
    let request: ApiGatewayRequest = match serde_json::from_value(event.payload) {
        Ok(request) => request,
        Err(error) => {
            tracing::warn!(%error, request_id = %event.context.request_id, "Rejected malformed event");
            return Ok(ApiGatewayResponse::error(ConsultantError::DecodeFailure));
        }
    };

    Ok(handle_request(service, &request).await)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "consultants=info".into()),
        )
        .with_current_span(false)
        .without_time()
        .init();

    let config = Config::from_env();
    let repository = DynamoDbRepository::from_config(&config).await;
    tracing::info!(table = %repository.table_name(), "Lambda initialized");

    let service = ConsultantService::new(Arc::new(repository));
    let service = &service;

    lambda_runtime::run(service_fn(move |event| async move {
        handle_event(service, event).await
    }))
    .await
}
