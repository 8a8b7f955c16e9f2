pub mod consultants;
pub mod event;
pub mod health;

pub use consultants::handle_request;
pub use event::{ApiGatewayRequest, ApiGatewayResponse, ConsultantRequest};
