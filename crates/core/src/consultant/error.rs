use thiserror::Error;

/// Errors surfaced by the consultant service.
///
/// The display string is the message returned to API clients; underlying
/// causes are logged where the error is created and never exposed.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConsultantError {
    #[error("failed to fetch")]
    FetchFailure,
    #[error("failed to unmarshall the object")]
    DecodeFailure,
    #[error("failed to marshall the object")]
    EncodeFailure,
    #[error("invalid email")]
    InvalidEmail,
    #[error("email query parameter is required")]
    MissingEmail,
    #[error("consultant is already registered")]
    AlreadyExists,
    #[error("consultant is not registered")]
    DoesNotExist,
    #[error("could not save the object in dynamo")]
    StoreFailure,
    #[error("the consultant wasn't deleted")]
    DeleteFailure,
    #[error("method not allowed")]
    MethodNotAllowed,
}
