//! Pure functions for mapping consultant errors to HTTP status codes.
//!
//! Follows the Functional Core pattern: no side effects, no I/O.

use super::ConsultantError;

/// Maps a [`ConsultantError`] to an HTTP status code.
///
/// - `MethodNotAllowed` -> 405 (Method Not Allowed)
/// - every other variant -> 400 (Bad Request)
///
/// Store outages share 400 with client mistakes; API clients depend on that
/// contract.
///
/// # Examples
///
/// ```
/// use consultants_core::consultant::{consultant_error_to_status_code, ConsultantError};
///
/// assert_eq!(consultant_error_to_status_code(&ConsultantError::AlreadyExists), 400);
/// assert_eq!(consultant_error_to_status_code(&ConsultantError::MethodNotAllowed), 405);
/// ```
pub fn consultant_error_to_status_code(error: &ConsultantError) -> u16 {
    match error {
        ConsultantError::MethodNotAllowed => 405,
        ConsultantError::FetchFailure
        | ConsultantError::DecodeFailure
        | ConsultantError::EncodeFailure
        | ConsultantError::InvalidEmail
        | ConsultantError::MissingEmail
        | ConsultantError::AlreadyExists
        | ConsultantError::DoesNotExist
        | ConsultantError::StoreFailure
        | ConsultantError::DeleteFailure => 400,
    }
}
