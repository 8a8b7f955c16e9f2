use thiserror::Error;

/// Entity name used in repository error messages.
pub const CONSULTANT_ENTITY: &str = "Consultant";

/// Errors that can occur during repository operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
    #[error("{entity_type} already exists: {id}")]
    AlreadyExists {
        entity_type: &'static str,
        id: String,
    },
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl RepositoryError {
    /// `NotFound` for the consultant keyed by `email`.
    pub fn consultant_not_found(email: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: CONSULTANT_ENTITY,
            id: email.into(),
        }
    }

    /// `AlreadyExists` for the consultant keyed by `email`.
    pub fn consultant_already_exists(email: impl Into<String>) -> Self {
        Self::AlreadyExists {
            entity_type: CONSULTANT_ENTITY,
            id: email.into(),
        }
    }

    /// True when the stored item could not be turned into a domain value.
    pub fn is_decode_error(&self) -> bool {
        matches!(self, Self::InvalidData(_) | Self::Serialization(_))
    }
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_error_not_found_display() {
        let error = RepositoryError::NotFound {
            entity_type: "Consultant",
            id: "ann@example.com".to_string(),
        };
        assert_eq!(error.to_string(), "Consultant not found: ann@example.com");
    }

    #[test]
    fn test_repository_error_already_exists_display() {
        let error = RepositoryError::AlreadyExists {
            entity_type: "Consultant",
            id: "ann@example.com".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Consultant already exists: ann@example.com"
        );
    }

    #[test]
    fn test_consultant_constructors() {
        assert_eq!(
            RepositoryError::consultant_not_found("ann@example.com"),
            RepositoryError::NotFound {
                entity_type: CONSULTANT_ENTITY,
                id: "ann@example.com".to_string(),
            }
        );
        assert_eq!(
            RepositoryError::consultant_already_exists("ann@example.com").to_string(),
            "Consultant already exists: ann@example.com"
        );
    }

    #[test]
    fn test_is_decode_error() {
        assert!(RepositoryError::InvalidData("bad".to_string()).is_decode_error());
        assert!(RepositoryError::Serialization("bad".to_string()).is_decode_error());
        assert!(!RepositoryError::QueryFailed("bad".to_string()).is_decode_error());
        assert!(!RepositoryError::consultant_not_found("a@b.com").is_decode_error());
    }

    #[test]
    fn test_repository_error_connection_failed_display() {
        let error = RepositoryError::ConnectionFailed("timeout after 30s".to_string());
        assert_eq!(error.to_string(), "Connection failed: timeout after 30s");
    }

    #[test]
    fn test_repository_error_query_failed_display() {
        let error = RepositoryError::QueryFailed("table not found".to_string());
        assert_eq!(error.to_string(), "Query failed: table not found");
    }

    #[test]
    fn test_repository_error_serialization_display() {
        let error = RepositoryError::Serialization("missing required field".to_string());
        assert_eq!(
            error.to_string(),
            "Serialization error: missing required field"
        );
    }

    #[test]
    fn test_repository_error_invalid_data_display() {
        let error = RepositoryError::InvalidData("Missing or invalid field: email".to_string());
        assert_eq!(error.to_string(), "Invalid data: Missing or invalid field: email");
    }
}
