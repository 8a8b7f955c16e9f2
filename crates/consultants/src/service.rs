//! Consultant business logic.
//!
//! Sits between the request handlers and a [`ConsultantRepository`]. Every
//! operation is a single request/response; the service keeps no state of its
//! own beyond the shared repository handle.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use consultants_core::consultant::{is_email_valid, Consultant, ConsultantError};
use consultants_core::storage::{ConsultantRepository, RepositoryError};

type Result<T> = std::result::Result<T, ConsultantError>;

/// Cheap to clone; clones share the same repository.
#[derive(Clone)]
pub struct ConsultantService {
    repository: Arc<dyn ConsultantRepository>,
}

impl ConsultantService {
    pub fn new(repository: Arc<dyn ConsultantRepository>) -> Self {
        Self { repository }
    }

    /// Fetches one consultant by email.
    ///
    /// A missing email yields the empty consultant, not an error.
    pub async fn fetch_one(&self, email: &str) -> Result<Consultant> {
        if email.is_empty() {
            return Ok(Consultant::default());
        }

        match self.repository.get_consultant(email).await {
            Ok(found) => Ok(found.unwrap_or_default()),
            Err(error) if error.is_decode_error() => {
                tracing::error!(%email, %error, "Stored consultant could not be decoded");
                Err(ConsultantError::DecodeFailure)
            }
            Err(error) => {
                tracing::error!(%email, %error, "Failed to fetch consultant");
                Err(ConsultantError::FetchFailure)
            }
        }
    }

    /// Lists every consultant.
    pub async fn fetch_all(&self) -> Result<Vec<Consultant>> {
        self.repository.list_consultants().await.map_err(|error| {
            tracing::error!(%error, "Failed to list consultants");
            ConsultantError::FetchFailure
        })
    }

    /// Creates a consultant from a JSON body.
    ///
    /// The id is always freshly assigned. Uniqueness of the email is enforced
    /// by a conditional insert, so two concurrent creates cannot both win.
    pub async fn create(&self, body: &str) -> Result<Consultant> {
        let mut consultant = decode(body)?;

        if !is_email_valid(&consultant.email) {
            return Err(ConsultantError::InvalidEmail);
        }

        consultant.id = Uuid::new_v4();
        consultant.last_modified = Some(Utc::now());
        consultant.derive_durations();

        match self.repository.create_consultant(&consultant).await {
            Ok(()) => {
                tracing::info!(email = %consultant.email, id = %consultant.id, "Created consultant");
                Ok(consultant)
            }
            Err(RepositoryError::AlreadyExists { .. }) => Err(ConsultantError::AlreadyExists),
            Err(error) => {
                tracing::error!(email = %consultant.email, %error, "Failed to create consultant");
                Err(ConsultantError::StoreFailure)
            }
        }
    }

    /// Replaces an existing consultant with a JSON body.
    ///
    /// The stored id is kept; everything else comes from the body.
    pub async fn update(&self, body: &str) -> Result<Consultant> {
        let mut consultant = decode(body)?;

        if consultant.email.is_empty() {
            return Err(ConsultantError::DoesNotExist);
        }

        let existing = self
            .repository
            .get_consultant(&consultant.email)
            .await
            .map_err(|error| {
                tracing::error!(email = %consultant.email, %error, "Failed to fetch consultant for update");
                ConsultantError::FetchFailure
            })?
            .ok_or(ConsultantError::DoesNotExist)?;

        consultant.id = existing.id;
        consultant.last_modified = Some(Utc::now());
        consultant.derive_durations();

        match self.repository.update_consultant(&consultant).await {
            Ok(()) => {
                tracing::info!(email = %consultant.email, "Updated consultant");
                Ok(consultant)
            }
            // Deleted between the fetch and the write.
            Err(RepositoryError::NotFound { .. }) => Err(ConsultantError::DoesNotExist),
            Err(error) => {
                tracing::error!(email = %consultant.email, %error, "Failed to update consultant");
                Err(ConsultantError::StoreFailure)
            }
        }
    }

    /// Deletes a consultant by email.
    pub async fn delete(&self, email: &str) -> Result<()> {
        match self.repository.delete_consultant(email).await {
            Ok(()) => {
                tracing::info!(%email, "Deleted consultant");
                Ok(())
            }
            Err(RepositoryError::NotFound { .. }) => Err(ConsultantError::DoesNotExist),
            Err(error) => {
                tracing::error!(%email, %error, "Failed to delete consultant");
                Err(ConsultantError::DeleteFailure)
            }
        }
    }
}

fn decode(body: &str) -> Result<Consultant> {
    serde_json::from_str(body).map_err(|error| {
        tracing::debug!(%error, "Rejected consultant body");
        ConsultantError::DecodeFailure
    })
}
