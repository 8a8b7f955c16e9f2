use async_trait::async_trait;

use crate::consultant::Consultant;

use super::Result;

/// Record store for consultants, keyed by email.
#[async_trait]
pub trait ConsultantRepository: Send + Sync {
    /// Gets a consultant by email. A missing item is `Ok(None)`.
    async fn get_consultant(&self, email: &str) -> Result<Option<Consultant>>;

    /// Lists every consultant in the table.
    ///
    /// Single unpaginated scan; only suitable for small tables.
    async fn list_consultants(&self) -> Result<Vec<Consultant>>;

    /// Inserts a consultant, failing with `AlreadyExists` if the email is taken.
    async fn create_consultant(&self, consultant: &Consultant) -> Result<()>;

    /// Replaces an existing consultant, failing with `NotFound` if absent.
    async fn update_consultant(&self, consultant: &Consultant) -> Result<()>;

    /// Deletes a consultant by email, failing with `NotFound` if absent.
    async fn delete_consultant(&self, email: &str) -> Result<()>;
}
