//! In-memory repository implementation.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use consultants_core::consultant::Consultant;
use consultants_core::storage::{ConsultantRepository, RepositoryError, Result};

/// In-memory storage backend for testing.
///
/// Keyed by email; listing returns consultants ordered by email.
/// Data is not persisted and will be lost when the repository is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    consultants: Arc<RwLock<BTreeMap<String, Consultant>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-populated with `consultants`.
    ///
    /// Later entries win when two share an email.
    pub fn with_consultants(consultants: impl IntoIterator<Item = Consultant>) -> Self {
        let map = consultants
            .into_iter()
            .map(|c| (c.email.clone(), c))
            .collect();

        Self {
            consultants: Arc::new(RwLock::new(map)),
        }
    }
}

#[async_trait]
impl ConsultantRepository for InMemoryRepository {
    async fn get_consultant(&self, email: &str) -> Result<Option<Consultant>> {
        let consultants = self.consultants.read().await;
        Ok(consultants.get(email).cloned())
    }

    async fn list_consultants(&self) -> Result<Vec<Consultant>> {
        let consultants = self.consultants.read().await;
        Ok(consultants.values().cloned().collect())
    }

    async fn create_consultant(&self, consultant: &Consultant) -> Result<()> {
        let mut consultants = self.consultants.write().await;
        if consultants.contains_key(&consultant.email) {
            return Err(RepositoryError::consultant_already_exists(
                consultant.email.clone(),
            ));
        }
        consultants.insert(consultant.email.clone(), consultant.clone());
        Ok(())
    }

    async fn update_consultant(&self, consultant: &Consultant) -> Result<()> {
        let mut consultants = self.consultants.write().await;
        match consultants.get_mut(&consultant.email) {
            Some(stored) => {
                *stored = consultant.clone();
                Ok(())
            }
            None => Err(RepositoryError::consultant_not_found(
                consultant.email.clone(),
            )),
        }
    }

    async fn delete_consultant(&self, email: &str) -> Result<()> {
        let mut consultants = self.consultants.write().await;
        if consultants.remove(email).is_none() {
            return Err(RepositoryError::consultant_not_found(email));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_and_get() {
        let repo = InMemoryRepository::new();
        let consultant = Consultant::new("ann@example.com").with_name("Ann", "Lee");

        repo.create_consultant(&consultant).await.unwrap();

        let retrieved = repo.get_consultant("ann@example.com").await.unwrap();
        assert_eq!(retrieved, Some(consultant));
    }

    #[tokio::test]
    async fn test_get_nonexistent() {
        let repo = InMemoryRepository::new();
        let result = repo.get_consultant("nobody@example.com").await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_create_duplicate_keeps_original() {
        let repo = InMemoryRepository::new();
        let original = Consultant::new("ann@example.com").with_name("Ann", "Lee");
        repo.create_consultant(&original).await.unwrap();

        let duplicate = Consultant::new("ann@example.com").with_name("Impostor", "X");
        let result = repo.create_consultant(&duplicate).await;

        assert!(matches!(result, Err(RepositoryError::AlreadyExists { .. })));
        let stored = repo.get_consultant("ann@example.com").await.unwrap();
        assert_eq!(stored, Some(original));
    }

    #[tokio::test]
    async fn test_update_replaces_whole_record() {
        let repo = InMemoryRepository::new();
        let original = Consultant::new("ann@example.com")
            .with_name("Ann", "Lee")
            .with_role("Backend Engineer");
        repo.create_consultant(&original).await.unwrap();

        let replacement = Consultant::new("ann@example.com").with_name("Ann", "Kim");
        repo.update_consultant(&replacement).await.unwrap();

        let stored = repo
            .get_consultant("ann@example.com")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.last_name, "Kim");
        assert_eq!(stored.role, "");
    }

    #[tokio::test]
    async fn test_update_nonexistent() {
        let repo = InMemoryRepository::new();
        let result = repo
            .update_consultant(&Consultant::new("ann@example.com"))
            .await;
        assert!(matches!(result, Err(RepositoryError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = InMemoryRepository::new();
        repo.create_consultant(&Consultant::new("ann@example.com"))
            .await
            .unwrap();

        repo.delete_consultant("ann@example.com").await.unwrap();

        let retrieved = repo.get_consultant("ann@example.com").await.unwrap();
        assert!(retrieved.is_none());
    }

    #[tokio::test]
    async fn test_delete_nonexistent() {
        let repo = InMemoryRepository::new();
        let result = repo.delete_consultant("nobody@example.com").await;
        assert!(matches!(result, Err(RepositoryError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_list_is_ordered_by_email() {
        let repo = InMemoryRepository::with_consultants([
            Consultant::new("carla@example.com"),
            Consultant::new("ann@example.com"),
            Consultant::new("bruno@example.com"),
        ]);

        let emails: Vec<String> = repo
            .list_consultants()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.email)
            .collect();

        assert_eq!(
            emails,
            vec![
                "ann@example.com",
                "bruno@example.com",
                "carla@example.com"
            ]
        );
    }

    #[tokio::test]
    async fn test_list_empty() {
        let repo = InMemoryRepository::new();
        assert!(repo.list_consultants().await.unwrap().is_empty());
    }
}
