//! Seed command implementation.

use chrono::Utc;
use consultants::storage::DynamoDbRepository;
use consultants_core::consultant::{generate_seed_consultants, Consultant};
use consultants_core::storage::{ConsultantRepository, RepositoryError};

use super::error::Result;

/// Seed consultants, stamped as modified now.
pub fn seed_consultants(count: u32) -> Vec<Consultant> {
    let now = Utc::now();
    generate_seed_consultants(count)
        .into_iter()
        .map(|mut consultant| {
            consultant.last_modified = Some(now);
            consultant
        })
        .collect()
}

/// One-line preview of a consultant.
pub fn format_consultant(consultant: &Consultant) -> String {
    format!(
        "{} - {} {} ({})",
        consultant.email, consultant.first_name, consultant.last_name, consultant.role
    )
}

/// Outcome of a seed run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub inserted: usize,
    pub skipped: usize,
}

/// Insert consultants one by one. Emails already present are skipped.
pub async fn insert_consultants(
    repository: &DynamoDbRepository,
    consultants: &[Consultant],
) -> Result<SeedReport> {
    let mut report = SeedReport::default();

    for consultant in consultants {
        match repository.create_consultant(consultant).await {
            Ok(()) => report.inserted += 1,
            Err(RepositoryError::AlreadyExists { .. }) => report.skipped += 1,
            Err(err) => return Err(err.into()),
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_consultants_are_stamped() {
        let consultants = seed_consultants(3);

        assert_eq!(consultants.len(), 3);
        assert!(consultants.iter().all(|c| c.last_modified.is_some()));
    }

    #[test]
    fn test_format_consultant() {
        let consultant = Consultant::new("ann@example.com")
            .with_name("Ann", "Lee")
            .with_role("Cloud Architect");

        assert_eq!(
            format_consultant(&consultant),
            "ann@example.com - Ann Lee (Cloud Architect)"
        );
    }
}
