use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A consultant profile, keyed by email within the table.
///
/// Every field defaults when absent so partial JSON bodies decode; the
/// service decides which fields it overwrites (id, lastModified, durations).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Consultant {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    /// When the consultant started.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since: Option<DateTime<Utc>>,
    pub skills: Vec<Skill>,
    pub past_projects: Vec<PastProject>,
    pub certifications: Vec<Certificate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DateTime<Utc>>,
    pub location: String,
    pub links: Vec<Link>,
    pub desired_skills: Vec<DesiredSkill>,
    pub profile_pic: String,
    pub contact_info: Vec<Contact>,
    pub email: String,
    #[serde(rename = "preferWFH")]
    pub prefer_wfh: bool,
    pub current_employee: bool,
    pub current_status: String,
}

impl Consultant {
    /// Creates a consultant with only the email set.
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            ..Self::default()
        }
    }

    /// Returns true for the placeholder record a lookup of a missing email yields.
    pub fn is_empty(&self) -> bool {
        self.email.is_empty()
    }

    /// Sets the first and last name.
    pub fn with_name(mut self, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self.last_name = last_name.into();
        self
    }

    /// Sets the role.
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    /// Sets the location.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Sets a specific ID (useful for testing).
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    /// Appends a skill.
    pub fn with_skill(mut self, skill: Skill) -> Self {
        self.skills.push(skill);
        self
    }

    /// Appends a past project.
    pub fn with_past_project(mut self, project: PastProject) -> Self {
        self.past_projects.push(project);
        self
    }

    /// Recomputes derived durations on every past project.
    pub fn derive_durations(&mut self) {
        for project in &mut self.past_projects {
            project.derive_duration();
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Skill {
    pub skill: String,
    pub level: i64,
    pub commercial_exp: bool,
}

impl Skill {
    pub fn new(skill: impl Into<String>, level: i64, commercial_exp: bool) -> Self {
        Self {
            skill: skill.into(),
            level,
            commercial_exp,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PastProject {
    pub project_name: String,
    pub role: String,
    pub client: String,
    pub sector: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion_date: Option<DateTime<Utc>>,
    /// Length of the engagement in nanoseconds.
    pub duration: i64,
}

impl PastProject {
    /// Sets `duration` from the start and completion dates when both are known.
    ///
    /// A completion date before the start date yields a zero duration.
    pub fn derive_duration(&mut self) {
        if let (Some(start), Some(end)) = (self.start_date, self.completion_date) {
            self.duration = if end <= start {
                0
            } else {
                // Spans past ~292 years overflow i64 nanoseconds.
                (end - start).num_nanoseconds().unwrap_or(i64::MAX)
            };
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Certificate {
    pub certificate_name: String,
    pub provider: String,
    pub link: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_achieved: Option<DateTime<Utc>>,
    /// Validity or course length in nanoseconds.
    pub duration: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Link {
    pub link_name: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesiredSkill {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub email: String,
    pub slack: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_partial_body_decodes_with_defaults() {
        let consultant: Consultant =
            serde_json::from_str(r#"{"email":"a@b.com","firstName":"Ann"}"#).unwrap();

        assert_eq!(consultant.email, "a@b.com");
        assert_eq!(consultant.first_name, "Ann");
        assert!(consultant.skills.is_empty());
        assert!(consultant.since.is_none());
        assert_eq!(consultant.id, Uuid::nil());
    }

    #[test]
    fn test_field_names_are_camel_case() {
        let mut consultant = Consultant::new("a@b.com").with_name("Ann", "Lee");
        consultant.prefer_wfh = true;
        consultant.current_employee = true;

        let json = serde_json::to_value(&consultant).unwrap();

        assert_eq!(json["firstName"], "Ann");
        assert_eq!(json["lastName"], "Lee");
        assert_eq!(json["preferWFH"], true);
        assert_eq!(json["currentEmployee"], true);
        assert!(json.get("since").is_none());
        assert!(json.get("lastModified").is_none());
    }

    #[test]
    fn test_empty_consultant() {
        assert!(Consultant::default().is_empty());
        assert!(!Consultant::new("a@b.com").is_empty());
    }

    #[test]
    fn test_derive_duration_from_dates() {
        let mut project = PastProject {
            start_date: Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()),
            completion_date: Some(Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap()),
            ..PastProject::default()
        };

        project.derive_duration();

        assert_eq!(project.duration, 86_400 * 1_000_000_000);
    }

    #[test]
    fn test_derive_duration_keeps_value_without_dates() {
        let mut project = PastProject {
            duration: 42,
            ..PastProject::default()
        };

        project.derive_duration();

        assert_eq!(project.duration, 42);
    }

    #[test]
    fn test_derive_duration_clamps_reversed_dates() {
        let mut project = PastProject {
            start_date: Some(Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap()),
            completion_date: Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()),
            duration: 7,
            ..PastProject::default()
        };

        project.derive_duration();

        assert_eq!(project.duration, 0);
    }

    #[test]
    fn test_derive_duration_clamps_reversed_dates_beyond_nanosecond_range() {
        let mut project = PastProject {
            start_date: Some(Utc.with_ymd_and_hms(2400, 1, 1, 0, 0, 0).unwrap()),
            completion_date: Some(Utc.with_ymd_and_hms(1900, 1, 1, 0, 0, 0).unwrap()),
            ..PastProject::default()
        };

        project.derive_duration();

        assert_eq!(project.duration, 0);
    }

    #[test]
    fn test_derive_duration_saturates_long_spans() {
        let mut project = PastProject {
            start_date: Some(Utc.with_ymd_and_hms(1900, 1, 1, 0, 0, 0).unwrap()),
            completion_date: Some(Utc.with_ymd_and_hms(2400, 1, 1, 0, 0, 0).unwrap()),
            ..PastProject::default()
        };

        project.derive_duration();

        assert_eq!(project.duration, i64::MAX);
    }

    #[test]
    fn test_consultant_derives_all_project_durations() {
        let start = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        let project = PastProject {
            start_date: Some(start),
            completion_date: Some(start + chrono::Duration::hours(1)),
            ..PastProject::default()
        };
        let mut consultant = Consultant::new("a@b.com")
            .with_past_project(project.clone())
            .with_past_project(project);

        consultant.derive_durations();

        assert!(consultant
            .past_projects
            .iter()
            .all(|p| p.duration == 3_600 * 1_000_000_000));
    }
}
