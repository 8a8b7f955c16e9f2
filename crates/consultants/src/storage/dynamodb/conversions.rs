//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and domain types.
//! These are testable in isolation without DynamoDB access.
//!
//! Items are flat maps keyed by the JSON field names. Only `email` is required
//! when reading; every other attribute falls back to its default so items
//! written by older producers still decode.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use chrono::{DateTime, Utc};
use consultants_core::consultant::{
    Certificate, Consultant, Contact, DesiredSkill, Link, PastProject, Skill,
};
use consultants_core::storage::RepositoryError;
use uuid::Uuid;

type Item = HashMap<String, AttributeValue>;

/// Partition key attribute of the consultants table.
pub const PARTITION_KEY: &str = "email";

// ============================================================================
// Consultant conversions
// ============================================================================

/// Convert a Consultant to DynamoDB item.
pub fn consultant_to_item(consultant: &Consultant) -> Item {
    let mut item = HashMap::new();

    // Key
    put_string(&mut item, PARTITION_KEY, &consultant.email);

    // Data
    put_string(&mut item, "id", &consultant.id.to_string());
    put_string(&mut item, "firstName", &consultant.first_name);
    put_string(&mut item, "lastName", &consultant.last_name);
    put_string(&mut item, "role", &consultant.role);
    put_optional_datetime(&mut item, "since", consultant.since);
    put_optional_datetime(&mut item, "lastModified", consultant.last_modified);
    put_string(&mut item, "location", &consultant.location);
    put_string(&mut item, "profilePic", &consultant.profile_pic);
    put_bool(&mut item, "preferWFH", consultant.prefer_wfh);
    put_bool(&mut item, "currentEmployee", consultant.current_employee);
    put_string(&mut item, "currentStatus", &consultant.current_status);

    // Nested lists
    put_list(&mut item, "skills", &consultant.skills, skill_to_map);
    put_list(
        &mut item,
        "pastProjects",
        &consultant.past_projects,
        past_project_to_map,
    );
    put_list(
        &mut item,
        "certifications",
        &consultant.certifications,
        certificate_to_map,
    );
    put_list(&mut item, "links", &consultant.links, link_to_map);
    put_list(
        &mut item,
        "desiredSkills",
        &consultant.desired_skills,
        desired_skill_to_map,
    );
    put_list(&mut item, "contactInfo", &consultant.contact_info, contact_to_map);

    item
}

/// Convert a DynamoDB item to Consultant.
pub fn item_to_consultant(item: &Item) -> Result<Consultant, RepositoryError> {
    Ok(Consultant {
        id: get_optional_uuid(item, "id")?.unwrap_or_default(),
        first_name: get_string_or_default(item, "firstName"),
        last_name: get_string_or_default(item, "lastName"),
        role: get_string_or_default(item, "role"),
        since: get_optional_datetime(item, "since")?,
        skills: get_list(item, "skills", map_to_skill)?,
        past_projects: get_list(item, "pastProjects", map_to_past_project)?,
        certifications: get_list(item, "certifications", map_to_certificate)?,
        last_modified: get_optional_datetime(item, "lastModified")?,
        location: get_string_or_default(item, "location"),
        links: get_list(item, "links", map_to_link)?,
        desired_skills: get_list(item, "desiredSkills", map_to_desired_skill)?,
        profile_pic: get_string_or_default(item, "profilePic"),
        contact_info: get_list(item, "contactInfo", map_to_contact)?,
        email: get_string(item, PARTITION_KEY)?,
        prefer_wfh: get_bool_or_default(item, "preferWFH"),
        current_employee: get_bool_or_default(item, "currentEmployee"),
        current_status: get_string_or_default(item, "currentStatus"),
    })
}

// ============================================================================
// Sub-entity conversions
// ============================================================================

fn skill_to_map(skill: &Skill) -> Item {
    let mut map = HashMap::new();
    put_string(&mut map, "skill", &skill.skill);
    put_number(&mut map, "level", skill.level);
    put_bool(&mut map, "commercialExp", skill.commercial_exp);
    map
}

fn map_to_skill(map: &Item) -> Result<Skill, RepositoryError> {
    Ok(Skill {
        skill: get_string_or_default(map, "skill"),
        level: get_number_or_default(map, "level")?,
        commercial_exp: get_bool_or_default(map, "commercialExp"),
    })
}

fn past_project_to_map(project: &PastProject) -> Item {
    let mut map = HashMap::new();
    put_string(&mut map, "projectName", &project.project_name);
    put_string(&mut map, "role", &project.role);
    put_string(&mut map, "client", &project.client);
    put_string(&mut map, "sector", &project.sector);
    put_string(&mut map, "description", &project.description);
    put_optional_datetime(&mut map, "startDate", project.start_date);
    put_optional_datetime(&mut map, "completionDate", project.completion_date);
    put_number(&mut map, "duration", project.duration);
    map
}

fn map_to_past_project(map: &Item) -> Result<PastProject, RepositoryError> {
    Ok(PastProject {
        project_name: get_string_or_default(map, "projectName"),
        role: get_string_or_default(map, "role"),
        client: get_string_or_default(map, "client"),
        sector: get_string_or_default(map, "sector"),
        description: get_string_or_default(map, "description"),
        start_date: get_optional_datetime(map, "startDate")?,
        completion_date: get_optional_datetime(map, "completionDate")?,
        duration: get_number_or_default(map, "duration")?,
    })
}

fn certificate_to_map(certificate: &Certificate) -> Item {
    let mut map = HashMap::new();
    put_string(&mut map, "certificateName", &certificate.certificate_name);
    put_string(&mut map, "provider", &certificate.provider);
    put_string(&mut map, "link", &certificate.link);
    put_optional_datetime(&mut map, "dateAchieved", certificate.date_achieved);
    put_number(&mut map, "duration", certificate.duration);
    map
}

fn map_to_certificate(map: &Item) -> Result<Certificate, RepositoryError> {
    Ok(Certificate {
        certificate_name: get_string_or_default(map, "certificateName"),
        provider: get_string_or_default(map, "provider"),
        link: get_string_or_default(map, "link"),
        date_achieved: get_optional_datetime(map, "dateAchieved")?,
        duration: get_number_or_default(map, "duration")?,
    })
}

fn link_to_map(link: &Link) -> Item {
    let mut map = HashMap::new();
    put_string(&mut map, "linkName", &link.link_name);
    put_string(&mut map, "url", &link.url);
    map
}

fn map_to_link(map: &Item) -> Result<Link, RepositoryError> {
    Ok(Link {
        link_name: get_string_or_default(map, "linkName"),
        url: get_string_or_default(map, "url"),
    })
}

fn desired_skill_to_map(skill: &DesiredSkill) -> Item {
    let mut map = HashMap::new();
    put_string(&mut map, "name", &skill.name);
    put_string(&mut map, "description", &skill.description);
    map
}

fn map_to_desired_skill(map: &Item) -> Result<DesiredSkill, RepositoryError> {
    Ok(DesiredSkill {
        name: get_string_or_default(map, "name"),
        description: get_string_or_default(map, "description"),
    })
}

fn contact_to_map(contact: &Contact) -> Item {
    let mut map = HashMap::new();
    put_string(&mut map, "email", &contact.email);
    put_string(&mut map, "slack", &contact.slack);
    map
}

fn map_to_contact(map: &Item) -> Result<Contact, RepositoryError> {
    Ok(Contact {
        email: get_string_or_default(map, "email"),
        slack: get_string_or_default(map, "slack"),
    })
}

// ============================================================================
// Writers
// ============================================================================

fn put_string(item: &mut Item, key: &str, value: &str) {
    item.insert(key.to_string(), AttributeValue::S(value.to_string()));
}

fn put_bool(item: &mut Item, key: &str, value: bool) {
    item.insert(key.to_string(), AttributeValue::Bool(value));
}

fn put_number(item: &mut Item, key: &str, value: i64) {
    item.insert(key.to_string(), AttributeValue::N(value.to_string()));
}

fn put_optional_datetime(item: &mut Item, key: &str, value: Option<DateTime<Utc>>) {
    if let Some(dt) = value {
        item.insert(key.to_string(), AttributeValue::S(dt.to_rfc3339()));
    }
}

fn put_list<T>(item: &mut Item, key: &str, values: &[T], to_map: fn(&T) -> Item) {
    let list = values
        .iter()
        .map(|value| AttributeValue::M(to_map(value)))
        .collect();
    item.insert(key.to_string(), AttributeValue::L(list));
}

// ============================================================================
// Readers
// ============================================================================

/// Get a required string attribute.
fn get_string(item: &Item, key: &str) -> Result<String, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))
}

/// Get a string attribute, empty when missing or not a string.
fn get_string_or_default(item: &Item, key: &str) -> String {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .cloned()
        .unwrap_or_default()
}

/// Get a boolean attribute, false when missing.
fn get_bool_or_default(item: &Item, key: &str) -> bool {
    item.get(key)
        .and_then(|v| v.as_bool().ok())
        .copied()
        .unwrap_or_default()
}

/// Get an integer attribute, zero when missing.
fn get_number_or_default(item: &Item, key: &str) -> Result<i64, RepositoryError> {
    match item.get(key).and_then(|v| v.as_n().ok()) {
        Some(n) => n
            .parse()
            .map_err(|e| RepositoryError::InvalidData(format!("Invalid number {}: {}", key, e))),
        None => Ok(0),
    }
}

/// Get an optional UUID attribute. Empty strings count as absent.
fn get_optional_uuid(item: &Item, key: &str) -> Result<Option<Uuid>, RepositoryError> {
    match item.get(key).and_then(|v| v.as_s().ok()) {
        Some(s) if !s.is_empty() => Uuid::parse_str(s)
            .map(Some)
            .map_err(|e| RepositoryError::InvalidData(format!("Invalid UUID {}: {}", key, e))),
        _ => Ok(None),
    }
}

/// Get an optional datetime attribute (RFC 3339 format).
fn get_optional_datetime(
    item: &Item,
    key: &str,
) -> Result<Option<DateTime<Utc>>, RepositoryError> {
    match item.get(key).and_then(|v| v.as_s().ok()) {
        Some(s) if !s.is_empty() => DateTime::parse_from_rfc3339(s)
            .map(|dt| Some(dt.with_timezone(&Utc)))
            .map_err(|e| RepositoryError::InvalidData(format!("Invalid datetime {}: {}", key, e))),
        _ => Ok(None),
    }
}

/// Get a list of nested maps, empty when missing.
fn get_list<T>(
    item: &Item,
    key: &str,
    from_map: fn(&Item) -> Result<T, RepositoryError>,
) -> Result<Vec<T>, RepositoryError> {
    let Some(list) = item.get(key).and_then(|v| v.as_l().ok()) else {
        return Ok(Vec::new());
    };

    list.iter()
        .map(|value| {
            value
                .as_m()
                .map_err(|_| RepositoryError::InvalidData(format!("Invalid list entry in {}", key)))
                .and_then(from_map)
        })
        .collect()
}
