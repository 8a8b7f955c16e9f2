//! Mock data generation for testing and seeding.
//!
//! Pure functions producing deterministic consultants. Usable from unit
//! tests and from `cargo xtask dynamodb seed`.

use chrono::{Duration, TimeZone, Utc};

use super::types::{Consultant, Contact, DesiredSkill, Link, PastProject, Skill};

const FIRST_NAMES: [&str; 8] = [
    "Ann", "Bruno", "Carla", "Diego", "Elena", "Facundo", "Gabriela", "Hugo",
];

const LAST_NAMES: [&str; 6] = ["Lee", "Silva", "Pereira", "Rossi", "Novak", "Kim"];

const ROLES: [&str; 5] = [
    "Backend Engineer",
    "Frontend Engineer",
    "Data Engineer",
    "Cloud Architect",
    "Engineering Manager",
];

const LOCATIONS: [&str; 4] = ["Montevideo", "Buenos Aires", "Madrid", "Remote"];

const SKILLS: [&str; 7] = ["Rust", "Go", "TypeScript", "AWS", "Terraform", "React", "SQL"];

const CLIENTS: [(&str, &str); 4] = [
    ("Acme Bank", "Finance"),
    ("Globex", "Retail"),
    ("Initech", "Insurance"),
    ("Umbrella Health", "Healthcare"),
];

const STATUSES: [&str; 3] = ["available", "on project", "on leave"];

/// Generate `count` consultants with distinct emails.
///
/// # Example
///
/// ```
/// use consultants_core::consultant::generate_seed_consultants;
///
/// let consultants = generate_seed_consultants(10);
///
/// assert_eq!(consultants.len(), 10);
/// assert!(consultants.iter().all(|c| !c.is_empty()));
/// ```
pub fn generate_seed_consultants(count: u32) -> Vec<Consultant> {
    (0..count as usize).map(seed_consultant).collect()
}

fn seed_consultant(i: usize) -> Consultant {
    let first_name = FIRST_NAMES[i % FIRST_NAMES.len()];
    let last_name = LAST_NAMES[i % LAST_NAMES.len()];
    let email = format!(
        "{}.{}{}@example.com",
        first_name.to_lowercase(),
        last_name.to_lowercase(),
        i
    );

    let since = Utc
        .with_ymd_and_hms(2018 + (i % 6) as i32, 1 + (i % 12) as u32, 1, 9, 0, 0)
        .single();

    let (client, sector) = CLIENTS[i % CLIENTS.len()];
    let project_start = since.map(|s| s + Duration::days(30));
    let mut project = PastProject {
        project_name: format!("{client} platform"),
        role: ROLES[(i + 1) % ROLES.len()].to_string(),
        client: client.to_string(),
        sector: sector.to_string(),
        description: format!("Modernization work for {client}"),
        start_date: project_start,
        completion_date: project_start.map(|s| s + Duration::days(90 + (i as i64 % 4) * 30)),
        duration: 0,
    };
    project.derive_duration();

    let mut consultant = Consultant::new(email.clone())
        .with_name(first_name, last_name)
        .with_role(ROLES[i % ROLES.len()])
        .with_location(LOCATIONS[i % LOCATIONS.len()])
        .with_skill(Skill::new(SKILLS[i % SKILLS.len()], 3 + (i % 3) as i64, true))
        .with_skill(Skill::new(SKILLS[(i + 3) % SKILLS.len()], 1 + (i % 2) as i64, false))
        .with_past_project(project);

    consultant.since = since;
    consultant.links.push(Link {
        link_name: "GitHub".to_string(),
        url: format!("https://github.com/{}{}", first_name.to_lowercase(), i),
    });
    consultant.desired_skills.push(DesiredSkill {
        name: SKILLS[(i + 5) % SKILLS.len()].to_string(),
        description: "Wants to pick this up on the next engagement".to_string(),
    });
    consultant.contact_info.push(Contact {
        email,
        slack: format!("@{}", first_name.to_lowercase()),
    });
    consultant.prefer_wfh = i % 2 == 0;
    consultant.current_employee = i % 5 != 4;
    consultant.current_status = STATUSES[i % STATUSES.len()].to_string();

    consultant
}
