mod error;
mod http_mapping;
mod mock_data;
mod types;
mod validation;

pub use error::ConsultantError;
pub use http_mapping::consultant_error_to_status_code;
pub use mock_data::generate_seed_consultants;
pub use types::{Certificate, Consultant, Contact, DesiredSkill, Link, PastProject, Skill};
pub use validation::is_email_valid;
