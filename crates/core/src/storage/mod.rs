mod error;
mod traits;

pub use error::{RepositoryError, Result, CONSULTANT_ENTITY};
pub use traits::ConsultantRepository;
