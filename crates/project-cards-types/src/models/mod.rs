//! Domain models for project cards.

mod list;
mod project;

pub use list::{check_unique_ids, duplicate_ids, parse_projects};
pub use project::{PaymentStatus, Project};
