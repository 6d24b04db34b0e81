//! Typed error definitions for project records.
//!
//! Rendering itself never fails. These errors only come from the edges that
//! build `Project` values: decoding JSON, parsing a status label, or checking
//! a list before handing it to the cards.

mod project;

pub use project::ProjectError;

/// Standard Result type using ProjectError.
pub type Result<T> = std::result::Result<T, ProjectError>;
