//! Helpers for ordered project lists.

use super::Project;
use crate::error::{ProjectError, Result};
use std::collections::HashSet;

/// Ids that occur more than once, each reported once, in order of first repetition.
pub fn duplicate_ids(projects: &[Project]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut duplicates = Vec::new();

    for project in projects {
        let id = project.id.as_str();
        if !seen.insert(id) && reported.insert(id) {
            duplicates.push(id.to_string());
        }
    }
    duplicates
}

/// Fail on the first repeated id.
///
/// The error is recoverable: callers log it and keep rendering.
pub fn check_unique_ids(projects: &[Project]) -> Result<()> {
    match duplicate_ids(projects).into_iter().next() {
        Some(id) => Err(ProjectError::DuplicateId { id }),
        None => Ok(()),
    }
}

/// Decode a JSON array of project records.
pub fn parse_projects(json: &str) -> Result<Vec<Project>> {
    serde_json::from_str(json).map_err(|e| ProjectError::from_json_error(&e))
}
