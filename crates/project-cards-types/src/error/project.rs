//! Project record errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while building or checking project records.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum ProjectError {
    /// Project data could not be decoded
    #[error("Project parse error: {message}")]
    Parse {
        /// Description of the decode failure
        message: String,
    },

    /// Status label is neither "Paid" nor "Not Paid"
    #[error("Unknown payment status: {value:?}")]
    UnknownStatus {
        /// The rejected label
        value: String,
    },

    /// Two records in one list share an id
    #[error("Duplicate project id: {id}")]
    DuplicateId {
        /// The repeated id
        id: String,
    },
}

impl ProjectError {
    /// Create a parse error from a serde_json error.
    pub fn from_json_error(e: &serde_json::Error) -> Self {
        Self::Parse { message: e.to_string() }
    }

    /// Whether the list can still be rendered despite this error.
    ///
    /// Duplicate ids only weaken keyed diffing, they never break rendering.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::DuplicateId { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_recoverable() {
        let duplicate = ProjectError::DuplicateId { id: "p1".to_string() };
        let parse = ProjectError::Parse { message: "eof".to_string() };

        assert!(duplicate.is_recoverable());
        assert!(!parse.is_recoverable());
    }

    #[test]
    fn test_from_json_error() {
        let err = serde_json::from_str::<Vec<u8>>("[1,").unwrap_err();
        match ProjectError::from_json_error(&err) {
            ProjectError::Parse { message } => assert!(!message.is_empty()),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_serde_tagging() {
        let err = ProjectError::UnknownStatus { value: "Pending".to_string() };
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["type"], "UnknownStatus");
        assert_eq!(json["details"]["value"], "Pending");
    }
}
