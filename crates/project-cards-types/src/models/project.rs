//! Project record and payment status.

use crate::error::ProjectError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Payment state shown in a card's status pill.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum PaymentStatus {
    /// Work has been paid for
    Paid,
    /// Payment still outstanding
    #[default]
    #[serde(rename = "Not Paid")]
    NotPaid,
}

impl PaymentStatus {
    /// Display text for the status pill.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Paid => "Paid",
            Self::NotPaid => "Not Paid",
        }
    }

    pub const fn is_paid(self) -> bool {
        matches!(self, Self::Paid)
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PaymentStatus {
    type Err = ProjectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Paid" => Ok(Self::Paid),
            "Not Paid" => Ok(Self::NotPaid),
            other => Err(ProjectError::UnknownStatus { value: other.to_string() }),
        }
    }
}

/// A work listing rendered by one project card.
///
/// Every text field is display-ready: prices and relative times arrive
/// pre-formatted and are never parsed here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Unique identifier, used as the render key within one list
    pub id: String,
    /// Card title
    pub title: String,
    /// Pre-formatted hourly price, e.g. "$45/hr"
    pub price_per_hour: String,
    /// Payment state for the status pill
    pub status: PaymentStatus,
    /// Category labels, in display order
    #[serde(default)]
    pub categories: Vec<String>,
    /// Free-form description shown when expanded
    #[serde(default)]
    pub description: String,
    /// Location label shown when expanded
    #[serde(default)]
    pub location: String,
    /// Pre-formatted relative time, e.g. "2h ago"
    #[serde(default)]
    pub time_ago: String,
    /// Style token (CSS class) selecting the logo background
    #[serde(default)]
    pub logo_color: String,
    /// Short glyph shown inside the logo badge
    #[serde(default)]
    pub logo_icon: String,
}

impl Project {
    /// Create a project with the required header fields; detail fields start empty.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        price_per_hour: impl Into<String>,
        status: PaymentStatus,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            price_per_hour: price_per_hour.into(),
            status,
            ..Self::default()
        }
    }

    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_time_ago(mut self, time_ago: impl Into<String>) -> Self {
        self.time_ago = time_ago.into();
        self
    }

    /// Set the logo badge style token and glyph.
    pub fn with_logo(mut self, color: impl Into<String>, icon: impl Into<String>) -> Self {
        self.logo_color = color.into();
        self.logo_icon = icon.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_labels() {
        assert_eq!(PaymentStatus::Paid.to_string(), "Paid");
        assert_eq!(PaymentStatus::NotPaid.to_string(), "Not Paid");
        assert!(PaymentStatus::Paid.is_paid());
        assert!(!PaymentStatus::NotPaid.is_paid());
    }

    #[test]
    fn test_status_from_str() {
        assert_eq!("Paid".parse::<PaymentStatus>(), Ok(PaymentStatus::Paid));
        assert_eq!("Not Paid".parse::<PaymentStatus>(), Ok(PaymentStatus::NotPaid));
        assert_eq!(
            "paid".parse::<PaymentStatus>(),
            Err(ProjectError::UnknownStatus { value: "paid".to_string() })
        );
    }

    #[test]
    fn test_status_serde_uses_labels() {
        assert_eq!(serde_json::to_string(&PaymentStatus::NotPaid).unwrap(), "\"Not Paid\"");
        let status: PaymentStatus = serde_json::from_str("\"Paid\"").unwrap();
        assert_eq!(status, PaymentStatus::Paid);
    }

    #[test]
    fn test_project_camel_case_keys() {
        let project = Project::new("p1", "Website Redesign", "$45/hr", PaymentStatus::Paid)
            .with_time_ago("2h ago")
            .with_logo("logo--indigo", "W");
        let json = serde_json::to_value(&project).unwrap();

        assert_eq!(json["pricePerHour"], "$45/hr");
        assert_eq!(json["timeAgo"], "2h ago");
        assert_eq!(json["logoColor"], "logo--indigo");
        assert_eq!(json["logoIcon"], "W");
        assert_eq!(json["status"], "Paid");
    }

    #[test]
    fn test_missing_categories_default_to_empty() {
        let project: Project = serde_json::from_str(
            r#"{"id":"p1","title":"Audit","pricePerHour":"$30/hr","status":"Not Paid"}"#,
        )
        .unwrap();
        assert!(project.categories.is_empty());
        assert_eq!(project.status, PaymentStatus::NotPaid);
    }
}
