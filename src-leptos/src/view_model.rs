//! Display data for one card, split by what is always shown and what only
//! appears when the card is expanded.

use project_cards_types::{PaymentStatus, Project};

/// Always rendered: logo badge, title, status pill and price.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardHeader {
    pub title: String,
    pub price: String,
    pub status: PaymentStatus,
    /// Caller-supplied class selecting the badge background
    pub logo_color: String,
    pub logo_icon: String,
}

impl From<&Project> for CardHeader {
    fn from(project: &Project) -> Self {
        Self {
            title: project.title.clone(),
            price: project.price_per_hour.clone(),
            status: project.status,
            logo_color: project.logo_color.clone(),
            logo_icon: project.logo_icon.clone(),
        }
    }
}

/// Rendered only while expanded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardDetails {
    pub categories: Vec<String>,
    pub description: String,
    pub location: String,
    pub time_ago: String,
}

impl CardDetails {
    /// One pill per category, in input order.
    pub fn category_labels(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(String::as_str)
    }
}

impl From<&Project> for CardDetails {
    fn from(project: &Project) -> Self {
        Self {
            categories: project.categories.clone(),
            description: project.description.clone(),
            location: project.location.clone(),
            time_ago: project.time_ago.clone(),
        }
    }
}
