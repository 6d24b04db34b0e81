//! Project card components

mod icons;
mod pill;
mod presence;
mod project_card;
mod project_cards;

pub use icons::{ChevronDown, MapPin};
pub use pill::{CategoryPill, StatusPill};
pub use presence::{Presence, PresencePhase};
pub use project_card::ProjectCard;
pub use project_cards::{card_entries, CardEntry, ProjectCards};
