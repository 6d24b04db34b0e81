//! # Project Cards Types
//!
//! Project model, payment status and error definitions shared by the
//! Project Cards frontend.
//!
//! - **`error`** - Typed errors for decoding and checking project records
//! - **`models`** - The `Project` display record and list helpers
//!
//! ## Architecture Role
//!
//! ```text
//!        project-cards-types (this crate)
//!                  │
//!                  ▼
//!        project-cards-leptos (src-leptos)
//! ```
//!
//! The crate has no web dependencies so everything here is testable on the
//! host. Records are serde-serializable with the camelCase keys the card
//! data is usually shipped with.

pub mod error;
pub mod models;

pub use error::{ProjectError, Result};

pub use models::{check_unique_ids, duplicate_ids, parse_projects, PaymentStatus, Project};
