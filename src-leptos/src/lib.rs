//! Project Cards - Leptos Frontend Library
//!
//! Expandable project cards with spring-driven entrance and pointer feedback.

pub mod app;
pub mod components;
pub mod motion;
pub mod state;
pub mod style;
pub mod view_model;
