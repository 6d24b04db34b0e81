//! Project Cards - Leptos demo
//!
//! Mounts the card list with the bundled sample projects.

// Dependencies used in lib.rs submodules, acknowledged here for bin target
use gloo_timers as _;
use leptos_meta as _;
use project_cards_types as _;
use serde as _;

use leptos::prelude::*;
use project_cards_leptos::app::App;

fn main() {
    // Initialize panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging (ignore error if already initialized)
    drop(console_log::init_with_level(log::Level::Debug));

    log::info!("Project Cards (Leptos) starting...");

    mount_to_body(App);
}
