//! Rounded label components

use crate::style::status_style;
use leptos::prelude::*;
use project_cards_types::PaymentStatus;
use std::time::Duration;

#[component]
pub fn StatusPill(status: PaymentStatus) -> impl IntoView {
    let style = status_style(status);

    view! {
        <span class=format!("status-pill {}", style.class) style=style.style_attr()>
            {status.label()}
        </span>
    }
}

/// Category label. Hover and press only scale it; there is no click action.
#[component]
pub fn CategoryPill(
    #[prop(into)] label: String,
    /// Entrance delay, matching the row it sits in
    #[prop(optional)]
    delay: Duration,
) -> impl IntoView {
    view! {
        <span class="category-pill" style=format!("animation-delay: {}ms", delay.as_millis())>
            {label}
        </span>
    }
}
