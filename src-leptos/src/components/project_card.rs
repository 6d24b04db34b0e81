//! Expandable project card

use super::{CategoryPill, ChevronDown, MapPin, Presence, StatusPill};
use crate::motion::css::{DETAILS_ENTER_CLASS, DETAILS_EXIT_CLASS};
use crate::motion::variants::EXPANDED_CONTENT;
use crate::motion::{prefers_reduced_motion, MotionConfig, Stagger};
use crate::state::{CardClick, CardState};
use crate::view_model::{CardDetails, CardHeader};
use leptos::prelude::*;
use project_cards_types::Project;

/// One project. Clicking the card or its chevron toggles the detail region.
#[component]
pub fn ProjectCard(
    project: Project,
    /// Reveal delays for the rows of the expanded region; defaults to the
    /// `MotionConfig` in context
    #[prop(optional)]
    reveal: Option<Stagger>,
) -> impl IntoView {
    let config = context_config();
    let reveal = reveal.unwrap_or(config.children);
    let exit_after = config.exit_duration(EXPANDED_CONTENT.exit.duration(), prefers_reduced_motion());

    let state = CardState::new();
    let header = CardHeader::from(&project);
    let details = CardDetails::from(&project);

    let id = project.id;
    let toggle = Callback::new(move |click: CardClick| {
        let next = state.click(click);
        log::debug!("Project {} {:?} via {:?}", id, next, click);
    });

    view! {
        <div class="project-card" on:click=move |_| toggle.run(CardClick::Body)>
            <div class="project-card__header">
                <div class="project-card__main">
                    <div class=format!("project-card__logo {}", header.logo_color)>
                        {header.logo_icon}
                    </div>

                    <div class="project-card__content">
                        <div class="project-card__title-row project-card__reveal">
                            <h3 class="project-card__title">{header.title}</h3>
                            <div class="project-card__separator"></div>
                            <StatusPill status=header.status />
                        </div>

                        <p class="project-card__price project-card__reveal">{header.price}</p>

                        <Presence
                            when=Signal::derive(move || state.get().shows_details())
                            exit_after=exit_after
                            class="project-card__details"
                            enter_class=DETAILS_ENTER_CLASS
                            exit_class=DETAILS_EXIT_CLASS
                        >
                            <DetailRows details=details.clone() reveal=reveal />
                        </Presence>
                    </div>
                </div>

                <button
                    class="project-card__toggle"
                    on:click=move |e| {
                        if !CardClick::ToggleControl.propagates() {
                            e.stop_propagation();
                        }
                        toggle.run(CardClick::ToggleControl);
                    }
                >
                    <span
                        class="project-card__chevron"
                        style=move || format!("transform: rotate({}deg)", state.get().indicator_rotation_deg())
                    >
                        <ChevronDown />
                    </span>
                </button>
            </div>
        </div>
    }
}

/// `MotionConfig` from context, or the defaults outside a provider.
fn context_config() -> MotionConfig {
    use_context::<MotionConfig>().unwrap_or_default()
}

/// Category pills, description, then location and time, revealed in sequence.
#[component]
fn DetailRows(details: CardDetails, reveal: Stagger) -> impl IntoView {
    let row_delay = |row: usize| format!("animation-delay: {}ms", reveal.delay_for(row).as_millis());
    let pills = details
        .category_labels()
        .map(|label| view! { <CategoryPill label=label.to_string() delay=reveal.delay_for(0) /> })
        .collect_view();

    view! {
        <div class="project-card__details-inner">
            <div class="project-card__categories project-card__reveal" style=row_delay(0)>
                {pills}
            </div>

            <p class="project-card__description project-card__reveal" style=row_delay(1)>
                {details.description}
            </p>

            <div class="project-card__meta project-card__reveal" style=row_delay(2)>
                <span class="project-card__marker">
                    <MapPin />
                </span>
                <span class="project-card__location">{details.location}</span>
                <div class="project-card__separator project-card__separator--light"></div>
                <span class="project-card__time">{details.time_ago}</span>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ExpandState;
    use crate::style::{status_style, INK};
    use project_cards_types::PaymentStatus;

    fn website_redesign() -> Project {
        Project::new("p1", "Website Redesign", "$45/hr", PaymentStatus::Paid)
            .with_categories(["Design", "Frontend"])
            .with_description("Redesign landing page")
            .with_location("Remote")
            .with_time_ago("2h ago")
    }

    #[test]
    fn test_website_redesign_scenario() {
        let owner = Owner::new();
        owner.set();

        let project = website_redesign();
        let header = CardHeader::from(&project);
        let details = CardDetails::from(&project);
        let state = CardState::new();

        // Header is unconditional.
        assert_eq!(header.title, "Website Redesign");
        assert_eq!(header.price, "$45/hr");
        assert_eq!(status_style(header.status).background, INK);

        assert!(!state.get_untracked().shows_details());

        state.click(CardClick::Body);
        assert!(state.get_untracked().shows_details());
        assert_eq!(details.category_labels().collect::<Vec<_>>(), vec!["Design", "Frontend"]);
        assert_eq!(details.location, "Remote");
        assert_eq!(details.time_ago, "2h ago");

        state.click(CardClick::Body);
        assert_eq!(state.get_untracked(), ExpandState::Collapsed);
    }

    #[test]
    fn test_chevron_click_toggles_once() {
        let owner = Owner::new();
        owner.set();

        let state = CardState::new();
        assert_eq!(state.click(CardClick::ToggleControl), ExpandState::Expanded);
        assert_eq!(state.click(CardClick::ToggleControl), ExpandState::Collapsed);
    }

    #[test]
    fn test_reveal_comes_from_context_config() {
        let owner = Owner::new();
        let config = owner.with(|| {
            provide_context(MotionConfig { children: Stagger::new(0, 50), ..MotionConfig::default() });
            context_config()
        });
        assert_eq!(config.children, Stagger::new(0, 50));
    }

    #[test]
    fn test_context_config_falls_back_to_defaults() {
        let owner = Owner::new();
        assert_eq!(owner.with(context_config), MotionConfig::default());
    }

    #[test]
    fn test_default_reveal_stagger() {
        let reveal = MotionConfig::default().children;
        assert_eq!(reveal.delay_for(0).as_millis(), 100);
        assert_eq!(reveal.delay_for(2).as_millis(), 300);
    }
}
