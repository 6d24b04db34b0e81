//! Staggered list of project cards

use super::ProjectCard;
use crate::motion::{self, MotionConfig, Stagger};
use leptos::prelude::*;
use project_cards_types::Project;
use std::time::Duration;

/// One rendered list slot.
#[derive(Debug, Clone, PartialEq)]
pub struct CardEntry {
    /// Render key, the project id
    pub key: String,
    /// Entrance delay for this position
    pub delay: Duration,
    pub project: Project,
}

/// Pair each project with its key and entrance delay, keeping input order.
pub fn card_entries(projects: Vec<Project>, entrance: &Stagger) -> Vec<CardEntry> {
    projects
        .into_iter()
        .enumerate()
        .map(|(index, project)| CardEntry {
            key: project.id.clone(),
            delay: entrance.delay_for(index),
            project,
        })
        .collect()
}

/// Renders one `ProjectCard` per project, in order.
///
/// Motion timing comes from the `config` prop, then a `MotionConfig` in
/// context, then the defaults. The generated stylesheet is embedded so the
/// list needs no global CSS.
#[component]
pub fn ProjectCards(
    #[prop(into)] projects: Signal<Vec<Project>>,
    #[prop(optional)] config: Option<MotionConfig>,
) -> impl IntoView {
    let config = config.or_else(use_context::<MotionConfig>).unwrap_or_default();
    // Cards resolve their own timing from context.
    provide_context(config);
    let css = motion::stylesheet(&config);

    view! {
        <div class="project-cards">
            <style>{css}</style>
            <div class="project-cards__list">
                <For
                    each=move || card_entries(projects.get(), &config.entrance)
                    key=|entry| entry.key.clone()
                    children=move |entry: CardEntry| {
                        view! {
                            <div
                                class="project-cards__entry"
                                style=format!("animation-delay: {}ms", entry.delay.as_millis())
                            >
                                <ProjectCard project=entry.project />
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use project_cards_types::PaymentStatus;

    fn projects(ids: &[&str]) -> Vec<Project> {
        ids.iter()
            .map(|id| Project::new(*id, format!("Project {id}"), "$20/hr", PaymentStatus::NotPaid))
            .collect()
    }

    #[test]
    fn test_one_entry_per_project_in_order() {
        let entries = card_entries(projects(&["c", "a", "b"]), &MotionConfig::default().entrance);

        assert_eq!(entries.len(), 3);
        let keys: Vec<_> = entries.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["c", "a", "b"]);
        assert_eq!(entries[1].project.title, "Project a");
    }

    #[test]
    fn test_entrance_delays_are_staggered() {
        let entries = card_entries(projects(&["a", "b", "c"]), &Stagger::new(300, 100));
        let delays: Vec<_> = entries.iter().map(|e| e.delay.as_millis()).collect();
        assert_eq!(delays, vec![300, 400, 500]);
    }

    #[test]
    fn test_empty_list_has_no_entries() {
        assert!(card_entries(Vec::new(), &MotionConfig::default().entrance).is_empty());
    }

    #[test]
    fn test_duplicate_ids_still_render() {
        let entries = card_entries(projects(&["a", "a"]), &MotionConfig::default().entrance);
        assert_eq!(entries.len(), 2);
    }
}
