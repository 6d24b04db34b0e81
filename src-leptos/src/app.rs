//! Demo App component

use crate::components::ProjectCards;
use crate::motion::MotionConfig;
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Style, Title};
use project_cards_types::{check_unique_ids, parse_projects, Project};

const DEMO_PROJECTS: &str = include_str!("../assets/projects.json");

/// Logo background tokens used by the demo records.
const DEMO_CSS: &str = "\
.logo--indigo { background-color: #4f46e5; }
.logo--emerald { background-color: #059669; }
.logo--amber { background-color: #d97706; }
.logo--rose { background-color: #e11d48; }
";

/// Decode the bundled demo records.
///
/// A broken fixture renders an empty list; duplicate ids are logged and kept.
pub fn load_demo_projects() -> Vec<Project> {
    match parse_projects(DEMO_PROJECTS) {
        Ok(projects) => {
            if let Err(e) = check_unique_ids(&projects) {
                log::warn!("{}; rendering anyway", e);
            }
            projects
        }
        Err(e) => {
            log::error!("Failed to load demo projects: {}", e);
            Vec::new()
        }
    }
}

/// Root App component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(MotionConfig::default());

    let projects = load_demo_projects();
    log::info!("Rendering {} project cards", projects.len());

    view! {
        <Title text="Projects" />
        <Style>{DEMO_CSS}</Style>
        <main class="app-container">
            <ProjectCards projects=projects />
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use project_cards_types::duplicate_ids;

    #[test]
    fn test_demo_projects_load() {
        let projects = load_demo_projects();
        assert_eq!(projects.len(), 4);
        assert_eq!(projects[0].title, "Website Redesign");
        assert!(duplicate_ids(&projects).is_empty());
    }

    #[test]
    fn test_demo_logo_tokens_have_styles() {
        for project in load_demo_projects() {
            assert!(
                DEMO_CSS.contains(&format!(".{} ", project.logo_color)),
                "no style for {}",
                project.logo_color
            );
        }
    }
}
