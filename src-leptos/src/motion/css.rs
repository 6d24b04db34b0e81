//! Stylesheet generation from the variant tables.

use super::variants::{BADGE, CARD, CHEVRON, CHILD, ENTRY, EXPANDED_CONTENT, LIST, PILL, STATUS_PILL, TOGGLE};
use super::{spring::trim_float, Height, MotionConfig, Pose, Transition, Variants};
use crate::style;
use std::fmt::Write;

/// Static layout and typography.
const BASE_CSS: &str = include_str!("../../style/project-cards.css");

/// Class toggled on the detail region while it opens.
pub const DETAILS_ENTER_CLASS: &str = "project-card__details--enter";
/// Class toggled on the detail region while it closes.
pub const DETAILS_EXIT_CLASS: &str = "project-card__details--exit";

impl Pose {
    /// `transform` value composed as translate, scale, rotate.
    pub fn transform(&self) -> Option<String> {
        let mut parts = Vec::new();
        if let Some(y) = self.y {
            parts.push(format!("translateY({}px)", trim_float(y)));
        }
        if let Some(scale) = self.scale {
            parts.push(format!("scale({})", trim_float(scale)));
        }
        if let Some(rotate) = self.rotate {
            parts.push(format!("rotate({}deg)", trim_float(rotate)));
        }
        (!parts.is_empty()).then(|| parts.join(" "))
    }

    /// Declarations for a rule or keyframe body.
    pub fn declarations(&self) -> String {
        let mut out = String::new();
        if let Some(opacity) = self.opacity {
            let _ = write!(out, "opacity: {}; ", trim_float(opacity));
        }
        if let Some(transform) = self.transform() {
            let _ = write!(out, "transform: {transform}; ");
        }
        if let Some(height) = self.height {
            // The region is a one-row grid; 0fr -> 1fr animates to content height.
            let rows = match height {
                Height::Zero => "0fr",
                Height::Auto => "1fr",
            };
            let _ = write!(out, "grid-template-rows: {rows}; ");
        }
        if let Some(background) = self.background {
            let _ = write!(out, "background-color: {background}; ");
        }
        out.trim_end().to_string()
    }
}

fn keyframes(name: &str, from: &Pose, to: &Pose) -> String {
    format!(
        "@keyframes {name} {{ from {{ {} }} to {{ {} }} }}\n",
        from.declarations(),
        to.declarations()
    )
}

fn rule(selector: &str, body: &str) -> String {
    format!("{selector} {{ {body} }}\n")
}

fn animation(name: &str, transition: &Transition, delay_ms: u32, fill: &str) -> String {
    format!("animation: {name} {} {delay_ms}ms {fill};", transition.timing())
}

/// Resting transition plus `:hover` / `:active` rules.
fn interaction_rules(selector: &str, variants: &Variants, extra: &str) -> String {
    let timing = variants.interaction.timing();
    let mut properties = vec![format!("transform {timing}")];
    if variants.hover.background.is_some() || variants.tap.background.is_some() {
        properties.push(format!("background-color {timing}"));
    }

    let mut out = rule(selector, &format!("{extra}transition: {};", properties.join(", ")));
    if !variants.hover.is_empty() {
        out.push_str(&rule(&format!("{selector}:hover"), &variants.hover.declarations()));
    }
    if !variants.tap.is_empty() {
        out.push_str(&rule(&format!("{selector}:active"), &variants.tap.declarations()));
    }
    out
}

/// Full stylesheet for a card list: base layout, keyframes and pointer feedback.
///
/// Entrance animations fill backwards only, so once they finish the hover
/// transforms apply to the element's own styles.
pub fn stylesheet(config: &MotionConfig) -> String {
    let mut css = String::from(BASE_CSS);
    css.push('\n');

    css.push_str(&keyframes("pc-list-fade", &LIST.hidden, &LIST.visible));
    css.push_str(&keyframes("pc-entry", &ENTRY.hidden, &ENTRY.visible));
    css.push_str(&keyframes("pc-card", &CARD.hidden, &CARD.visible));
    css.push_str(&keyframes("pc-child", &CHILD.hidden, &CHILD.visible));
    css.push_str(&keyframes("pc-pill", &PILL.hidden, &PILL.visible));
    css.push_str(&keyframes("pc-details-in", &EXPANDED_CONTENT.hidden, &EXPANDED_CONTENT.visible));
    css.push_str(&keyframes("pc-details-out", &EXPANDED_CONTENT.visible, &EXPANDED_CONTENT.hidden));

    css.push_str(&rule(
        ".project-cards__list",
        &animation("pc-list-fade", &LIST.enter, config.list_delay_ms, "backwards"),
    ));
    // Per-element delays are set inline as `animation-delay`.
    css.push_str(&rule(".project-cards__entry", &animation("pc-entry", &ENTRY.enter, 0, "backwards")));
    css.push_str(&rule(".project-card__reveal", &animation("pc-child", &CHILD.enter, 0, "backwards")));

    css.push_str(&interaction_rules(
        ".project-card",
        &CARD,
        &format!("{} ", animation("pc-card", &CARD.enter, 0, "backwards")),
    ));
    css.push_str(&interaction_rules(
        ".category-pill",
        &PILL,
        &format!(
            "background-color: {}; {} ",
            style::PILL_BACKGROUND,
            animation("pc-pill", &PILL.enter, 0, "backwards")
        ),
    ));
    css.push_str(&interaction_rules(".status-pill", &STATUS_PILL, ""));
    css.push_str(&interaction_rules(".project-card__logo", &BADGE, ""));
    css.push_str(&interaction_rules(".project-card__marker", &BADGE, ""));
    css.push_str(&interaction_rules(
        ".project-card__toggle",
        &TOGGLE,
        &format!("color: {}; background-color: {}; ", style::INK, style::TOGGLE_BACKGROUND),
    ));
    css.push_str(&rule(".project-card__chevron", &format!("transition: transform {};", CHEVRON.timing())));

    css.push_str(&rule(
        &format!(".{DETAILS_ENTER_CLASS}"),
        &animation("pc-details-in", &EXPANDED_CONTENT.enter, 0, "both"),
    ));
    css.push_str(&rule(
        &format!(".{DETAILS_EXIT_CLASS}"),
        &animation("pc-details-out", &EXPANDED_CONTENT.exit, 0, "both"),
    ));

    if config.respect_reduced_motion {
        css.push_str(&format!(
            "@media {} {{\n  \
             .project-cards, .project-cards * {{ animation: none !important; transition: none !important; }}\n}}\n",
            super::REDUCED_MOTION_QUERY
        ));
    }
    css
}
