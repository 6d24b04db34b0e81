//! Declarative motion parameters for the project cards.
//!
//! Animations are plain data: poses, springs and tweens grouped into named
//! variant tables (`variants`). `css` turns the tables into keyframes and
//! hover/tap rules, so the browser interpolates everything and the components
//! only toggle classes and set per-element delays.

pub mod css;
mod spring;
mod stagger;
pub mod variants;

pub use css::stylesheet;
pub use stagger::Stagger;

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Points sampled from a spring for its CSS easing.
const EASING_SAMPLES: usize = 24;

/// Physical spring parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

impl Spring {
    pub const fn new(stiffness: f64, damping: f64, mass: f64) -> Self {
        Self { stiffness, damping, mass }
    }
}

/// CSS `cubic-bezier()` control points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier(pub f64, pub f64, pub f64, pub f64);

impl CubicBezier {
    pub fn css(&self) -> String {
        format!(
            "cubic-bezier({}, {}, {}, {})",
            spring::trim_float(self.0),
            spring::trim_float(self.1),
            spring::trim_float(self.2),
            spring::trim_float(self.3)
        )
    }
}

/// How a pose change is interpolated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transition {
    Spring(Spring),
    Tween { duration_ms: u32, ease: CubicBezier },
}

impl Transition {
    pub const fn spring(stiffness: f64, damping: f64) -> Self {
        Self::Spring(Spring::new(stiffness, damping, 1.0))
    }

    pub fn duration(&self) -> Duration {
        match self {
            Self::Spring(spring) => spring.settle_duration(),
            Self::Tween { duration_ms, .. } => Duration::from_millis(u64::from(*duration_ms)),
        }
    }

    pub fn easing(&self) -> String {
        match self {
            Self::Spring(spring) => spring.css_easing(EASING_SAMPLES),
            Self::Tween { ease, .. } => ease.css(),
        }
    }

    /// `<duration> <easing>` for `transition`/`animation` shorthands.
    pub fn timing(&self) -> String {
        format!("{}ms {}", self.duration().as_millis(), self.easing())
    }
}

/// Height of a collapsible region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Height {
    Zero,
    Auto,
}

/// Target values for animatable properties. `None` leaves a property alone.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pose {
    pub opacity: Option<f64>,
    /// Vertical offset in px
    pub y: Option<f64>,
    pub scale: Option<f64>,
    /// Rotation in degrees
    pub rotate: Option<f64>,
    pub height: Option<Height>,
    pub background: Option<&'static str>,
}

impl Pose {
    pub const NONE: Self = Self {
        opacity: None,
        y: None,
        scale: None,
        rotate: None,
        height: None,
        background: None,
    };

    pub const fn opacity(mut self, value: f64) -> Self {
        self.opacity = Some(value);
        self
    }

    pub const fn y(mut self, px: f64) -> Self {
        self.y = Some(px);
        self
    }

    pub const fn scale(mut self, value: f64) -> Self {
        self.scale = Some(value);
        self
    }

    pub const fn rotate(mut self, deg: f64) -> Self {
        self.rotate = Some(deg);
        self
    }

    pub const fn height(mut self, height: Height) -> Self {
        self.height = Some(height);
        self
    }

    pub const fn background(mut self, color: &'static str) -> Self {
        self.background = Some(color);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::NONE
    }
}

/// Named poses of one element plus the transitions between them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Variants {
    pub hidden: Pose,
    pub visible: Pose,
    pub hover: Pose,
    pub tap: Pose,
    /// hidden -> visible
    pub enter: Transition,
    /// visible -> hidden
    pub exit: Transition,
    /// Into and out of hover/tap
    pub interaction: Transition,
}

/// Tunable timing for the card list.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct MotionConfig {
    /// Delay before the list container fades in
    pub list_delay_ms: u32,
    /// Per-card entrance delay
    pub entrance: Stagger,
    /// Reveal delay for rows inside an expanded card
    pub children: Stagger,
    /// Disable animation under `prefers-reduced-motion: reduce`
    pub respect_reduced_motion: bool,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            list_delay_ms: 200,
            entrance: Stagger::new(300, 100),
            children: Stagger::new(100, 100),
            respect_reduced_motion: true,
        }
    }
}

impl MotionConfig {
    /// How long exiting content stays mounted. Zero when animations are
    /// switched off for reduced motion, since the CSS plays nothing.
    pub fn exit_duration(&self, animated: Duration, prefers_reduced_motion: bool) -> Duration {
        if self.respect_reduced_motion && prefers_reduced_motion {
            Duration::ZERO
        } else {
            animated
        }
    }
}

/// Media query mirrored by the reduced-motion block in the stylesheet.
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Whether the browser asks for reduced motion. False outside a window.
pub fn prefers_reduced_motion() -> bool {
    web_sys::window()
        .and_then(|window| window.match_media(REDUCED_MOTION_QUERY).ok().flatten())
        .is_some_and(|query| query.matches())
}
