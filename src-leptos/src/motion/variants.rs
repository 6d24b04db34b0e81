//! Variant tables for every animated element of a card list.

use super::{CubicBezier, Height, Pose, Transition, Variants};
use crate::style;

const SETTLE: Transition = Transition::Spring(super::Spring::new(300.0, 30.0, 0.8));
const SOFT: Transition = Transition::spring(300.0, 25.0);
const SNAPPY: Transition = Transition::spring(400.0, 25.0);
const REVEAL_EASE: CubicBezier = CubicBezier(0.04, 0.62, 0.23, 0.98);

const SHOWN: Pose = Pose::NONE.opacity(1.0).y(0.0).scale(1.0);

/// List container fade.
pub const LIST: Variants = Variants {
    hidden: Pose::NONE.opacity(0.0),
    visible: Pose::NONE.opacity(1.0),
    hover: Pose::NONE,
    tap: Pose::NONE,
    enter: Transition::Tween { duration_ms: 300, ease: CubicBezier(0.0, 0.0, 0.58, 1.0) },
    exit: Transition::Tween { duration_ms: 300, ease: CubicBezier(0.0, 0.0, 0.58, 1.0) },
    interaction: SNAPPY,
};

/// Staggered wrapper around each card.
pub const ENTRY: Variants = Variants {
    hidden: Pose::NONE.opacity(0.0).y(30.0).scale(0.95),
    visible: SHOWN,
    hover: Pose::NONE,
    tap: Pose::NONE,
    enter: SETTLE,
    exit: SETTLE,
    interaction: SNAPPY,
};

pub const CARD: Variants = Variants {
    hidden: Pose::NONE.opacity(0.0).y(20.0).scale(0.95),
    visible: SHOWN,
    hover: Pose::NONE.y(-2.0),
    tap: Pose::NONE,
    enter: SETTLE,
    exit: SETTLE,
    interaction: SNAPPY,
};

/// Collapsible detail region: height 0 <-> auto with a fade.
pub const EXPANDED_CONTENT: Variants = Variants {
    hidden: Pose::NONE.opacity(0.0).height(Height::Zero),
    visible: Pose::NONE.opacity(1.0).height(Height::Auto),
    hover: Pose::NONE,
    tap: Pose::NONE,
    enter: Transition::Tween { duration_ms: 400, ease: REVEAL_EASE },
    exit: Transition::Tween { duration_ms: 300, ease: REVEAL_EASE },
    interaction: SNAPPY,
};

/// Rows inside a card (title row, price, detail rows).
pub const CHILD: Variants = Variants {
    hidden: Pose::NONE.opacity(0.0).y(10.0).scale(0.95),
    visible: SHOWN,
    hover: Pose::NONE,
    tap: Pose::NONE,
    enter: SOFT,
    exit: SOFT,
    interaction: SOFT,
};

/// Category pills: decorative hover/tap feedback only.
pub const PILL: Variants = Variants {
    hidden: Pose::NONE.opacity(0.0).scale(0.8).y(10.0),
    visible: SHOWN,
    hover: Pose::NONE.scale(1.05).y(-1.0),
    tap: Pose::NONE.scale(0.98),
    enter: SNAPPY,
    exit: SNAPPY,
    interaction: SNAPPY,
};

pub const STATUS_PILL: Variants = Variants {
    hidden: Pose::NONE,
    visible: Pose::NONE,
    hover: Pose::NONE.scale(1.05),
    tap: Pose::NONE.scale(0.98),
    enter: SNAPPY,
    exit: SNAPPY,
    interaction: SNAPPY,
};

/// Logo badge and location marker wiggle.
pub const BADGE: Variants = Variants {
    hidden: Pose::NONE,
    visible: Pose::NONE,
    hover: Pose::NONE.scale(1.1).rotate(5.0),
    tap: Pose::NONE,
    enter: SNAPPY,
    exit: SNAPPY,
    interaction: SNAPPY,
};

pub const TOGGLE: Variants = Variants {
    hidden: Pose::NONE,
    visible: Pose::NONE,
    hover: Pose::NONE.scale(1.1).background(style::TOGGLE_HOVER_BACKGROUND),
    tap: Pose::NONE.scale(0.95),
    enter: SNAPPY,
    exit: SNAPPY,
    interaction: SNAPPY,
};

/// Chevron rotation inside the toggle control.
pub const CHEVRON: Transition = SOFT;
