//! Mount/unmount with an exit animation.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// Lifecycle of the presented children.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PresencePhase {
    #[default]
    Hidden,
    Shown,
    /// Still mounted while the exit animation plays
    Leaving,
}

impl PresencePhase {
    pub const fn initial(when: bool) -> Self {
        if when {
            Self::Shown
        } else {
            Self::Hidden
        }
    }

    /// React to the `when` signal changing.
    pub const fn on_when(self, when: bool) -> Self {
        match (self, when) {
            (_, true) => Self::Shown,
            (Self::Hidden, false) => Self::Hidden,
            (Self::Shown | Self::Leaving, false) => Self::Leaving,
        }
    }

    /// The exit timer fired. Only a phase still leaving unmounts.
    pub const fn on_timeout(self) -> Self {
        match self {
            Self::Leaving => Self::Hidden,
            other => other,
        }
    }

    pub const fn is_mounted(self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub const fn is_leaving(self) -> bool {
        matches!(self, Self::Leaving)
    }
}

/// Renders `children` while `when` is true and keeps them mounted for
/// `exit_after` once it turns false, with `exit_class` applied so the
/// collapse can play. Turning `when` back on during the exit keeps the
/// existing children and drops the pending unmount. A zero `exit_after`
/// unmounts immediately.
#[component]
pub fn Presence(
    #[prop(into)] when: Signal<bool>,
    exit_after: Duration,
    class: &'static str,
    enter_class: &'static str,
    exit_class: &'static str,
    children: ChildrenFn,
) -> impl IntoView {
    let phase = RwSignal::new(PresencePhase::initial(when.get_untracked()));
    let exit_ms = u32::try_from(exit_after.as_millis()).unwrap_or(u32::MAX);

    // Dropping a Timeout cancels it, so replacing or clearing the slot is enough.
    // The slot lives in the effect, so unmounting the component cancels it too.
    let pending = Rc::new(RefCell::new(None::<Timeout>));
    Effect::new(move |_| {
        let previous = phase.get_untracked();
        let mut next = previous.on_when(when.get());

        if next.is_leaving() && exit_ms == 0 {
            next = next.on_timeout();
        }
        if next.is_leaving() && !previous.is_leaving() {
            let timer = Timeout::new(exit_ms, move || phase.update(|p| *p = p.on_timeout()));
            *pending.borrow_mut() = Some(timer);
        } else if !next.is_leaving() {
            drop(pending.borrow_mut().take());
        }
        phase.set(next);
    });

    view! {
        <Show when=move || phase.get().is_mounted()>
            <div class=move || {
                format!("{} {}", class, if phase.get().is_leaving() { exit_class } else { enter_class })
            }>{children()}</div>
        </Show>
    }
}
