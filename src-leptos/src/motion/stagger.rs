//! Sequential delays across sibling elements.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// `delay + index * step`, in milliseconds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Stagger {
    /// Delay before the first element
    pub delay_ms: u32,
    /// Extra delay per following element
    pub step_ms: u32,
}

impl Stagger {
    pub const fn new(delay_ms: u32, step_ms: u32) -> Self {
        Self { delay_ms, step_ms }
    }

    pub fn delay_for(&self, index: usize) -> Duration {
        let step = u64::from(self.step_ms).saturating_mul(index as u64);
        Duration::from_millis(u64::from(self.delay_ms).saturating_add(step))
    }
}
