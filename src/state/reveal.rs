//! Reveal-on-scroll bookkeeping and the load-time stagger.
//!
//! TRADE-OFFS
//! ==========
//! The intersection observer stays registered for the page lifetime. Revealing
//! is one-directional, so repeat intersections are filtered here rather than
//! by unobserving targets.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use std::collections::HashSet;

/// Fraction of a target that must be visible to count as intersecting.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Shrinks the viewport bottom so targets reveal slightly after entering.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Elements observed for reveal.
pub const REVEAL_SELECTOR: &str = ".project-card, .skill-category, .resume-item, .contact-item";

/// Class added once a target has been seen.
pub const REVEALED_CLASS: &str = "fade-in-up";

/// Elements given the staggered load animation.
pub const STAGGER_SELECTOR: &str = ".project-card, .skill-category, .resume-item";

pub const STAGGER_STEP_SECS: f64 = 0.1;

/// Delay between tagging elements `loading` and flipping them to `loaded`.
pub const LOADED_DELAY_MS: u32 = 100;

/// Targets that have already been revealed, keyed by registration index.
#[derive(Clone, Debug, Default)]
pub struct RevealSet {
    revealed: HashSet<u32>,
}

impl RevealSet {
    /// Record an intersection change. Returns `true` exactly once per target,
    /// on its first transition into view.
    pub fn observe(&mut self, key: u32, is_intersecting: bool) -> bool {
        is_intersecting && self.revealed.insert(key)
    }

    pub fn is_revealed(&self, key: u32) -> bool {
        self.revealed.contains(&key)
    }

    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }
}

/// `animation-delay` for the `index`-th staggered element.
pub fn stagger_delay(index: usize) -> String {
    #[allow(clippy::cast_precision_loss)]
    let secs = index as f64 * STAGGER_STEP_SECS;
    format!("{}s", (secs * 10.0).round() / 10.0)
}
