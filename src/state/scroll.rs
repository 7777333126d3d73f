//! Scroll-driven visual effects and the debounce used for nav highlighting.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use super::theme::Theme;

/// Past this offset (strictly greater) the navbar turns nearly opaque.
pub const NAVBAR_SOLID_THRESHOLD: f64 = 100.0;

/// Home section moves at this fraction of the scroll speed.
pub const PARALLAX_RATE: f64 = 0.5;

const LIGHT_TRANSLUCENT: &str = "rgba(255, 255, 255, 0.95)";
const LIGHT_SOLID: &str = "rgba(255, 255, 255, 0.98)";
const DARK_TRANSLUCENT: &str = "rgba(17, 24, 39, 0.95)";
const DARK_SOLID: &str = "rgba(17, 24, 39, 0.98)";

/// Navbar background for a theme at a scroll offset.
pub fn navbar_background(theme: Theme, scroll_y: f64) -> &'static str {
    let solid = scroll_y > NAVBAR_SOLID_THRESHOLD;
    match (theme, solid) {
        (Theme::Light, false) => LIGHT_TRANSLUCENT,
        (Theme::Light, true) => LIGHT_SOLID,
        (Theme::Dark, false) => DARK_TRANSLUCENT,
        (Theme::Dark, true) => DARK_SOLID,
    }
}

pub fn parallax_offset(page_y: f64) -> f64 {
    page_y * PARALLAX_RATE
}

/// CSS transform for the home section.
pub fn parallax_transform(page_y: f64) -> String {
    format!("translateY({}px)", parallax_offset(page_y))
}

/// Latest window scroll offset, updated on every scroll event.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    pub y: f64,
}

impl ScrollState {
    pub fn navbar_background(self, theme: Theme) -> &'static str {
        navbar_background(theme, self.y)
    }

    pub fn parallax_transform(self) -> String {
        parallax_transform(self.y)
    }
}

/// Trailing-edge debounce driven by a generation counter.
///
/// Each event calls [`Debouncer::schedule`] and arms a timer carrying the
/// returned ticket. When a timer fires, only the ticket of the most recent
/// event is still current; earlier timers find a stale ticket and do nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Debouncer {
    generation: u64,
}

impl Debouncer {
    pub fn schedule(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        ticket == self.generation
    }
}
