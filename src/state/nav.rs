//! Navigation chrome: mobile menu flag and scroll-driven active section.
//!
//! SYSTEM CONTEXT
//! ==============
//! The navbar component feeds scroll offsets and measured section boxes into
//! these helpers and renders the result as `active` classes on the hamburger,
//! the menu, and the matching `.nav-link`.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// A section counts as current from this many pixels above its top edge.
pub const SECTION_LEAD_PX: f64 = 100.0;

/// Height of the fixed navbar; anchor scrolling stops this far above a target.
pub const NAVBAR_OFFSET_PX: f64 = 70.0;

/// Quiescence window before active-link highlighting is recomputed.
pub const ACTIVE_LINK_DEBOUNCE_MS: u32 = 10;

/// Measured box of a `section[id]` element in document order.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// Mobile menu flag and the section whose nav link is highlighted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub menu_open: bool,
    pub active_section: Option<String>,
}

impl NavState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Handle a document-level key press. Returns `true` if the menu state
    /// changed.
    pub fn handle_key(&mut self, key: &str) -> bool {
        if key != "Escape" {
            return false;
        }
        let was_open = self.menu_open;
        self.close_menu();
        was_open
    }

    /// A nav link was clicked. The menu closes; the caller still scrolls to
    /// the returned anchor id.
    pub fn follow_link<'a>(&mut self, href: &'a str) -> Option<&'a str> {
        self.close_menu();
        anchor_id(href)
    }

    /// Recompute the highlighted section. Returns `true` if it changed.
    pub fn highlight(&mut self, scroll_y: f64, sections: &[SectionBounds]) -> bool {
        let next = current_section(scroll_y, sections);
        if self.active_section.as_deref() == next {
            return false;
        }
        self.active_section = next.map(str::to_owned);
        true
    }

    pub fn is_link_active(&self, href: &str) -> bool {
        link_is_active(href, self.active_section.as_deref())
    }
}

/// Id of the section the viewport is in, if any.
///
/// Scans every section in document order and keeps the last one whose
/// `[top - 100, top - 100 + height)` window contains `scroll_y`. Above the
/// first section nothing matches and no link is active.
pub fn current_section(scroll_y: f64, sections: &[SectionBounds]) -> Option<&str> {
    let mut current = None;
    for section in sections {
        let top = section.top - SECTION_LEAD_PX;
        if scroll_y >= top && scroll_y < top + section.height {
            current = Some(section.id.as_str());
        }
    }
    current
}

/// Whether a nav link `href` points at the current section.
pub fn link_is_active(href: &str, current: Option<&str>) -> bool {
    match current {
        Some(id) => anchor_id(href) == Some(id),
        None => false,
    }
}

/// Strip the leading `#` from an in-page anchor.
pub fn anchor_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Vertical scroll position that brings a target just below the navbar.
pub fn scroll_target(offset_top: f64) -> f64 {
    offset_top - NAVBAR_OFFSET_PX
}
