//! Project grid filtering by category tag.
//!
//! Filter buttons carry a `data-filter` value; cards carry `data-category`.
//! The value `"all"` is reserved and shows every card.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

pub const ALL_TAG: &str = "all";

/// Animation replayed on every card a filter change reveals.
pub const CARD_FADE_ANIMATION: &str = "fadeInUp 0.6s ease-out";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Filter {
    #[default]
    All,
    Category(String),
}

impl Filter {
    pub fn from_tag(tag: &str) -> Self {
        if tag == ALL_TAG { Self::All } else { Self::Category(tag.to_owned()) }
    }

    pub fn tag(&self) -> &str {
        match self {
            Self::All => ALL_TAG,
            Self::Category(tag) => tag,
        }
    }

    pub fn shows(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Category(tag) => tag == category,
        }
    }
}

/// Inline display for one card after a filter pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardDisplay {
    /// `display: block` plus the fade-in animation.
    Shown,
    /// `display: none`.
    Hidden,
}

impl CardDisplay {
    pub fn display(self) -> &'static str {
        match self {
            Self::Shown => "block",
            Self::Hidden => "none",
        }
    }

    pub fn animation(self) -> Option<&'static str> {
        match self {
            Self::Shown => Some(CARD_FADE_ANIMATION),
            Self::Hidden => None,
        }
    }
}

/// Show or hide each card given its category.
pub fn apply_filter<'a, I>(filter: &Filter, categories: I) -> Vec<CardDisplay>
where
    I: IntoIterator<Item = &'a str>,
{
    categories
        .into_iter()
        .map(|category| if filter.shows(category) { CardDisplay::Shown } else { CardDisplay::Hidden })
        .collect()
}

/// Which filter button is active and which filter the cards last received.
///
/// Cards carry no inline display until the first click; before that the
/// `All` button is marked active but nothing has been applied.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterState {
    pub active: Filter,
    applied: Option<Filter>,
}

impl FilterState {
    /// Activate the button carrying `tag` and apply it to the cards. Last
    /// click wins.
    pub fn select(&mut self, tag: &str) {
        self.active = Filter::from_tag(tag);
        self.applied = Some(self.active.clone());
        log::debug!("project filter: {}", self.active.tag());
    }

    pub fn is_active(&self, tag: &str) -> bool {
        self.active.tag() == tag
    }

    pub fn applied(&self) -> Option<&Filter> {
        self.applied.as_ref()
    }

    /// Per-card display for the applied filter, or `None` before any click.
    pub fn card_displays<'a, I>(&self, categories: I) -> Option<Vec<CardDisplay>>
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.applied.as_ref().map(|filter| apply_filter(filter, categories))
    }
}
