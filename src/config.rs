//! Site content and deployment settings.
//!
//! The page ships with `site.json` embedded at compile time. Parsing validates
//! the cross-references the page relies on: every project category has a
//! filter button, an `all` button exists, and nav entries point at sections
//! the page actually renders.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::collections::HashSet;

use serde::Deserialize;

use crate::state::filter::ALL_TAG;

const EMBEDDED_SITE: &str = include_str!("../site.json");

/// Section ids rendered by the page, in document order.
pub const PAGE_SECTIONS: &[&str] = &["home", "about", "skills", "projects", "resume", "contact"];

#[derive(Debug, thiserror::Error)]
pub enum SiteConfigError {
    #[error("invalid site config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("filters must include an `all` button")]
    MissingAllFilter,
    #[error("project `{project}` uses category `{category}` with no filter button")]
    UnknownCategory { project: String, category: String },
    #[error("nav section `{0}` is not rendered by the page")]
    UnknownSection(String),
    #[error("nav section `{0}` listed twice")]
    DuplicateSection(String),
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SiteConfig {
    pub owner: String,
    pub hero_title: String,
    pub tagline: String,
    pub about: Vec<String>,
    pub sections: Vec<NavSection>,
    pub filters: Vec<FilterButton>,
    pub projects: Vec<Project>,
    pub skills: Vec<SkillCategory>,
    pub resume: ResumeConfig,
    pub contact_items: Vec<ContactItem>,
    /// Delivery endpoint for the contact form; absent means simulated sends.
    pub contact_endpoint: Option<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct NavSection {
    pub id: String,
    pub label: String,
}

impl NavSection {
    pub fn href(&self) -> String {
        format!("#{}", self.id)
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct FilterButton {
    pub tag: String,
    pub label: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct SkillCategory {
    pub name: String,
    pub items: Vec<String>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ResumeConfig {
    /// Static file offered for download.
    pub asset: String,
    /// Filename the browser saves the asset under.
    pub filename: String,
    pub items: Vec<ResumeItem>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct ResumeItem {
    pub title: String,
    pub organization: String,
    pub period: String,
    pub summary: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct ContactItem {
    pub icon: String,
    pub label: String,
    pub value: String,
    #[serde(default)]
    pub href: Option<String>,
}

impl SiteConfig {
    /// The site shipped with the binary.
    ///
    /// # Errors
    ///
    /// Returns a `SiteConfigError` if the embedded file is malformed.
    pub fn embedded() -> Result<Self, SiteConfigError> {
        Self::from_json(EMBEDDED_SITE)
    }

    /// Parse and validate a site description.
    ///
    /// # Errors
    ///
    /// Returns a `SiteConfigError` on malformed JSON or broken references.
    pub fn from_json(raw: &str) -> Result<Self, SiteConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), SiteConfigError> {
        if !self.filters.iter().any(|f| f.tag == ALL_TAG) {
            return Err(SiteConfigError::MissingAllFilter);
        }
        let tags: HashSet<&str> = self.filters.iter().map(|f| f.tag.as_str()).collect();
        if let Some(project) = self.projects.iter().find(|p| !tags.contains(p.category.as_str())) {
            return Err(SiteConfigError::UnknownCategory {
                project: project.title.clone(),
                category: project.category.clone(),
            });
        }
        let mut seen = HashSet::new();
        for section in &self.sections {
            if !PAGE_SECTIONS.contains(&section.id.as_str()) {
                return Err(SiteConfigError::UnknownSection(section.id.clone()));
            }
            if !seen.insert(section.id.as_str()) {
                return Err(SiteConfigError::DuplicateSection(section.id.clone()));
            }
        }
        Ok(())
    }
}
