//! The single portfolio page.
//!
//! ARCHITECTURE
//! ============
//! Sections are independent; each binds its own events. After the first
//! render the page registers the reveal observer and the load stagger, both of
//! which scan the mounted DOM once.

use leptos::prelude::*;

use crate::components::contact_form::ContactSection;
use crate::components::hero::Hero;
use crate::components::navbar::Navbar;
use crate::components::profile::{AboutSection, SkillsSection};
use crate::components::project_grid::ProjectGrid;
use crate::components::resume_section::ResumeSection;
use crate::components::toast_host::ToastHost;
use crate::config::SiteConfig;
use crate::net::contact::ContactTransport;

#[component]
pub fn HomePage(site: SiteConfig) -> impl IntoView {
    let transport = ContactTransport::from_config(&site);
    let SiteConfig {
        owner,
        hero_title,
        tagline,
        about,
        sections,
        filters,
        projects,
        skills,
        resume,
        contact_items,
        ..
    } = site;

    #[cfg(feature = "csr")]
    Effect::new(move || {
        crate::util::dom::observe_reveal_targets();
        crate::util::dom::stagger_load_animation();
    });

    view! {
        <Navbar owner=owner sections=sections/>
        <main>
            <Hero title=hero_title tagline=tagline/>
            <AboutSection paragraphs=about/>
            <SkillsSection skills=skills/>
            <ProjectGrid filters=filters projects=projects/>
            <ResumeSection resume=resume/>
            <ContactSection items=contact_items transport=transport/>
        </main>
        <ToastHost/>
    }
}
