//! Root application component with shared state providers.

use leptos::prelude::*;
use leptos_meta::{Style, Title, provide_meta_context};

use crate::config::SiteConfig;
use crate::pages::home::HomePage;
use crate::state::nav::NavState;
use crate::state::scroll::ScrollState;
use crate::state::toast::ToastStack;
use crate::util::dark_mode::page_theme;

/// Rules for state classes toggled at runtime; the main stylesheet covers
/// everything else.
const RUNTIME_STYLES: &str = r"
    .nav-link.active { color: var(--primary-color); }
    .nav-link.active::after { width: 100%; }
    .hamburger.active .bar:nth-child(2) { opacity: 0; }
    .hamburger.active .bar:nth-child(1) { transform: translateY(7px) rotate(45deg); }
    .hamburger.active .bar:nth-child(3) { transform: translateY(-7px) rotate(-45deg); }
    .notification {
        position: fixed;
        right: 20px;
        color: white;
        padding: 1rem 1.5rem;
        border-radius: 0.5rem;
        box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
        z-index: 10000;
        cursor: pointer;
        transition: transform 0.3s ease, top 0.3s ease;
    }
";

/// Root application component.
///
/// Loads the embedded site description and provides the theme, navigation,
/// scroll and notification contexts to every section.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let theme = RwSignal::new(page_theme());
    let nav = RwSignal::new(NavState::default());
    let scroll = RwSignal::new(ScrollState::default());
    let toasts = RwSignal::new(ToastStack::default());

    provide_context(theme);
    provide_context(nav);
    provide_context(scroll);
    provide_context(toasts);

    match SiteConfig::embedded() {
        Ok(site) => {
            log::info!("portfolio loaded: {} projects", site.projects.len());
            let title = site.owner.clone();
            view! {
                <Title text=title/>
                <Style>{RUNTIME_STYLES}</Style>
                <HomePage site=site/>
            }
            .into_any()
        }
        Err(e) => {
            log::error!("site config rejected: {e}");
            view! { <p class="site-error">{e.to_string()}</p> }.into_any()
        }
    }
}
