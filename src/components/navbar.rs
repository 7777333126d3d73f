//! Fixed navbar: section links, theme toggle, and the mobile hamburger menu.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the window-level listeners. Every scroll event refreshes
//! `ScrollState` (navbar background and home parallax read it); a debounced
//! pass re-measures sections and moves the active link. Escape anywhere on
//! the page closes the mobile menu.

use leptos::prelude::*;

use crate::components::theme_toggle::ThemeToggle;
use crate::config::NavSection;
use crate::state::nav::NavState;
use crate::state::scroll::ScrollState;
use crate::util::dark_mode::PageTheme;
use crate::util::dom;

#[cfg(feature = "csr")]
fn install_window_listeners(nav: RwSignal<NavState>, scroll: RwSignal<ScrollState>) {
    use gloo_timers::future::TimeoutFuture;

    use crate::state::nav::ACTIVE_LINK_DEBOUNCE_MS;
    use crate::state::scroll::Debouncer;

    let debounce = StoredValue::new(Debouncer::default());

    let _scroll_listener = window_event_listener(leptos::ev::scroll, move |_| {
        scroll.set(ScrollState { y: dom::scroll_y() });

        let mut ticket = 0;
        debounce.update_value(|d| ticket = d.schedule());
        leptos::task::spawn_local(async move {
            TimeoutFuture::new(ACTIVE_LINK_DEBOUNCE_MS).await;
            if !debounce.with_value(|d| d.is_current(ticket)) {
                return;
            }
            let sections = dom::section_bounds();
            let y = dom::scroll_y();
            nav.maybe_update(|n| n.highlight(y, &sections));
        });
    });

    let _key_listener = window_event_listener(leptos::ev::keydown, move |ev| {
        nav.maybe_update(|n| n.handle_key(&ev.key()));
    });
}

#[component]
pub fn Navbar(owner: String, sections: Vec<NavSection>) -> impl IntoView {
    let nav = expect_context::<RwSignal<NavState>>();
    let scroll = expect_context::<RwSignal<ScrollState>>();
    let theme = expect_context::<RwSignal<PageTheme>>();

    #[cfg(feature = "csr")]
    install_window_listeners(nav, scroll);

    let menu_open = move || nav.with(|n| n.menu_open);
    let background = move || {
        let current = theme.with(|t| t.current());
        scroll.get().navbar_background(current)
    };

    let links = sections
        .into_iter()
        .map(|section| {
            let href = section.href();
            let href_active = href.clone();
            let href_click = href.clone();
            view! {
                <li class="nav-item">
                    <a
                        href=href
                        class="nav-link"
                        class:active=move || nav.with(|n| n.is_link_active(&href_active))
                        on:click=move |ev| {
                            ev.prevent_default();
                            nav.update(|n| {
                                n.follow_link(&href_click);
                            });
                            dom::scroll_to_anchor(&href_click);
                        }
                    >
                        {section.label}
                    </a>
                </li>
            }
        })
        .collect_view();

    view! {
        <nav id="navbar" class="navbar" style:background=background>
            <div class="nav-container">
                <a
                    href="#home"
                    class="nav-logo"
                    on:click=move |ev| {
                        ev.prevent_default();
                        dom::scroll_to_anchor("#home");
                    }
                >
                    {owner}
                </a>
                <ul id="nav-menu" class="nav-menu" class:active=menu_open>
                    {links}
                </ul>
                <div class="nav-actions">
                    <ThemeToggle/>
                    <div
                        id="hamburger"
                        class="hamburger"
                        class:active=menu_open
                        role="button"
                        aria-label="Toggle navigation"
                        on:click=move |_| nav.update(NavState::toggle_menu)
                    >
                        <span class="bar"></span>
                        <span class="bar"></span>
                        <span class="bar"></span>
                    </div>
                </div>
            </div>
        </nav>
    }
}
