//! Home section with the typed heading and parallax drift.

use leptos::prelude::*;

use crate::components::typed_title::TypedTitle;
use crate::state::scroll::ScrollState;
use crate::util::dom;

#[component]
pub fn Hero(title: String, tagline: String) -> impl IntoView {
    let scroll = expect_context::<RwSignal<ScrollState>>();

    let jump = |href: &'static str| {
        move |ev: leptos::ev::MouseEvent| {
            ev.prevent_default();
            dom::scroll_to_anchor(href);
        }
    };

    view! {
        <section id="home" class="home-section" style:transform=move || scroll.get().parallax_transform()>
            <div class="home-content">
                <TypedTitle text=title/>
                <p class="home-subtitle">{tagline}</p>
                <div class="home-buttons">
                    <a href="#projects" class="btn btn-primary" on:click=jump("#projects")>
                        "View My Work"
                    </a>
                    <a href="#contact" class="btn btn-secondary" on:click=jump("#contact")>
                        "Get In Touch"
                    </a>
                </div>
            </div>
        </section>
    }
}
