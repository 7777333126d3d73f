//! Light/dark toggle button in the navbar.

use leptos::prelude::*;

use crate::util::dark_mode::PageTheme;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<RwSignal<PageTheme>>();

    view! {
        <button
            id="theme-toggle"
            class="theme-toggle"
            type="button"
            title="Toggle theme"
            on:click=move |_| {
                theme.update(|controller| {
                    controller.toggle();
                });
            }
        >
            <i class=move || theme.with(|controller| controller.current().icon_class())></i>
        </button>
    }
}
