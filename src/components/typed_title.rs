//! Hero heading revealed one character at a time.
//!
//! The run starts once on mount and is cancelled if the heading unmounts
//! mid-way, so no timer writes into a discarded signal.

use leptos::prelude::*;

#[component]
pub fn TypedTitle(text: String) -> impl IntoView {
    #[cfg(feature = "csr")]
    let shown = {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        use gloo_timers::future::TimeoutFuture;

        use crate::state::typing::{TYPE_DELAY_MS, Typewriter};

        let shown = RwSignal::new(String::new());
        let alive = Arc::new(AtomicBool::new(true));
        let alive_task = Arc::clone(&alive);
        leptos::task::spawn_local(async move {
            let mut typewriter = Typewriter::new(&text);
            loop {
                if !alive_task.load(Ordering::Relaxed) {
                    typewriter.cancel();
                }
                let Some(prefix) = typewriter.tick() else {
                    break;
                };
                shown.set(prefix);
                TimeoutFuture::new(TYPE_DELAY_MS).await;
            }
            log::debug!("typing effect finished: {:?}", typewriter.status());
        });
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
        shown
    };
    #[cfg(not(feature = "csr"))]
    let shown = RwSignal::new(text);

    view! { <h1 class="home-title">{move || shown.get()}</h1> }
}
