//! Notification stack rendering and the `notify` entry point.
//!
//! SYSTEM CONTEXT
//! ==============
//! Any component holding the `RwSignal<ToastStack>` context can raise a toast.
//! Lifecycle timers address the toast by id, so clicking a toast away early
//! leaves its pending timers with nothing to touch.

use leptos::prelude::*;

use crate::state::toast::{ToastKind, ToastPhase, ToastStack};

/// Show a toast and schedule its slide-in, slide-out and removal.
pub fn notify(toasts: RwSignal<ToastStack>, message: impl Into<String>, kind: ToastKind) {
    let Some(id) = toasts.try_update(|stack| stack.push(message, kind)) else {
        return;
    };

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        use gloo_timers::future::TimeoutFuture;

        let mut elapsed = 0;
        for (at_ms, phase) in ToastPhase::lifecycle() {
            TimeoutFuture::new(at_ms.saturating_sub(elapsed)).await;
            elapsed = at_ms;
            if !toasts.try_update(|stack| stack.settle(id, phase)).unwrap_or(false) {
                return;
            }
        }
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
    }
}

/// Fixed-position host rendering every live toast in its stack slot.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastStack>>();

    view! {
        <div class="notification-host">
            <For
                each=move || toasts.with(|stack| stack.toasts().iter().map(|t| (t.id, t.kind, t.message.clone())).collect::<Vec<_>>())
                key=|(id, _, _)| *id
                children=move |(id, kind, message)| {
                    let phase = move || toasts.with(|stack| stack.get(id).map_or(ToastPhase::Leaving, |t| t.phase));
                    let top = move || toasts.with(|stack| stack.top_px(id)).map(|px| format!("{px}px")).unwrap_or_default();
                    view! {
                        <div
                            class=format!("notification notification-{}", kind.as_str())
                            role="status"
                            style:top=top
                            style:background=kind.color()
                            style:transform=move || phase().transform()
                            on:click=move |_| {
                                toasts.maybe_update(|stack| stack.dismiss(id));
                            }
                        >
                            <div class="notification-content">
                                <i class=kind.icon_class()></i>
                                <span>{message}</span>
                            </div>
                        </div>
                    }
                }
            />
        </div>
    }
}
