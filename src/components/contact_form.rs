//! Contact section: contact details plus the message form.
//!
//! ERROR HANDLING
//! ==============
//! Send failures never escape the handler. The machine turns the result into
//! a toast and always hands the submit button back.

#[cfg(test)]
#[path = "contact_form_test.rs"]
mod contact_form_test;

use leptos::prelude::*;

use crate::components::toast_host::notify;
use crate::config::ContactItem;
use crate::net::contact::ContactTransport;
use crate::state::contact::{ContactFormMachine, ContactMessage, SubmitPhase};
use crate::state::toast::ToastStack;

/// Drive one submission from `begin` through `finish`.
pub async fn submit(
    fields: RwSignal<ContactMessage>,
    machine: RwSignal<ContactFormMachine>,
    toasts: RwSignal<ToastStack>,
    transport: ContactTransport,
) {
    let snapshot = fields.get_untracked();
    let Some(payload) = machine.try_update(|m| m.begin(&snapshot)).flatten() else {
        return;
    };
    let result = transport.send(&payload).await;
    let Some(outcome) = machine.try_update(|m| m.finish(&result)) else {
        return;
    };
    if outcome.clear_fields {
        fields.update(ContactMessage::clear);
    }
    notify(toasts, outcome.notice, outcome.kind);
}

#[component]
pub fn ContactSection(items: Vec<ContactItem>, transport: ContactTransport) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastStack>>();
    let fields = RwSignal::new(ContactMessage::default());
    let machine = RwSignal::new(ContactFormMachine::default());
    let transport = StoredValue::new(transport);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(submit(fields, machine, toasts, transport.get_value()));
        #[cfg(not(feature = "csr"))]
        {
            let _ = (fields, machine, toasts, transport);
        }
    };

    let sending = move || machine.with(|m| m.phase() == SubmitPhase::Submitting);

    let details = items
        .into_iter()
        .map(|item| {
            let value = match item.href {
                Some(href) => view! { <a href=href>{item.value}</a> }.into_any(),
                None => view! { <span>{item.value}</span> }.into_any(),
            };
            view! {
                <div class="contact-item">
                    <i class=item.icon></i>
                    <div>
                        <h4>{item.label}</h4>
                        {value}
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id="contact" class="contact-section">
            <div class="container">
                <h2 class="section-title">"Get In Touch"</h2>
                <div class="contact-content">
                    <div class="contact-info">{details}</div>
                    <form id="contact-form" class="contact-form" on:submit=on_submit>
                        <div class="form-group">
                            <input
                                type="text"
                                name="name"
                                placeholder="Your Name"
                                required=true
                                prop:value=move || fields.with(|f| f.name.clone())
                                on:input=move |ev| fields.update(|f| f.name = event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <input
                                type="email"
                                name="email"
                                placeholder="Your Email"
                                required=true
                                prop:value=move || fields.with(|f| f.email.clone())
                                on:input=move |ev| fields.update(|f| f.email = event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <input
                                type="text"
                                name="subject"
                                placeholder="Subject"
                                required=true
                                prop:value=move || fields.with(|f| f.subject.clone())
                                on:input=move |ev| fields.update(|f| f.subject = event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <textarea
                                name="message"
                                rows="5"
                                placeholder="Your Message"
                                required=true
                                prop:value=move || fields.with(|f| f.message.clone())
                                on:input=move |ev| fields.update(|f| f.message = event_target_value(&ev))
                            ></textarea>
                        </div>
                        <button type="submit" class="btn btn-primary" disabled=move || machine.with(|m| m.button().disabled)>
                            <Show when=sending>
                                <i class="fas fa-spinner fa-spin"></i>
                                " "
                            </Show>
                            {move || machine.with(|m| m.button().label.clone())}
                        </button>
                    </form>
                </div>
            </div>
        </section>
    }
}
