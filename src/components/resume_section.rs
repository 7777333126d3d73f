//! Resume timeline and download button.

use leptos::prelude::*;

use crate::components::toast_host::notify;
use crate::config::ResumeConfig;
use crate::state::toast::{ToastKind, ToastStack};
use crate::util::dom;

pub const DOWNLOAD_NOTICE: &str = "Resume downloaded successfully!";

#[component]
pub fn ResumeSection(resume: ResumeConfig) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastStack>>();
    let ResumeConfig { asset, filename, items } = resume;

    // No check that the asset exists; the browser reports a missing file.
    let on_download = move |_| {
        dom::trigger_download(&asset, &filename);
        notify(toasts, DOWNLOAD_NOTICE, ToastKind::Success);
    };

    let timeline = items
        .into_iter()
        .map(|item| {
            view! {
                <div class="resume-item">
                    <h3>{item.title}</h3>
                    <h4>{item.organization}</h4>
                    <span class="resume-date">{item.period}</span>
                    <p>{item.summary}</p>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id="resume" class="resume-section">
            <div class="container">
                <h2 class="section-title">"Resume"</h2>
                <div class="resume-timeline">{timeline}</div>
                <button id="download-resume" type="button" class="btn btn-primary" on:click=on_download>
                    <i class="fas fa-download"></i>
                    " Download Resume"
                </button>
            </div>
        </section>
    }
}
