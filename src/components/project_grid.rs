//! Filter buttons and the project card grid.
//!
//! Cards render without inline `display`/`animation` until the first filter
//! click; an empty style value leaves the property unset so the reveal and
//! load-stagger classes stay in control.

use leptos::prelude::*;

use crate::config::{FilterButton, Project};
use crate::state::filter::{CardDisplay, FilterState};

#[component]
pub fn ProjectGrid(filters: Vec<FilterButton>, projects: Vec<Project>) -> impl IntoView {
    let filter = RwSignal::new(FilterState::default());

    let buttons = filters
        .into_iter()
        .map(|button| {
            let tag_active = button.tag.clone();
            let tag_click = button.tag.clone();
            view! {
                <button
                    type="button"
                    class="filter-btn"
                    class:active=move || filter.with(|f| f.is_active(&tag_active))
                    data-filter=button.tag
                    on:click=move |_| filter.update(|f| f.select(&tag_click))
                >
                    {button.label}
                </button>
            }
        })
        .collect_view();

    let categories: Vec<String> = projects.iter().map(|p| p.category.clone()).collect();
    let displays = Memo::new(move |_| filter.with(|f| f.card_displays(categories.iter().map(String::as_str))));

    let cards = projects
        .into_iter()
        .enumerate()
        .map(|(index, project)| {
            let display = move || displays.with(|d| d.as_ref().and_then(|all| all.get(index).copied()));
            let tags = project
                .tags
                .into_iter()
                .map(|tag| view! { <span class="project-tag">{tag}</span> })
                .collect_view();
            view! {
                <div
                    class="project-card"
                    data-category=project.category
                    style:display=move || display().map_or("", CardDisplay::display)
                    style:animation=move || display().and_then(CardDisplay::animation).unwrap_or_default()
                >
                    <div class="project-content">
                        <h3 class="project-title">{project.title}</h3>
                        <p class="project-description">{project.description}</p>
                        <div class="project-tags">{tags}</div>
                        {project.link.map(|href| view! {
                            <a href=href class="project-link" target="_blank" rel="noopener">
                                <i class="fas fa-external-link-alt"></i>
                                " View Project"
                            </a>
                        })}
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id="projects" class="projects-section">
            <div class="container">
                <h2 class="section-title">"Projects"</h2>
                <div class="project-filters">{buttons}</div>
                <div class="projects-grid">{cards}</div>
            </div>
        </section>
    }
}
