//! Static about and skills sections.

use leptos::prelude::*;

use crate::config::SkillCategory;

#[component]
pub fn AboutSection(paragraphs: Vec<String>) -> impl IntoView {
    view! {
        <section id="about" class="about-section">
            <div class="container">
                <h2 class="section-title">"About Me"</h2>
                <div class="about-text">
                    {paragraphs.into_iter().map(|p| view! { <p>{p}</p> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn SkillsSection(skills: Vec<SkillCategory>) -> impl IntoView {
    let categories = skills
        .into_iter()
        .map(|category| {
            view! {
                <div class="skill-category">
                    <h3>{category.name}</h3>
                    <ul class="skill-list">
                        {category.items.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}
                    </ul>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id="skills" class="skills-section">
            <div class="container">
                <h2 class="section-title">"Skills"</h2>
                <div class="skills-grid">{categories}</div>
            </div>
        </section>
    }
}
