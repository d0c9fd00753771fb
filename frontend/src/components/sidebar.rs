use leptos::prelude::*;

use crate::models::{Project, Resume, skill_question};
use crate::state::{AppState, Tab};

/// Profile column: who this is, plus skills and projects that can be asked
/// about directly.
#[component]
pub fn Sidebar() -> impl IntoView {
    let state = expect_context::<AppState>();

    view! {
        <aside class="sidebar" class:active=move || state.active_tab.get() == Tab::Profile>
            {move || match state.resume.get() {
                Some(resume) => view! { <Profile resume=resume /> }.into_any(),
                None => view! { <div class="loading">"Loading…"</div> }.into_any(),
            }}
            <button class="open-chat-btn" on:click=move |_| state.open_chat()>
                "Chat with me"
            </button>
        </aside>
    }
}

#[component]
fn Profile(resume: Resume) -> impl IntoView {
    let state = expect_context::<AppState>();
    let Resume {
        personal,
        education,
        skills,
        projects,
    } = resume;

    view! {
        <div class="sidebar-header">
            <h2>{personal.name}</h2>
            <p class="title">{personal.title}</p>
            {(!personal.objective.is_empty())
                .then(|| view! { <p class="objective">{personal.objective}</p> })}
        </div>
        <section class="education">
            <h3>"Education"</h3>
            {education
                .into_iter()
                .map(|entry| {
                    let question = entry.question();
                    view! {
                        <div class="education-entry">
                            <p>{entry.summary()}</p>
                            <button on:click=move |_| state.ask(question.clone())>
                                "Ask about this"
                            </button>
                        </div>
                    }
                })
                .collect_view()}
        </section>
        <section class="skills">
            <h3>"Skills"</h3>
            {skills
                .technical
                .into_iter()
                .map(|skill| {
                    let question = skill_question(&skill);
                    view! {
                        <button class="skill-chip" on:click=move |_| state.ask(question.clone())>
                            {skill}
                        </button>
                    }
                })
                .collect_view()}
            <ul class="soft-skills">
                {skills
                    .soft
                    .into_iter()
                    .map(|skill| view! { <li>{skill}</li> })
                    .collect_view()}
            </ul>
        </section>
        <section class="projects">
            <h3>"Projects"</h3>
            {projects
                .into_iter()
                .map(|project| view! { <ProjectCard project=project /> })
                .collect_view()}
        </section>
    }
}

/// One project with its technology chips; each chip asks how it was used.
#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let state = expect_context::<AppState>();
    let question = project.question();
    let chips = project
        .technologies
        .iter()
        .map(|tech| {
            let ask = project.technology_question(tech);
            view! {
                <button class="tech-chip" on:click=move |_| state.ask(ask.clone())>
                    {tech.clone()}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="project-card">
            <h4>{project.title}</h4>
            <div class="tech-chips">{chips}</div>
            <p>{project.description}</p>
            <button on:click=move |_| state.ask(question.clone())>
                "Ask about this project"
            </button>
        </div>
    }
}
