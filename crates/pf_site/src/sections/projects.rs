use leptos::prelude::*;

use pf_content::content;

use crate::section::Section;

#[component]
pub fn Projects() -> impl IntoView {
    let projects = content::projects();
    let contact = content::profile().contact;

    view! {
        <section id=Section::Projects.id() class="section">
            <div class="section-inner">
                <div class="section-header">
                    <h2>"Key Projects"</h2>
                    <div class="rule"></div>
                </div>

                <div class="card-stack">
                    {projects
                        .into_iter()
                        .map(|project| {
                            view! {
                                <div class="card">
                                    <div class="card-heading">
                                        <h3>{project.name}</h3>
                                        <i class="fas fa-arrow-up-right-from-square card-icon"></i>
                                    </div>
                                    <p class="card-body">{project.description}</p>
                                    <div class="tag-row">
                                        {project
                                            .tags
                                            .into_iter()
                                            .map(|tag| view! { <span class="tag">{tag}</span> })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}

                    <div class="card card-slim">
                        <h3>"Check All Personal Projects"</h3>
                        <a
                            href=contact.projects_url
                            target="_blank"
                            rel="noopener noreferrer"
                            class="view-all"
                        >
                            "View all projects"
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}
