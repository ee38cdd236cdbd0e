use leptos::prelude::*;

use pf_content::content;

use crate::section::Section;

#[component]
pub fn Experience() -> impl IntoView {
    let jobs = content::experience();

    view! {
        <section id=Section::Experience.id() class="section">
            <div class="section-inner">
                <div class="section-header">
                    <h2>"Experience"</h2>
                    <div class="rule"></div>
                </div>

                <div class="card-stack">
                    {jobs
                        .into_iter()
                        .map(|job| {
                            view! {
                                <div class="card">
                                    <div class="card-heading">
                                        <div>
                                            <h3>{job.title}</h3>
                                            <p class="card-org">{job.organization}</p>
                                        </div>
                                        <p class="card-period">{job.period}</p>
                                    </div>
                                    <ul class="card-bullets">
                                        {job
                                            .bullets
                                            .into_iter()
                                            .map(|bullet| {
                                                view! {
                                                    <li>
                                                        <span class="marker">"▹"</span>
                                                        {bullet}
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
