use leptos::prelude::*;

use pf_content::content;

use crate::section::Section;

#[component]
pub fn About() -> impl IntoView {
    let profile = content::profile();
    let education = content::education();

    view! {
        <section id=Section::About.id() class="section">
            <div class="section-inner">
                <div class="section-header">
                    <h2>"About Me"</h2>
                    <div class="rule"></div>
                </div>

                <div class="about-grid">
                    <div class="about-text">
                        {profile
                            .about
                            .into_iter()
                            .map(|paragraph| view! { <p>{paragraph}</p> })
                            .collect_view()}
                        <p class="about-lead">
                            "Here are a few technologies I've been working with recently:"
                        </p>
                        <ul class="tech-grid">
                            {profile
                                .recent_technologies
                                .into_iter()
                                .map(|tech| {
                                    view! {
                                        <li>
                                            <span class="marker">"▹"</span>
                                            {tech}
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>

                    <div class="card education-card">
                        <h3>"Education"</h3>
                        <p class="education-program">{education.program}</p>
                        <p class="education-school">{education.school}</p>
                        <p class="education-period">{education.period}</p>
                        <div class="education-certifications">
                            <p>"Certifications"</p>
                            <ul>
                                {education
                                    .certifications
                                    .into_iter()
                                    .map(|certification| view! { <li>{certification}</li> })
                                    .collect_view()}
                            </ul>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
