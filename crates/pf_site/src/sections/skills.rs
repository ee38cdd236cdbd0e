use leptos::prelude::*;

use pf_content::content;

use crate::section::Section;

#[component]
pub fn Skills() -> impl IntoView {
    let groups = content::skill_groups();
    let spoken = content::spoken_languages();

    view! {
        <section id=Section::Skills.id() class="section">
            <div class="section-inner">
                <div class="section-header">
                    <h2>"Technical Skills"</h2>
                    <div class="rule"></div>
                </div>

                <div class="skills-grid">
                    {groups
                        .into_iter()
                        .map(|group| {
                            view! {
                                <div class="card">
                                    <h3>{group.name}</h3>
                                    <div class="tag-row">
                                        {group
                                            .items
                                            .into_iter()
                                            .map(|item| view! { <span class="tag">{item}</span> })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="card spoken-languages">
                    <h3>"Languages"</h3>
                    <div class="spoken-grid">
                        {spoken
                            .into_iter()
                            .map(|language| {
                                view! {
                                    <div>
                                        <p class="spoken-name">{language.name}</p>
                                        <p class="spoken-level">{language.proficiency}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
