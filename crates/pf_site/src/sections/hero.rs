use leptos::prelude::*;

use pf_content::content;

use crate::section::{self, Section};

#[component]
pub fn Hero() -> impl IntoView {
    let profile = content::profile();

    view! {
        <section id=Section::Home.id() class="hero">
            <div class="hero-inner">
                <div class="hero-text">
                    <p class="hero-greeting">"Hi, my name is"</p>
                    <h1>{profile.name}"."</h1>
                    <p class="hero-tagline">{profile.tagline}</p>
                    <p class="hero-intro">{profile.intro}</p>
                    <button
                        class="button large"
                        on:click=move |_| section::scroll_to(Section::Contact)
                    >
                        "Talk to me"
                    </button>
                </div>
                <div class="hero-portrait">
                    <div class="portrait-backdrop"></div>
                    <div class="portrait-frame">
                        <span class="portrait-monogram">"E"</span>
                        <span class="portrait-caption">{profile.headline}</span>
                    </div>
                </div>
            </div>
        </section>
    }
}
