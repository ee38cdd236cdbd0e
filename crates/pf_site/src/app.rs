use leptos::ev;
use leptos::prelude::*;
use tracing::debug;

use crate::nav::NavBar;
use crate::scroll_spy;
use crate::section::Section;
use crate::sections::{About, Contact, Experience, Hero, Projects, Skills};
use crate::social::{EmailRail, SocialRail};

#[component]
pub fn App() -> impl IntoView {
    let active = RwSignal::new(Section::Home);

    // Re-evaluated on every scroll tick. Between regions the previous
    // active section is kept.
    let listener = window_event_listener(ev::scroll, move |_| {
        if let Some(next) = scroll_spy::scan() {
            if next != active.get_untracked() {
                debug!(section = next.id(), "active section changed");
                active.set(next);
            }
        }
    });
    on_cleanup(move || listener.remove());

    view! {
        <NavBar active=active />
        <SocialRail />
        <EmailRail />
        <main>
            <Hero />
            <About />
            <Experience />
            <Projects />
            <Skills />
            <Contact />
        </main>
        <Footer />
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <p>"Designed & Built by Bugingo Elua"</p>
        </footer>
    }
}
