use leptos::prelude::*;

use pf_content::content;

/// Social links pinned to the left edge on large screens.
#[component]
pub fn SocialRail() -> impl IntoView {
    let contact = content::profile().contact;
    let mailto = contact.mailto();

    view! {
        <div class="social-rail">
            <a
                href=contact.github_url
                target="_blank"
                rel="noopener noreferrer"
                aria-label="GitHub"
            >
                <i class="fab fa-github"></i>
            </a>
            <a
                href=contact.linkedin_url
                target="_blank"
                rel="noopener noreferrer"
                aria-label="LinkedIn"
            >
                <i class="fab fa-linkedin-in"></i>
            </a>
            <a href=mailto aria-label="Email">
                <i class="fas fa-envelope"></i>
            </a>
        </div>
    }
}

/// Vertical mailto link pinned to the right edge on large screens.
#[component]
pub fn EmailRail() -> impl IntoView {
    let contact = content::profile().contact;
    let mailto = contact.mailto();

    view! {
        <div class="email-rail">
            <a href=mailto>{contact.email}</a>
        </div>
    }
}
