use leptos::prelude::*;

use pf_content::content;

use crate::section::Section;

#[component]
pub fn Contact() -> impl IntoView {
    let contact = content::profile().contact;
    let mailto = contact.mailto();
    let tel = contact.tel();
    let say_hello = contact.mailto();

    view! {
        <section id=Section::Contact.id() class="section contact">
            <div class="contact-inner">
                <p class="contact-eyebrow">"What's Next?"</p>
                <h2>"Get In Touch"</h2>
                <p class="contact-blurb">
                    "I'm currently open to new opportunities and interesting projects. \
                     Whether you have a question, want to collaborate, or just want to \
                     say hi, feel free to reach out. I'll do my best to get back to you!"
                </p>

                <div class="contact-links">
                    <a href=mailto>
                        <i class="fas fa-envelope"></i>
                        <span>{contact.email}</span>
                    </a>
                    <a href=tel>
                        <i class="fas fa-phone"></i>
                        <span>{contact.phone}</span>
                    </a>
                </div>

                <p class="contact-location">
                    <i class="fas fa-location-dot"></i>
                    <span>{contact.location}</span>
                </p>

                <a class="button large" href=say_hello>
                    "Say Hello"
                </a>
            </div>
        </section>
    }
}
