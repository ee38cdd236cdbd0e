use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlAnchorElement;

use pf_content::content;

use crate::section::{self, Section};

/// Nav bar links, in order. Contact is linked but never tracked, so
/// its link never highlights.
const NAV_LINKS: [Section; 4] = [
    Section::About,
    Section::Experience,
    Section::Projects,
    Section::Contact,
];

#[component]
pub fn NavBar(active: RwSignal<Section>) -> impl IntoView {
    let menu_open = RwSignal::new(false);

    // Navigating from either menu closes the mobile one.
    let navigate = move |target: Section| {
        section::scroll_to(target);
        menu_open.set(false);
    };

    view! {
        <nav class="topbar">
            <div class="topbar-inner">
                <div class="monogram">
                    <span>"E"</span>
                </div>

                <div class="nav-links">
                    {NAV_LINKS
                        .into_iter()
                        .map(|link| {
                            view! {
                                <button
                                    class="nav-link"
                                    class:active=move || active.get() == link
                                    on:click=move |_| navigate(link)
                                >
                                    {link.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                    <button class="button" on:click=move |_| download_resume()>
                        "Resume"
                    </button>
                </div>

                <button
                    class="menu-toggle"
                    aria-label="Toggle menu"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>

            <Show when=move || menu_open.get()>
                <div class="mobile-menu">
                    {NAV_LINKS
                        .into_iter()
                        .map(|link| {
                            view! {
                                <button class="mobile-link" on:click=move |_| navigate(link)>
                                    {link.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                    <button
                        class="mobile-link"
                        on:click=move |_| {
                            download_resume();
                            menu_open.set(false);
                        }
                    >
                        "Resume"
                    </button>
                </div>
            </Show>
        </nav>
    }
}

/// Offer the resume asset as a download by clicking a synthetic
/// anchor. The requested path and suggested filename are fixed.
pub fn download_resume() {
    let resume = content::profile().resume;

    let document = document();

    let Ok(element) = document.create_element("a") else {
        return;
    };
    let Ok(anchor) = element.dyn_into::<HtmlAnchorElement>() else {
        return;
    };

    anchor.set_href(&resume.path);
    anchor.set_download(&resume.filename);

    let Some(body) = document.body() else {
        return;
    };

    if body.append_child(&anchor).is_ok() {
        anchor.click();
        anchor.remove();
    }
}

#[cfg(test)]
mod tests {
    use crate::nav::NAV_LINKS;
    use crate::section::Section;

    #[test]
    fn nav_links_follow_page_order() {
        assert_eq!(
            NAV_LINKS,
            [
                Section::About,
                Section::Experience,
                Section::Projects,
                Section::Contact,
            ]
        );
    }
}
