use leptos::prelude::document;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

/// The vertically stacked regions of the page. Rendering and scroll
/// tracking both take their DOM ids from here, so the two cannot
/// drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    About,
    Experience,
    Projects,
    Skills,
    Contact,
}

impl Section {
    /// Regions the scroll tracker scans, in page order. Contact is
    /// navigable but not tracked.
    pub const TRACKED: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Experience,
        Section::Projects,
        Section::Skills,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Experience => "experience",
            Section::Projects => "projects",
            Section::Skills => "skills",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Experience => "Experience",
            Section::Projects => "Projects",
            Section::Skills => "Skills",
            Section::Contact => "Contact",
        }
    }
}

/// Smooth-scroll a section's region into view. A region that is not
/// in the document is a no-op.
pub fn scroll_to(section: Section) {
    let Some(element) = document().get_element_by_id(section.id()) else {
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);

    element.scroll_into_view_with_scroll_into_view_options(&options);
}

#[cfg(test)]
mod tests {
    use crate::section::Section;

    #[test]
    fn tracked_regions_are_in_page_order() {
        let ids: Vec<&str> = Section::TRACKED.iter().map(|s| s.id()).collect();

        assert_eq!(ids, ["home", "about", "experience", "projects", "skills"]);
    }

    #[test]
    fn region_ids_are_unique() {
        let all = [
            Section::Home,
            Section::About,
            Section::Experience,
            Section::Projects,
            Section::Skills,
            Section::Contact,
        ];

        let ids: std::collections::HashSet<&str> = all.iter().map(|s| s.id()).collect();

        assert_eq!(ids.len(), all.len());
    }
}
