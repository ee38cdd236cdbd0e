use leptos::prelude::document;

use crate::section::Section;

/// Vertical offset of the probe line from the viewport top, in pixels.
/// A region is "in view" while this line passes through it.
pub const PROBE_OFFSET: f64 = 100.0;

/// A region's vertical extent relative to the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub top: f64,
    pub bottom: f64,
}

impl Span {
    pub fn straddles(self, line: f64) -> bool {
        self.top <= line && self.bottom >= line
    }
}

/// First section whose span straddles the probe line; ties go to the
/// earlier span. None means the previous active section should be
/// kept.
pub fn pick_active(spans: &[(Section, Span)]) -> Option<Section> {
    spans
        .iter()
        .find(|(_, span)| span.straddles(PROBE_OFFSET))
        .map(|(section, _)| *section)
}

/// Measure the tracked regions as rendered. Regions missing from the
/// document are skipped.
fn measure() -> Vec<(Section, Span)> {
    let document = document();

    Section::TRACKED
        .iter()
        .filter_map(|&section| {
            let element = document.get_element_by_id(section.id())?;
            let rect = element.get_bounding_client_rect();

            Some((
                section,
                Span {
                    top: rect.top(),
                    bottom: rect.bottom(),
                },
            ))
        })
        .collect()
}

/// One scroll tick: measure the page and pick the active section.
pub fn scan() -> Option<Section> {
    pick_active(&measure())
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::scroll_spy as sut;
    use crate::scroll_spy::Span;
    use crate::section::Section;

    fn layout(spans: [(f64, f64); 5]) -> Vec<(Section, Span)> {
        Section::TRACKED
            .iter()
            .zip(spans)
            .map(|(&section, (top, bottom))| (section, Span { top, bottom }))
            .collect()
    }

    #[test]
    fn region_under_the_probe_line_is_active() {
        // about spans [50, 800]; everything else is away from the line
        let spans = layout([
            (-900.0, 40.0),
            (50.0, 800.0),
            (800.0, 1600.0),
            (1600.0, 2400.0),
            (2400.0, 3200.0),
        ]);

        assert_eq!(sut::pick_active(&spans), Some(Section::About));
    }

    #[test]
    fn no_region_under_the_probe_line_keeps_the_previous_section() {
        let spans = layout([
            (-2000.0, -1200.0),
            (-1200.0, -400.0),
            (-400.0, 60.0),
            (140.0, 900.0),
            (900.0, 1700.0),
        ]);

        assert_eq!(sut::pick_active(&spans), None);
    }

    #[test]
    fn probe_line_boundaries_count_as_in_view() {
        assert!(Span {
            top: 100.0,
            bottom: 500.0
        }
        .straddles(sut::PROBE_OFFSET));
        assert!(Span {
            top: -300.0,
            bottom: 100.0
        }
        .straddles(sut::PROBE_OFFSET));
        assert!(!Span {
            top: 100.1,
            bottom: 500.0
        }
        .straddles(sut::PROBE_OFFSET));
    }

    #[test]
    fn earlier_region_wins_when_two_straddle_the_line() {
        // overlap mid-transition: home and about both under the line
        let spans = layout([
            (-500.0, 120.0),
            (90.0, 900.0),
            (900.0, 1700.0),
            (1700.0, 2500.0),
            (2500.0, 3300.0),
        ]);

        assert_eq!(sut::pick_active(&spans), Some(Section::Home));
    }

    #[test]
    fn missing_regions_are_skipped() {
        // only two regions rendered so far
        let spans = vec![
            (
                Section::Home,
                Span {
                    top: -600.0,
                    bottom: 20.0,
                },
            ),
            (
                Section::About,
                Span {
                    top: 20.0,
                    bottom: 700.0,
                },
            ),
        ];

        assert_eq!(sut::pick_active(&spans), Some(Section::About));
    }

    proptest! {
        // Whatever the layout, the tracker either keeps the previous
        // section (None) or picks the first tracked region straddling
        // the probe line.
        #[test]
        fn active_is_always_the_first_straddling_tracked_region(
            tops in proptest::array::uniform5(-4000.0f64..4000.0),
            heights in proptest::array::uniform5(0.0f64..2000.0),
        ) {
            let mut spans = [(0.0, 0.0); 5];
            for i in 0..5 {
                spans[i] = (tops[i], tops[i] + heights[i]);
            }
            let spans = layout(spans);

            match sut::pick_active(&spans) {
                Some(active) => {
                    prop_assert!(Section::TRACKED.contains(&active));

                    let first = spans
                        .iter()
                        .find(|(_, span)| span.straddles(sut::PROBE_OFFSET))
                        .map(|(section, _)| *section);
                    prop_assert_eq!(first, Some(active));
                }
                None => {
                    prop_assert!(
                        spans.iter().all(|(_, span)| !span.straddles(sut::PROBE_OFFSET))
                    );
                }
            }
        }
    }
}
