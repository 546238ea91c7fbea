//! Scroll and visibility tracking for the page: enter animations and the
//! active navigation link.

use serde::Serialize;

/// Vertical offset from the viewport top a section must straddle to be active.
pub const ACTIVE_SECTION_OFFSET: f64 = 100.0;
/// Scroll distance after which the navigation bar switches to its compact style.
pub const SCROLLED_THRESHOLD: f64 = 50.0;
/// Height assumed for the first screen when the page is rendered.
const FIRST_SCREEN_HEIGHT: f64 = 800.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Home,
    About,
    Skills,
    Experience,
    Projects,
    Achievements,
    Certifications,
    Articles,
    Contact,
}

impl SectionId {
    /// Declared page order; also the order used to pick the active link.
    pub const ALL: [SectionId; 9] = [
        Self::Home,
        Self::About,
        Self::Skills,
        Self::Experience,
        Self::Projects,
        Self::Achievements,
        Self::Certifications,
        Self::Articles,
        Self::Contact,
    ];

    pub fn anchor(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Skills => "skills",
            Self::Experience => "experience",
            Self::Projects => "projects",
            Self::Achievements => "achievements",
            Self::Certifications => "certifications",
            Self::Articles => "articles",
            Self::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Skills => "Skills",
            Self::Experience => "Experience",
            Self::Projects => "Projects",
            Self::Achievements => "Achievements",
            Self::Certifications => "Certifications",
            Self::Articles => "Articles",
            Self::Contact => "Contact",
        }
    }

    /// Enter-animation settings for the section.
    pub fn reveal(self) -> RevealOptions {
        match self {
            Self::Home => RevealOptions::ALWAYS,
            Self::Contact => RevealOptions::once(0.3),
            _ => RevealOptions::once(0.2),
        }
    }
}

/// Bounding box of a section relative to the viewport top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBox {
    pub top: f64,
    pub bottom: f64,
}

impl SectionBox {
    fn straddles(&self, offset: f64) -> bool {
        self.top <= offset && self.bottom >= offset
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealOptions {
    pub once: bool,
    /// Visible fraction of the element needed to count as in view.
    pub amount: f64,
}

impl RevealOptions {
    pub const ALWAYS: RevealOptions = RevealOptions {
        once: false,
        amount: 0.0,
    };

    pub const fn once(amount: f64) -> Self {
        Self { once: true, amount }
    }
}

/// Tracks whether an element is in view. In `once` mode the flag sticks at
/// true after the first entry.
#[derive(Debug, Clone)]
pub struct VisibilityTracker {
    options: RevealOptions,
    in_view: bool,
}

impl VisibilityTracker {
    pub fn new(options: RevealOptions) -> Self {
        Self {
            options,
            in_view: false,
        }
    }

    pub fn is_in_view(&self) -> bool {
        self.in_view
    }

    pub fn options(&self) -> RevealOptions {
        self.options
    }

    /// Feeds the currently visible fraction (0.0..=1.0) and returns the flag.
    pub fn observe(&mut self, visible_ratio: f64) -> bool {
        if self.options.once && self.in_view {
            return true;
        }
        self.in_view = visible_ratio > 0.0 && visible_ratio >= self.options.amount;
        self.in_view
    }
}

#[derive(Debug, Clone)]
pub struct NavTracker {
    scrolled: bool,
    active: SectionId,
}

impl Default for NavTracker {
    fn default() -> Self {
        Self {
            scrolled: false,
            active: SectionId::Home,
        }
    }
}

impl NavTracker {
    pub fn active(&self) -> SectionId {
        self.active
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    /// Recomputes state after a scroll event. The first section in declared
    /// order whose box straddles the offset wins; sections not in `boxes` are
    /// skipped and the previous active link stays when none match.
    pub fn on_scroll(&mut self, scroll_y: f64, boxes: &[(SectionId, SectionBox)]) -> SectionId {
        self.scrolled = scroll_y > SCROLLED_THRESHOLD;

        let hit = SectionId::ALL.into_iter().find(|section| {
            boxes
                .iter()
                .find(|(id, _)| id == section)
                .is_some_and(|(_, bounds)| bounds.straddles(ACTIVE_SECTION_OFFSET))
        });
        if let Some(section) = hit {
            self.active = section;
        }
        self.active
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionState {
    pub id: SectionId,
    pub once: bool,
    pub amount: f64,
    pub in_view: bool,
}

/// Tracker state handed to the page script, which keeps applying the same
/// rules as the user scrolls.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewportState {
    pub offset: f64,
    pub scrolled_threshold: f64,
    pub active: SectionId,
    pub scrolled: bool,
    /// In declared page order.
    pub sections: Vec<SectionState>,
}

/// Navigation and per-section visibility for one rendered page.
#[derive(Debug, Clone)]
pub struct PageViewport {
    nav: NavTracker,
    sections: Vec<(SectionId, VisibilityTracker)>,
}

impl PageViewport {
    /// The page as first shown: scrolled to the top with only the hero on
    /// screen.
    pub fn at_top() -> Self {
        let mut nav = NavTracker::default();
        let hero = SectionBox {
            top: 0.0,
            bottom: FIRST_SCREEN_HEIGHT,
        };
        nav.on_scroll(0.0, &[(SectionId::Home, hero)]);

        let sections = SectionId::ALL
            .into_iter()
            .map(|id| {
                let mut tracker = VisibilityTracker::new(id.reveal());
                tracker.observe(if id == SectionId::Home { 1.0 } else { 0.0 });
                (id, tracker)
            })
            .collect();
        Self { nav, sections }
    }

    pub fn nav(&self) -> &NavTracker {
        &self.nav
    }

    pub fn is_in_view(&self, section: SectionId) -> bool {
        self.sections
            .iter()
            .any(|(id, tracker)| *id == section && tracker.is_in_view())
    }

    pub fn state(&self) -> ViewportState {
        ViewportState {
            offset: ACTIVE_SECTION_OFFSET,
            scrolled_threshold: SCROLLED_THRESHOLD,
            active: self.nav.active(),
            scrolled: self.nav.is_scrolled(),
            sections: self
                .sections
                .iter()
                .map(|(id, tracker)| SectionState {
                    id: *id,
                    once: tracker.options().once,
                    amount: tracker.options().amount,
                    in_view: tracker.is_in_view(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(top: f64, bottom: f64) -> SectionBox {
        SectionBox { top, bottom }
    }

    #[test]
    fn once_tracker_sticks_after_first_entry() {
        let mut tracker = VisibilityTracker::new(RevealOptions::once(0.3));

        assert!(!tracker.observe(0.1));
        assert!(tracker.observe(0.5));
        assert!(tracker.observe(0.0));
    }

    #[test]
    fn toggling_tracker_follows_both_directions() {
        let mut tracker = VisibilityTracker::new(RevealOptions::ALWAYS);

        assert!(tracker.observe(0.01));
        assert!(!tracker.observe(0.0));
        assert!(!tracker.is_in_view());
    }

    #[test]
    fn active_section_is_first_straddling_box_in_declared_order() {
        let mut nav = NavTracker::default();
        // Overlapping boxes: declared order decides, not slice order.
        let boxes = [
            (SectionId::Projects, bounds(50.0, 400.0)),
            (SectionId::Experience, bounds(-300.0, 120.0)),
        ];

        assert_eq!(nav.on_scroll(900.0, &boxes), SectionId::Experience);
        assert!(nav.is_scrolled());
    }

    #[test]
    fn keeps_previous_section_when_nothing_matches() {
        let mut nav = NavTracker::default();
        nav.on_scroll(600.0, &[(SectionId::About, bounds(0.0, 500.0))]);

        let active = nav.on_scroll(10.0, &[(SectionId::Skills, bounds(300.0, 700.0))]);

        assert_eq!(active, SectionId::About);
        assert!(!nav.is_scrolled());
    }

    #[test]
    fn reveal_settings_per_section() {
        assert_eq!(SectionId::Contact.reveal(), RevealOptions::once(0.3));
        assert_eq!(SectionId::Projects.reveal().amount, 0.2);
        assert!(!SectionId::Home.reveal().once);
        let anchors: Vec<_> = SectionId::ALL.iter().map(|s| s.anchor()).collect();
        assert_eq!(anchors.first(), Some(&"home"));
        assert_eq!(anchors.last(), Some(&"contact"));
    }

    #[test]
    fn page_starts_at_top_with_only_the_hero_revealed() {
        let viewport = PageViewport::at_top();

        assert_eq!(viewport.nav().active(), SectionId::Home);
        assert!(!viewport.nav().is_scrolled());
        assert!(viewport.is_in_view(SectionId::Home));
        assert!(!viewport.is_in_view(SectionId::Projects));
        assert!(!viewport.is_in_view(SectionId::Contact));
    }

    #[test]
    fn state_lists_sections_in_page_order_with_their_reveal_options() {
        let state = PageViewport::at_top().state();

        let ids: Vec<_> = state.sections.iter().map(|s| s.id).collect();
        assert_eq!(ids, SectionId::ALL.to_vec());
        for section in &state.sections {
            assert_eq!(
                RevealOptions {
                    once: section.once,
                    amount: section.amount,
                },
                section.id.reveal()
            );
        }
        assert_eq!(state.offset, ACTIVE_SECTION_OFFSET);
        assert_eq!(state.scrolled_threshold, SCROLLED_THRESHOLD);

        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["active"], "home");
        assert_eq!(json["sections"][8]["id"], "contact");
        assert_eq!(json["sections"][8]["amount"], 0.3);
        assert_eq!(json["sections"][0]["inView"], true);
    }
}
