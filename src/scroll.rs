//! Scroll navigation between the page's section anchors.
//!
//! The offset math and the mobile menu state live here without any DOM
//! types so they can be exercised natively; the browser side only has to
//! implement [`SectionLayout`] and [`Viewport`].

use std::{fmt, str::FromStr};

use thiserror::Error;

/// Height of the fixed page header, in CSS pixels.
pub const HEADER_CLEARANCE: i32 = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    About,
    Projects,
    Contact,
}

impl Section {
    /// Document order.
    pub const ALL: [Section; 4] = [
        Section::Hero,
        Section::About,
        Section::Projects,
        Section::Contact,
    ];

    /// Sections listed in the navigation menus.
    pub const NAV: [Section; 3] = [Section::About, Section::Projects, Section::Contact];

    pub fn id(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::About => "about",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::About => "About",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }

    /// Space left above the section once scrolled to. The hero sits flush
    /// with the top of the page, everything else clears the header.
    pub fn clearance(self) -> i32 {
        match self {
            Section::Hero => 0,
            _ => HEADER_CLEARANCE,
        }
    }

    /// Viewport scroll position that brings this section into view, given its
    /// top offset in the document. Not clamped; the browser clamps negatives.
    pub fn scroll_target(self, offset_top: i32) -> i32 {
        offset_top - self.clearance()
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown section: {0}")]
pub struct ParseSectionError(String);

impl FromStr for Section {
    type Err = ParseSectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.id() == s)
            .ok_or_else(|| ParseSectionError(s.to_string()))
    }
}

/// Where the sections currently are in the document.
pub trait SectionLayout {
    /// Top offset of `section` relative to the document, or `None` when the
    /// section is not mounted.
    fn offset_top(&self, section: Section) -> Option<i32>;
}

/// The platform's smooth-scroll primitive. Fire-and-forget: a later call
/// replaces whatever animation is in flight.
pub trait Viewport {
    fn smooth_scroll_to(&self, top: i32);
}

/// Smooth-scrolls `viewport` to `section`. Returns the position scrolled to,
/// or `None` if the section isn't mounted, in which case nothing happens.
pub fn scroll_to<L, V>(layout: &L, viewport: &V, section: Section) -> Option<i32>
where
    L: SectionLayout + ?Sized,
    V: Viewport + ?Sized,
{
    let Some(offset_top) = layout.offset_top(section) else {
        log::trace!("section {section} not mounted, dropping scroll");
        return None;
    };
    let top = section.scroll_target(offset_top);
    log::debug!("scrolling to {section} at {top}");
    viewport.smooth_scroll_to(top);
    Some(top)
}

/// Open/closed state of the collapsible mobile navigation panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// A navigation entry was picked: collapse the panel and scroll to the
    /// entry's section. Returns the position scrolled to, as [`scroll_to`].
    pub fn select<L, V>(&mut self, layout: &L, viewport: &V, section: Section) -> Option<i32>
    where
        L: SectionLayout + ?Sized,
        V: Viewport + ?Sized,
    {
        self.close();
        scroll_to(layout, viewport, section)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{
        cell::{Cell, RefCell},
        collections::HashMap,
    };

    #[derive(Default)]
    struct FakeLayout {
        offsets: HashMap<Section, i32>,
    }

    impl FakeLayout {
        fn mounted() -> Self {
            let offsets = [
                (Section::Hero, 0),
                (Section::About, 900),
                (Section::Projects, 1_850),
                (Section::Contact, 2_900),
            ];
            Self {
                offsets: offsets.into_iter().collect(),
            }
        }
    }

    impl SectionLayout for FakeLayout {
        fn offset_top(&self, section: Section) -> Option<i32> {
            self.offsets.get(&section).copied()
        }
    }

    // Jumps straight to each target, standing in for a finished animation
    #[derive(Default)]
    struct RecordingViewport {
        position: Cell<i32>,
        scrolls: RefCell<Vec<i32>>,
    }

    impl RecordingViewport {
        fn scrolls(&self) -> Vec<i32> {
            self.scrolls.borrow().clone()
        }

        fn position(&self) -> i32 {
            self.position.get()
        }
    }

    impl Viewport for RecordingViewport {
        fn smooth_scroll_to(&self, top: i32) {
            self.position.set(top);
            self.scrolls.borrow_mut().push(top);
        }
    }

    #[test]
    fn test_scroll_target_subtracts_header_clearance() {
        let layout = FakeLayout::mounted();
        let viewport = RecordingViewport::default();

        for section in Section::ALL {
            let top = layout.offset_top(section).unwrap();
            let expected = if section == Section::Hero {
                top
            } else {
                top - HEADER_CLEARANCE
            };
            assert_eq!(scroll_to(&layout, &viewport, section), Some(expected));
        }
        assert_eq!(viewport.scrolls(), vec![0, 820, 1_770, 2_820]);
    }

    #[test]
    fn test_hero_is_flush_with_top() {
        assert_eq!(Section::Hero.scroll_target(0), 0);
        assert_eq!(Section::Hero.scroll_target(37), 37);
        assert_eq!(Section::About.scroll_target(37), 37 - 80);
    }

    #[test]
    fn test_unmounted_section_is_ignored() {
        let layout = FakeLayout::default();
        let viewport = RecordingViewport::default();

        for section in Section::ALL {
            assert_eq!(scroll_to(&layout, &viewport, section), None);
        }
        assert!(viewport.scrolls().is_empty());
    }

    #[test]
    fn test_repeated_scroll_converges() {
        let layout = FakeLayout::mounted();
        let viewport = RecordingViewport::default();

        scroll_to(&layout, &viewport, Section::Projects);
        scroll_to(&layout, &viewport, Section::Projects);
        scroll_to(&layout, &viewport, Section::About);
        assert_eq!(viewport.scrolls(), vec![1_770, 1_770, 820]);
    }

    #[test]
    fn test_back_to_top_ignores_current_position() {
        let layout = FakeLayout::mounted();
        let viewport = RecordingViewport::default();

        scroll_to(&layout, &viewport, Section::Contact);
        assert_eq!(viewport.position(), 2_820);
        assert_eq!(scroll_to(&layout, &viewport, Section::Hero), Some(0));
        assert_eq!(viewport.position(), 0);

        scroll_to(&layout, &viewport, Section::Projects);
        assert_eq!(viewport.position(), 1_770);
        assert_eq!(scroll_to(&layout, &viewport, Section::Hero), Some(0));
        assert_eq!(viewport.position(), 0);

        // hero not at the very top still gets no clearance
        let mut layout = FakeLayout::mounted();
        layout.offsets.insert(Section::Hero, 12);
        scroll_to(&layout, &viewport, Section::About);
        assert_eq!(scroll_to(&layout, &viewport, Section::Hero), Some(12));
        assert_eq!(viewport.position(), 12);
    }

    #[test]
    fn test_menu_toggle() {
        let mut menu = NavMenu::default();
        assert!(!menu.is_open());

        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert!(!menu.is_open());
        menu.toggle();
        assert!(menu.is_open());
    }

    #[test]
    fn test_menu_entry_closes() {
        let layout = FakeLayout::mounted();
        let viewport = RecordingViewport::default();
        for section in Section::NAV {
            let mut menu = NavMenu::default();
            menu.toggle();
            assert!(menu.is_open());
            menu.select(&layout, &viewport, section);
            assert!(!menu.is_open());
        }
        assert_eq!(viewport.scrolls(), vec![820, 1_770, 2_820]);

        // desktop entries go through the closed menu
        let mut menu = NavMenu::default();
        assert_eq!(menu.select(&layout, &viewport, Section::About), Some(820));
        assert!(!menu.is_open());
    }

    #[test]
    fn test_menu_entry_closes_when_unmounted() {
        let layout = FakeLayout::default();
        let viewport = RecordingViewport::default();
        let mut menu = NavMenu::default();

        menu.toggle();
        assert_eq!(menu.select(&layout, &viewport, Section::Projects), None);
        assert!(!menu.is_open());
        assert!(viewport.scrolls().is_empty());
    }

    #[test]
    fn test_mobile_contact_scenario() {
        let layout = FakeLayout::mounted();
        let viewport = RecordingViewport::default();
        let mut menu = NavMenu::default();

        menu.toggle();
        assert!(menu.is_open());

        let top = menu.select(&layout, &viewport, Section::Contact);
        assert!(!menu.is_open());
        assert_eq!(top, Some(2_900 - 80));
        assert_eq!(viewport.position(), 2_820);
    }

    #[test]
    fn test_back_to_top_on_load() {
        let layout = FakeLayout::mounted();
        let viewport = RecordingViewport::default();

        assert_eq!(scroll_to(&layout, &viewport, Section::Hero), Some(0));
        assert_eq!(viewport.scrolls(), vec![0]);
    }

    #[test]
    fn test_section_ids() {
        for section in Section::ALL {
            assert_eq!(section.id().parse::<Section>(), Ok(section));
            assert_eq!(section.to_string(), section.id());
        }
        let err = "footer".parse::<Section>().unwrap_err();
        assert_eq!(err.to_string(), "unknown section: footer");
        assert!(!Section::NAV.contains(&Section::Hero));
    }
}
