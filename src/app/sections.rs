use leptos::{html, prelude::*};
use web_sys::{ScrollBehavior, ScrollToOptions};

use crate::scroll::{self, Section, SectionLayout, Viewport};

/// Anchors for every section on the page, shared through context so the
/// header, hero and footer can all scroll to them.
#[derive(Clone, Copy)]
pub struct SectionRefs {
    hero: NodeRef<html::Section>,
    about: NodeRef<html::Section>,
    projects: NodeRef<html::Section>,
    contact: NodeRef<html::Section>,
}

impl SectionRefs {
    fn new() -> Self {
        Self {
            hero: NodeRef::new(),
            about: NodeRef::new(),
            projects: NodeRef::new(),
            contact: NodeRef::new(),
        }
    }

    pub fn node_ref(&self, section: Section) -> NodeRef<html::Section> {
        match section {
            Section::Hero => self.hero,
            Section::About => self.about,
            Section::Projects => self.projects,
            Section::Contact => self.contact,
        }
    }

    pub fn scroll_to(&self, section: Section) {
        scroll::scroll_to(self, &WindowViewport, section);
    }
}

impl SectionLayout for SectionRefs {
    fn offset_top(&self, section: Section) -> Option<i32> {
        self.node_ref(section)
            .get_untracked()
            .map(|el| el.offset_top())
    }
}

pub struct WindowViewport;

impl Viewport for WindowViewport {
    fn smooth_scroll_to(&self, top: i32) {
        let options = ScrollToOptions::new();
        options.set_top(top.into());
        options.set_behavior(ScrollBehavior::Smooth);
        window().scroll_to_with_scroll_to_options(&options);
    }
}

pub fn provide_sections() {
    provide_context(SectionRefs::new());
}

pub fn use_sections() -> SectionRefs {
    expect_context::<SectionRefs>()
}
