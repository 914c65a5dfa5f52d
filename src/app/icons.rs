use leptos::prelude::*;

use crate::scroll::Section;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    Menu,
    Close,
    Code,
    User,
    Briefcase,
    Mail,
    ArrowUp,
}

impl IconKind {
    pub fn for_section(section: Section) -> Self {
        match section {
            Section::Hero => IconKind::ArrowUp,
            Section::About => IconKind::User,
            Section::Projects => IconKind::Briefcase,
            Section::Contact => IconKind::Mail,
        }
    }

    fn markup(self) -> &'static str {
        match self {
            IconKind::Menu => {
                r#"<line x1="4" x2="20" y1="12" y2="12"/><line x1="4" x2="20" y1="6" y2="6"/><line x1="4" x2="20" y1="18" y2="18"/>"#
            }
            IconKind::Close => r#"<path d="M18 6 6 18"/><path d="m6 6 12 12"/>"#,
            IconKind::Code => {
                r#"<polyline points="16 18 22 12 16 6"/><polyline points="8 6 2 12 8 18"/>"#
            }
            IconKind::User => {
                r#"<path d="M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2"/><circle cx="12" cy="7" r="4"/>"#
            }
            IconKind::Briefcase => {
                r#"<path d="M16 20V4a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16"/><rect width="20" height="14" x="2" y="6" rx="2"/>"#
            }
            IconKind::Mail => {
                r#"<rect width="20" height="16" x="2" y="4" rx="2"/><path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"/>"#
            }
            IconKind::ArrowUp => r#"<path d="m5 12 7-7 7 7"/><path d="M12 19V5"/>"#,
        }
    }
}

/// Stroke icon in the lucide style, sized through `class`.
#[component]
pub fn Icon(kind: IconKind, class: &'static str) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            class=class
            inner_html=kind.markup()
        ></svg>
    }
}

#[component]
pub fn SectionTitle(icon: IconKind, title: &'static str) -> impl IntoView {
    view! {
        <h2 class="text-4xl font-extrabold text-cyan-400 mb-12 flex items-center justify-center sm:justify-start">
            <Icon kind=icon class="w-8 h-8 mr-3 text-white" />
            {title}
        </h2>
    }
}
