use leptos::prelude::*;

use crate::{build_info::build_year, content::Profile, scroll::Section};

use super::{
    icons::{Icon, IconKind},
    sections::use_sections,
};

#[component]
pub fn Footer(profile: &'static Profile) -> impl IntoView {
    let sections = use_sections();
    let copyright = match build_year() {
        Some(year) => format!("© {year} {}", profile.name),
        None => format!("© {}", profile.name),
    };

    view! {
        <footer class="bg-slate-950 py-8">
            <div class="max-w-7xl mx-auto px-6 lg:px-8 flex flex-col sm:flex-row justify-between items-center text-slate-500">
                <p class="text-center sm:text-left mb-4 sm:mb-0">
                    {copyright} " 📞" {profile.phone.as_str()} " 📩"
                    <a href=format!("mailto:{}", profile.email) class="hover:text-cyan-400">
                        {profile.email.as_str()}
                    </a>
                </p>
                <button
                    on:click=move |_| sections.scroll_to(Section::Hero)
                    class="flex items-center text-sm font-medium text-cyan-400 hover:text-cyan-300 transition duration-200"
                >
                    <Icon kind=IconKind::ArrowUp class="w-5 h-5 mr-1" />
                    "Back to Top"
                </button>
            </div>
        </footer>
    }
}
