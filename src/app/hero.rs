use leptos::prelude::*;

use crate::{content::Profile, scroll::Section};

use super::sections::use_sections;

#[component]
pub fn HeroSection(profile: &'static Profile) -> impl IntoView {
    let sections = use_sections();
    view! {
        <section
            node_ref=sections.node_ref(Section::Hero)
            id=Section::Hero.id()
            class="h-screen flex items-center justify-center bg-slate-800/50 pt-20"
        >
            <div class="text-center max-w-4xl px-6">
                <p class="text-cyan-400 text-lg font-extrabold mb-4">{profile.greeting.as_str()}</p>
                <h1 class="text-5xl sm:text-7xl font-extrabold text-white leading-tight mb-4">
                    {profile.name.as_str()}
                </h1>
                <p class="text-2xl sm:text-4xl font-light text-slate-300 mb-8">
                    {profile.tagline.as_str()}
                </p>
                <button
                    on:click=move |_| sections.scroll_to(Section::About)
                    class="px-8 py-3 bg-cyan-500 text-slate-900 font-bold rounded-full text-lg shadow-lg hover:bg-cyan-400 transition duration-300 transform hover:scale-105"
                >
                    "View My Work"
                </button>
            </div>
        </section>
    }
}
