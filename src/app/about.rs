use leptos::prelude::*;

use crate::{
    content::{Profile, Skill},
    scroll::Section,
};

use super::{
    icons::{IconKind, SectionTitle},
    sections::use_sections,
};

#[component]
pub fn AboutSection(profile: &'static Profile, skills: &'static [Skill]) -> impl IntoView {
    let sections = use_sections();
    view! {
        <section
            node_ref=sections.node_ref(Section::About)
            id=Section::About.id()
            class="py-24 bg-slate-900"
        >
            <div class="max-w-7xl mx-auto px-6 lg:px-8">
                <SectionTitle icon=IconKind::User title="About Me & Skills" />
                <div class="grid lg:grid-cols-2 gap-12 items-start">
                    <div class="space-y-6">
                        {profile
                            .about
                            .iter()
                            .map(|p| {
                                view! {
                                    <p class="text-slate-300 text-lg leading-relaxed">{p.as_str()}</p>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="space-y-4">
                        {skills.iter().map(|skill| view! { <SkillBar skill /> }).collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillBar(skill: &'static Skill) -> impl IntoView {
    view! {
        <div>
            <div class="flex justify-between mb-1">
                <span class="text-sm font-medium text-slate-200">{skill.name.as_str()}</span>
                <span class="text-sm font-medium text-cyan-400">{format!("{}%", skill.level)}</span>
            </div>
            <div class="w-full bg-slate-700 rounded-full h-2.5">
                <div
                    class="bg-cyan-500 h-2.5 rounded-full transition-all duration-1000 ease-out"
                    style=format!("width: {}%", skill.level)
                ></div>
            </div>
        </div>
    }
}
