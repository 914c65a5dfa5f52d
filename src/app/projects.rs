use leptos::prelude::*;

use crate::{
    content::{Profile, Project},
    scroll::Section,
};

use super::{
    icons::{Icon, IconKind, SectionTitle},
    sections::use_sections,
};

#[component]
pub fn ProjectsSection(profile: &'static Profile, projects: &'static [Project]) -> impl IntoView {
    let sections = use_sections();
    view! {
        <section
            node_ref=sections.node_ref(Section::Projects)
            id=Section::Projects.id()
            class="py-24 bg-slate-800"
        >
            <div class="max-w-7xl mx-auto px-6 lg:px-8">
                <SectionTitle icon=IconKind::Briefcase title="Featured Projects" />
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {projects.iter().map(|project| view! { <ProjectCard project /> }).collect_view()}
                </div>
                <div class="text-center mt-12">
                    <p class="text-slate-400">
                        "Want to see more? "
                        <a
                            href=profile.github.as_str()
                            target="_blank"
                            rel="noopener noreferrer"
                            class="text-cyan-400 hover:underline"
                        >
                            "Check out my GitHub."
                        </a>
                    </p>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    view! {
        <div class="bg-slate-800 p-6 rounded-xl shadow-2xl hover:shadow-cyan-500/30 transition-all duration-300 transform hover:-translate-y-1">
            <Icon kind=IconKind::Code class="w-8 h-8 text-cyan-400 mb-4" />
            <h3 class="text-2xl font-bold text-white mb-2">{project.title.as_str()}</h3>
            <p class="text-slate-400 mb-4">{project.description.as_str()}</p>
            <div class="flex flex-wrap gap-2 mb-4">
                {project
                    .tech
                    .iter()
                    .map(|t| {
                        view! {
                            <span class="px-3 py-1 text-xs font-semibold bg-slate-700 text-cyan-300 rounded-full">
                                {t.as_str()}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
            <a
                href=project.link.as_str()
                target="_blank"
                rel="noopener noreferrer"
                class="text-cyan-400 hover:text-cyan-300 font-medium flex items-center transition duration-200"
            >
                "View Demo / Code →"
            </a>
        </div>
    }
}
