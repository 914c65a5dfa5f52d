use leptos::{either::Either, prelude::*};

use crate::content::portfolio;

use super::{
    about::AboutSection,
    contact::ContactSection,
    footer::Footer,
    header::Header,
    hero::HeroSection,
    projects::ProjectsSection,
    sections::provide_sections,
};

#[component]
pub fn HomePage() -> impl IntoView {
    provide_sections();

    let portfolio = match portfolio() {
        Ok(p) => p,
        Err(e) => {
            log::error!("{e}");
            return Either::Right(view! {
                <main class="min-h-screen flex items-center justify-center">
                    <p class="text-slate-400">"Portfolio content is unavailable."</p>
                </main>
            });
        }
    };

    Either::Left(view! {
        <div class="min-h-screen bg-slate-900 font-sans text-slate-200">
            <Header />
            <main>
                <HeroSection profile=&portfolio.profile />
                <AboutSection profile=&portfolio.profile skills=portfolio.skills.as_slice() />
                <ProjectsSection
                    profile=&portfolio.profile
                    projects=portfolio.projects.as_slice()
                />
                <ContactSection profile=&portfolio.profile />
            </main>
            <Footer profile=&portfolio.profile />
        </div>
    })
}
