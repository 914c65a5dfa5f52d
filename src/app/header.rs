use leptos::{either::Either, prelude::*};

use crate::scroll::{NavMenu, Section};

use super::{
    icons::{Icon, IconKind},
    sections::{use_sections, WindowViewport},
};

#[component]
pub fn Header() -> impl IntoView {
    let sections = use_sections();
    let menu = RwSignal::new(NavMenu::default());

    let handle_scroll = move |section: Section| {
        menu.update(|m| {
            m.select(&sections, &WindowViewport, section);
        });
    };

    view! {
        <header class="fixed top-0 left-0 w-full bg-slate-900/95 backdrop-blur-sm shadow-xl z-50 transition-all duration-300">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-20">
                    <div class="flex-shrink-0">
                        <a
                            href="#"
                            class="text-2xl font-black text-white hover:text-cyan-400 transition duration-300"
                            on:click=move |ev| {
                                ev.prevent_default();
                                handle_scroll(Section::Hero);
                            }
                        >
                            "<Developer/>"
                        </a>
                    </div>

                    // desktop
                    <nav class="hidden sm:ml-6 sm:flex sm:space-x-8">
                        {Section::NAV
                            .into_iter()
                            .map(|section| {
                                view! {
                                    <button
                                        on:click=move |_| handle_scroll(section)
                                        class="text-slate-300 hover:bg-slate-800 hover:text-cyan-400 px-3 py-2 rounded-md text-sm font-medium transition duration-200"
                                    >
                                        {section.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </nav>

                    <div class="sm:hidden">
                        <button
                            on:click=move |_| menu.update(NavMenu::toggle)
                            aria-expanded=move || menu.get().is_open().to_string()
                            class="inline-flex items-center justify-center p-2 rounded-md text-slate-400 hover:text-white hover:bg-slate-800 focus:outline-none focus:ring-2 focus:ring-inset focus:ring-cyan-400"
                        >
                            <span class="sr-only">"Open main menu"</span>
                            {move || {
                                if menu.get().is_open() {
                                    Either::Left(view! { <Icon kind=IconKind::Close class="block h-6 w-6" /> })
                                } else {
                                    Either::Right(view! { <Icon kind=IconKind::Menu class="block h-6 w-6" /> })
                                }
                            }}
                        </button>
                    </div>
                </div>
            </div>

            // mobile
            <div class=move || {
                if menu.get().is_open() {
                    "block sm:hidden transition-all duration-300 ease-in-out"
                } else {
                    "hidden sm:hidden transition-all duration-300 ease-in-out"
                }
            }>
                <div class="px-2 pt-2 pb-3 space-y-1">
                    {Section::NAV
                        .into_iter()
                        .map(|section| {
                            view! {
                                <button
                                    on:click=move |_| handle_scroll(section)
                                    class="block w-full text-left text-slate-300 hover:bg-slate-800 hover:text-cyan-400 px-3 py-2 rounded-md text-base font-medium transition duration-200"
                                >
                                    <Icon kind=IconKind::for_section(section) class="w-5 h-5 inline mr-2" />
                                    {section.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </header>
    }
}
