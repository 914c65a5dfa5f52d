use leptos::prelude::*;

use crate::{content::Profile, scroll::Section};

use super::{
    icons::{IconKind, SectionTitle},
    sections::use_sections,
};

const INPUT_CLASS: &str = "w-full px-4 py-3 bg-slate-800 border border-slate-700 rounded-lg text-white focus:ring-cyan-500 focus:border-cyan-500 transition duration-200";
const LABEL_CLASS: &str = "block text-sm font-medium text-slate-300 mb-1";

#[component]
pub fn ContactSection(profile: &'static Profile) -> impl IntoView {
    let sections = use_sections();
    view! {
        <section
            node_ref=sections.node_ref(Section::Contact)
            id=Section::Contact.id()
            class="py-24 bg-slate-900"
        >
            <div class="max-w-4xl mx-auto px-6 lg:px-8">
                <SectionTitle icon=IconKind::Mail title="Get In Touch" />
                <p class="text-slate-300 text-xl text-center mb-10">
                    {profile.contact_blurb.as_str()}
                </p>
                // no submit handler is wired up, the form only renders
                <form
                    class="space-y-6"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        log::debug!("contact form submitted, nothing to send it to");
                    }
                >
                    <div>
                        <label for="name" class=LABEL_CLASS>
                            "Your Name"
                        </label>
                        <input
                            type="text"
                            id="name"
                            name="name"
                            required=true
                            class=INPUT_CLASS
                            placeholder="John Doe"
                        />
                    </div>
                    <div>
                        <label for="email" class=LABEL_CLASS>
                            "Your Email"
                        </label>
                        <input
                            type="email"
                            id="email"
                            name="email"
                            required=true
                            class=INPUT_CLASS
                            placeholder="you@example.com"
                        />
                    </div>
                    <div>
                        <label for="message" class=LABEL_CLASS>
                            "Message"
                        </label>
                        <textarea
                            id="message"
                            name="message"
                            rows="4"
                            required=true
                            class=INPUT_CLASS
                            placeholder="Tell me about your project..."
                        ></textarea>
                    </div>
                    <div class="pt-2 text-center">
                        <button
                            type="submit"
                            class="px-8 py-3 bg-cyan-500 text-slate-900 font-bold rounded-lg text-lg shadow-lg hover:bg-cyan-400 transition duration-300 transform hover:scale-105"
                        >
                            "Send Message"
                        </button>
                    </div>
                </form>
            </div>
        </section>
    }
}
