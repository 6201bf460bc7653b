use leptos::prelude::*;

use crate::portfolio::{HERO_BLURB, OWNER_NAME, SOCIAL_LINKS, TAGLINE};

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section
            id="home"
            class="min-h-[80vh] flex flex-col justify-center items-center text-center px-4 section-content"
        >
            <div class="w-32 h-32 rounded-full bg-brightBlack/40 border-4 border-cyan/40 flex items-center justify-center text-6xl mb-8">
                <span role="img" aria-label="Developer">
                    "👨‍💻"
                </span>
            </div>
            <p class="text-lg text-muted mb-2">"Hello, I'm"</p>
            <h1 class="text-4xl lg:text-6xl font-bold mb-4">{OWNER_NAME}</h1>
            <h2 class="text-2xl lg:text-3xl text-cyan font-medium mb-6">{TAGLINE}</h2>
            <p class="max-w-2xl text-base leading-relaxed mb-8">{HERO_BLURB}</p>
            <div class="flex flex-col sm:flex-row gap-4 mb-8">
                <a
                    href="#projects"
                    class="bg-cyan/20 hover:bg-cyan/30 text-cyan px-6 py-3 rounded-md font-medium transition-all duration-200 border border-cyan/30"
                >
                    "View My Work"
                </a>
                <a
                    href="#contact"
                    class="px-6 py-3 rounded-md font-medium transition-all duration-200 border border-muted/40 hover:bg-brightBlack/30"
                >
                    "Get In Touch"
                </a>
            </div>
            <div class="flex gap-4 text-2xl">
                {SOCIAL_LINKS
                    .iter()
                    .map(|link| {
                        view! {
                            <a
                                href=link.url
                                target="_blank"
                                rel="noopener noreferrer"
                                aria-label=link.name
                                class="hover:text-cyan"
                            >
                                <i class=link.icon_class></i>
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
