use leptos::prelude::*;

use crate::portfolio::{ABOUT_BADGES, ABOUT_PARAGRAPHS, STATS};

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="max-w-6xl mx-auto px-4 py-16 section-content">
            <div class="text-center mb-12">
                <h2 class="text-3xl font-bold mb-2">"About Me"</h2>
                <p class="text-muted">"Get to know more about my background and expertise"</p>
            </div>
            <div class="flex flex-col lg:flex-row gap-8 lg:gap-12 items-center">
                <div class="flex-shrink-0 flex flex-col items-center gap-4">
                    <div class="w-48 h-48 rounded-2xl bg-brightBlack/30 flex items-center justify-center text-8xl">
                        <span role="img" aria-label="Laptop">
                            "💻"
                        </span>
                    </div>
                    <div class="flex gap-2">
                        {ABOUT_BADGES
                            .iter()
                            .map(|badge| {
                                view! {
                                    <span class="rounded-md px-2 py-1 bg-purple/20 text-purple text-sm">
                                        {*badge}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <div class="w-full lg:max-w-2xl">
                    {ABOUT_PARAGRAPHS
                        .iter()
                        .map(|p| view! { <p class="text-base mb-4 leading-relaxed">{*p}</p> })
                        .collect_view()}
                    <div class="grid grid-cols-3 gap-4 mt-8">
                        {STATS
                            .iter()
                            .map(|stat| {
                                view! {
                                    <div class="bg-brightBlack/30 p-4 rounded-md text-center">
                                        <div class="text-2xl font-bold text-cyan">{stat.value}</div>
                                        <div class="text-sm text-muted">{stat.label}</div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
