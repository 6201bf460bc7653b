use leptos::prelude::*;

use crate::portfolio::{SkillCategory, ALSO_FAMILIAR, SKILL_CATEGORIES};

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id="skills" class="max-w-6xl mx-auto px-4 py-16 section-content">
            <div class="text-center mb-12">
                <h2 class="text-3xl font-bold mb-2">"Skills & Expertise"</h2>
                <p class="text-muted">"Technologies and tools I work with"</p>
            </div>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                {SKILL_CATEGORIES
                    .iter()
                    .map(|category| view! { <CategoryCard category /> })
                    .collect_view()}
            </div>
            <div class="mt-12 text-center">
                <h3 class="text-xl font-bold mb-4">"Also Familiar With"</h3>
                <div class="flex flex-wrap justify-center gap-2" role="list">
                    {ALSO_FAMILIAR
                        .iter()
                        .map(|tech| {
                            view! {
                                <span
                                    class="rounded-md px-2 py-1 bg-brightBlack text-sm"
                                    role="listitem"
                                >
                                    {*tech}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn CategoryCard(category: &'static SkillCategory) -> impl IntoView {
    view! {
        <div class="bg-brightBlack/20 p-6 rounded-lg border border-muted/30">
            <div class="flex items-center gap-3 mb-4">
                <span class="text-2xl" role="img" aria-label=format!("{} icon", category.title)>
                    {category.icon}
                </span>
                <h3 class="text-lg font-bold">{category.title}</h3>
            </div>
            <div class="space-y-3">
                {category
                    .skills
                    .iter()
                    .map(|skill| {
                        view! {
                            <div>
                                <div class="flex justify-between text-sm mb-1">
                                    <span>{skill.icon} " " {skill.name}</span>
                                    <span class="text-muted">{format!("{}%", skill.level)}</span>
                                </div>
                                <div class="h-2 rounded bg-brightBlack/40">
                                    <div
                                        class="h-2 rounded bg-cyan"
                                        style=format!("width: {}%", skill.level.min(100))
                                    ></div>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
