use leptos::prelude::*;

use crate::portfolio::{filter_projects, Project, ProjectFilter};

#[component]
pub fn Projects() -> impl IntoView {
    let (filter, set_filter) = signal(ProjectFilter::All);

    view! {
        <section id="projects" class="max-w-6xl mx-auto px-4 py-16 section-content">
            <div class="text-center mb-12">
                <h2 class="text-3xl font-bold mb-2">"Featured Projects"</h2>
                <p class="text-muted">"A selection of things I've built"</p>
            </div>
            <div class="flex flex-wrap justify-center gap-3 mb-8" role="tablist">
                {ProjectFilter::ALL
                    .into_iter()
                    .map(|f| {
                        view! {
                            <button
                                role="tab"
                                aria-selected=move || (filter.get() == f).to_string()
                                class=move || {
                                    if filter.get() == f {
                                        "px-4 py-2 rounded-md border bg-cyan/20 text-cyan border-cyan/30"
                                    } else {
                                        "px-4 py-2 rounded-md border border-muted/30 hover:bg-brightBlack/30"
                                    }
                                }
                                on:click=move |_| set_filter(f)
                            >
                                {f.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                {move || {
                    filter_projects(filter.get())
                        .map(|project| view! { <ProjectCard project /> })
                        .collect_view()
                }}
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    let link = |url: Option<&'static str>, text: &'static str| {
        url.map(|href| {
            view! {
                <a
                    href=href
                    target="_blank"
                    rel="noopener noreferrer"
                    class="text-cyan hover:underline text-sm"
                    aria-label=format!("{text} of {}", project.title)
                >
                    {text}
                </a>
            }
        })
    };
    view! {
        <article
            class="bg-brightBlack/20 p-6 rounded-lg border border-muted/30 flex flex-col"
            aria-label=format!("{} project", project.title)
        >
            <div class="text-5xl mb-4">{project.icon}</div>
            <h3 class="text-lg font-bold mb-2">{project.title}</h3>
            <p class="text-sm leading-relaxed mb-4 flex-1">{project.description}</p>
            <div class="flex flex-wrap gap-2 mb-4">
                {project
                    .tags
                    .iter()
                    .map(|tag| {
                        view! {
                            <span class="bg-green/20 text-green px-2 py-1 rounded text-xs">
                                {*tag}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="flex gap-4">
                {link(project.live_url, "Live Demo")} {link(project.github_url, "GitHub")}
            </div>
        </article>
    }
}
