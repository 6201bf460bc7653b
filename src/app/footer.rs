use leptos::prelude::*;

use crate::portfolio::{copyright_year, BUILD_TIME, NAV_ITEMS, OWNER_NAME};

#[component]
pub fn Footer() -> impl IntoView {
    let year = copyright_year(BUILD_TIME)
        .map(|y| y.to_string())
        .unwrap_or_default();
    view! {
        <footer class="border-t border-muted/30 mt-16">
            <div class="max-w-6xl mx-auto px-4 py-8 flex flex-col md:flex-row items-center justify-between gap-4 text-sm text-muted">
                <div>{format!("© {year} {OWNER_NAME}. Built with Rust & Leptos.")}</div>
                <ul class="flex gap-4">
                    {NAV_ITEMS
                        .iter()
                        .map(|item| {
                            view! {
                                <li>
                                    <a href=format!("#{}", item.anchor) class="hover:text-cyan">
                                        {item.label}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </footer>
    }
}
