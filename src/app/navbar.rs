use leptos::{either::Either, prelude::*};

use crate::portfolio::NAV_ITEMS;

#[component]
pub fn Navbar() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    let links = move |mobile: bool| {
        NAV_ITEMS
            .iter()
            .map(|item| {
                view! {
                    <li>
                        <a
                            href=format!("#{}", item.anchor)
                            class=if mobile {
                                "block px-4 py-2 hover:bg-brightBlack/30"
                            } else {
                                "hover:text-cyan transition-colors duration-200"
                            }
                            on:click=move |_| set_menu_open(false)
                        >
                            {item.label}
                        </a>
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <nav
            class="sticky top-0 z-40 bg-background/90 backdrop-blur shadow-lg"
            role="navigation"
            aria-label="Main navigation"
        >
            <div class="mx-auto max-w-7xl px-4 sm:px-6 lg:px-8 py-4 flex items-center justify-between">
                <a href="#home" class="text-xl font-bold text-cyan">
                    "<Dev Portfolio />"
                </a>
                <ul class="hidden md:flex gap-8 font-medium">{links(false)}</ul>
                <button
                    class="md:hidden p-2 rounded-md border border-muted/30"
                    aria-label="Toggle navigation menu"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || {
                        if menu_open.get() { Either::Left("✕") } else { Either::Right("☰") }
                    }}
                </button>
            </div>
            {move || {
                menu_open
                    .get()
                    .then(|| {
                        view! {
                            <div class="md:hidden border-t border-muted/30">
                                <ul class="py-2">{links(true)}</ul>
                            </div>
                        }
                    })
            }}
        </nav>
    }
}
