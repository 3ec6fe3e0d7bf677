use leptos::prelude::*;
use leptos_router::hooks::use_location;

use super::theme::ThemeToggle;
use crate::{
    config,
    content::{nav_links, Section},
};

/// In-page anchors only work on the home page; elsewhere link back to it.
fn section_href(on_home: bool, section: Section) -> String {
    if on_home {
        section.anchor()
    } else {
        config::asset(&format!("/{}", section.anchor()))
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let (open, set_open) = signal(false);
    let pathname = use_location().pathname;
    let on_home = Memo::new(move |_| pathname.with(|p| p.trim_end_matches('/').is_empty()));

    let links = move |class: &'static str, closes: bool| {
        nav_links()
            .iter()
            .map(|link| {
                let target = link.target;
                view! {
                    <a
                        href=move || section_href(on_home.get(), target)
                        class=class
                        on:click=move |_| {
                            if closes {
                                set_open.set(false);
                            }
                        }
                    >
                        {link.name.clone()}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <nav class="fixed top-0 left-0 right-0 z-40 bg-white/80 dark:bg-black/80 backdrop-blur-md animate-nav-in">
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    <a
                        href=move || section_href(on_home.get(), Section::Home)
                        class="text-xl font-bold"
                    >
                        "Portfolio"
                    </a>
                    <div class="hidden md:flex items-center space-x-8">
                        {links(
                            "text-gray-700 dark:text-gray-300 hover:text-black dark:hover:text-white transition-colors",
                            false,
                        )}
                        <ThemeToggle />
                    </div>
                    <div class="flex md:hidden items-center gap-2">
                        <ThemeToggle />
                        <button
                            type="button"
                            aria-label="Toggle menu"
                            class="p-2 text-2xl leading-none"
                            on:click=move |_| set_open.update(|o| *o = !*o)
                        >
                            {move || if open.get() { "✕" } else { "☰" }}
                        </button>
                    </div>
                </div>
                <Show when=move || open.get()>
                    <div class="md:hidden pb-4 animate-fade-in">
                        {links("block py-2 text-gray-700 dark:text-gray-300", true)}
                    </div>
                </Show>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_route_home_from_other_pages() {
        assert_eq!(section_href(true, Section::About), "#about");
        assert!(section_href(false, Section::About).ends_with("/#about"));
    }
}
