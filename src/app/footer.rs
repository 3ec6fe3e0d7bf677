use leptos::prelude::*;

use crate::content::personal_info;

#[component]
pub fn Footer() -> impl IntoView {
    let info = personal_info();
    // Build year, so server and client render the same text.
    let year = env!("BUILD_TIME").get(..4).unwrap_or_default();

    view! {
        <footer class="py-8 bg-gray-50 dark:bg-gray-900 border-t border-gray-200 dark:border-gray-800">
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex flex-col md:flex-row items-center justify-between gap-4">
                    <p class="text-gray-600 dark:text-gray-400 text-sm">
                        {format!("© {year} {}.", info.name)}
                    </p>
                    <div class="flex gap-4">
                        {info
                            .social_links
                            .iter()
                            .map(|link| {
                                view! {
                                    <a
                                        href=link.url.clone()
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="text-gray-600 dark:text-gray-400 hover:text-black dark:hover:text-white transition-colors capitalize"
                                    >
                                        {link.label.clone()}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </footer>
    }
}
