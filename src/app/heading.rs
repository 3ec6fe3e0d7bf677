use leptos::prelude::*;

use super::motion::{BlurReveal, ScrollReveal, SlideReveal};
use crate::motion::reveal::Direction;

/// Section heading: rises into place while a coloured panel sweeps over it.
#[component]
pub fn SectionTitle(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: Option<String>,
    sweep: Direction,
    #[prop(into)] mask_class: String,
) -> impl IntoView {
    let spacing = if subtitle.is_some() { "mb-4" } else { "mb-12" };

    view! {
        <ScrollReveal once=true class=spacing>
            <SlideReveal once=true direction=sweep mask_class=mask_class>
                <h2 class="text-3xl sm:text-4xl font-bold text-center">{title}</h2>
            </SlideReveal>
        </ScrollReveal>
        {subtitle
            .map(|text| {
                view! {
                    <BlurReveal once=true delay=0.2 class="mb-12">
                        <p class="text-gray-600 dark:text-gray-400 text-center max-w-2xl mx-auto">
                            {text}
                        </p>
                    </BlurReveal>
                }
            })}
    }
}

#[component]
pub fn TechChips(technologies: Vec<String>, #[prop(optional, into)] class: String) -> impl IntoView {
    view! {
        <div class=format!("flex flex-wrap gap-2 {class}")>
            {technologies
                .into_iter()
                .map(|tech| {
                    view! {
                        <span class="px-3 py-1 bg-blue-100 dark:bg-blue-900 text-blue-800 dark:text-blue-200 text-sm rounded-full">
                            {tech}
                        </span>
                    }
                })
                .collect_view()}
        </div>
    }
}
