use leptos::{html, prelude::*};
use leptos_router::components::A;

use super::{
    heading::{SectionTitle, TechChips},
    motion::{element_rect, StaggerChildren, StaggerItem},
};
use crate::{
    config,
    content::{projects, Project, Section},
    motion::{pointer::card_tilt, reveal::Direction, Vec2},
};

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id=Section::Projects.id() class="py-20 bg-gray-50 dark:bg-gray-900">
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionTitle
                    title="My Projects"
                    subtitle="Here are some of the projects I've worked on. Each project is a unique piece of development."
                    sweep=Direction::Left
                    mask_class="bg-pink-500"
                />
                <StaggerChildren
                    once=true
                    delay=0.2
                    stagger=0.15
                    class="grid md:grid-cols-2 lg:grid-cols-3 gap-8"
                >
                    {projects()
                        .iter()
                        .enumerate()
                        .map(|(index, project)| {
                            view! {
                                <StaggerItem index=index>
                                    <ProjectCard project=project />
                                </StaggerItem>
                            }
                        })
                        .collect_view()}
                </StaggerChildren>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    let card = NodeRef::<html::Div>::new();
    let (tilt, set_tilt) = signal((0.0, 0.0));

    view! {
        <div
            node_ref=card
            class="bg-white/80 dark:bg-gray-800/80 backdrop-blur-sm rounded-xl overflow-hidden shadow-lg hover:shadow-2xl hover:shadow-indigo-500/20 transition-shadow duration-300 border border-gray-200/50 dark:border-gray-700/50"
            style=move || {
                let (x, y) = tilt.get();
                format!(
                    "transform: perspective(1000px) rotateX({x}deg) rotateY({y}deg); transform-style: preserve-3d;",
                )
            }
            on:mousemove=move |ev| {
                let Some(el) = card.get_untracked() else {
                    return;
                };
                let pointer = Vec2::new(ev.client_x() as f64, ev.client_y() as f64);
                set_tilt.set(card_tilt(&element_rect(&el), pointer));
            }
            on:mouseleave=move |_| set_tilt.set((0.0, 0.0))
        >
            <ProjectImage project=project class="relative h-48 bg-gray-200 dark:bg-gray-700" />
            <div class="p-6">
                <div class="flex items-center gap-2 mb-2">
                    <h3 class="text-xl font-bold">{project.title.clone()}</h3>
                    {project
                        .featured
                        .then(|| {
                            view! {
                                <span class="px-2 py-0.5 text-xs rounded-full bg-indigo-100 dark:bg-indigo-900/50 text-indigo-700 dark:text-indigo-300">
                                    "Featured"
                                </span>
                            }
                        })}
                </div>
                <p class="text-gray-600 dark:text-gray-400 mb-4">{project.description.clone()}</p>
                <TechChips technologies=project.technologies.clone() class="mb-4" />
                <div class="flex justify-between items-center">
                    <A href=project.path() attr:class="text-blue-600 dark:text-blue-400 hover:underline">
                        "View Details →"
                    </A>
                    <div class="flex gap-3">
                        <ExternalLinks project=project compact=true />
                    </div>
                </div>
            </div>
        </div>
    }
}

/// Cover image, or a placeholder when the project has none.
#[component]
pub fn ProjectImage(project: &'static Project, #[prop(into)] class: String) -> impl IntoView {
    view! {
        <div class=format!("overflow-hidden {class}")>
            {match &project.image {
                Some(src) => {
                    view! {
                        <img
                            src=config::asset(src)
                            alt=project.title.clone()
                            class="w-full h-full object-cover"
                        />
                    }
                        .into_any()
                }
                None => {
                    view! {
                        <div class="w-full h-full flex items-center justify-center text-4xl">
                            "🚀"
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}

/// Repository and live-demo links, skipping whichever is missing.
#[component]
pub fn ExternalLinks(project: &'static Project, #[prop(optional)] compact: bool) -> impl IntoView {
    let (code_class, live_class) = if compact {
        (
            "text-gray-600 dark:text-gray-400 hover:text-black dark:hover:text-white",
            "text-gray-600 dark:text-gray-400 hover:text-black dark:hover:text-white",
        )
    } else {
        (
            "inline-flex items-center gap-2 px-4 py-2 bg-gray-900 dark:bg-gray-100 text-white dark:text-black rounded-lg hover:opacity-80 transition-opacity",
            "inline-flex items-center gap-2 px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700 transition-colors",
        )
    };
    let (code_label, live_label) = if compact {
        ("Code", "Live")
    } else {
        ("View Code", "Live Demo")
    };

    let link = |url: &Option<String>, label: &'static str, class: &'static str| {
        url.clone().map(|url| {
            view! {
                <a href=url target="_blank" rel="noopener noreferrer" class=class>
                    {label}
                </a>
            }
        })
    };

    view! {
        {link(&project.repo_url, code_label, code_class)}
        {link(&project.live_url, live_label, live_class)}
    }
}
