use leptos::{either::Either, prelude::*};
use leptos_meta::{Meta, Title};
use leptos_router::{components::A, hooks::use_params_map};

use super::{
    heading::TechChips,
    projects::{ExternalLinks, ProjectImage},
};
use crate::{
    config,
    content::{find_project, Project, Section},
};

/// Marks the response as 404 when rendered on the server.
pub fn set_not_found_status() {
    #[cfg(feature = "ssr")]
    if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
        response.set_status(http::StatusCode::NOT_FOUND);
    }
}

#[component]
pub fn ProjectPage() -> impl IntoView {
    let params = use_params_map();
    let slug = move || params.read().get("slug").unwrap_or_default();

    move || match find_project(&slug()) {
        Ok(project) => Either::Left(view! { <ProjectDetail project=project /> }),
        Err(err) => {
            #[cfg(feature = "ssr")]
            tracing::warn!(%err, "project page requested for unknown slug");
            #[cfg(not(feature = "ssr"))]
            log::warn!("{err}");
            Either::Right(view! { <ProjectNotFound /> })
        }
    }
}

#[component]
fn ProjectDetail(project: &'static Project) -> impl IntoView {
    view! {
        <Title text=format!("{} | Portfolio", project.title) />
        <Meta name="description" content=project.description.clone() />
        <main class="min-h-screen pt-24 pb-12">
            <div class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8">
                <a
                    href=config::asset(&format!("/{}", Section::Projects.anchor()))
                    class="inline-flex items-center gap-2 text-gray-600 dark:text-gray-400 hover:text-black dark:hover:text-white mb-8"
                >
                    "← Back to Projects"
                </a>
                <ProjectImage
                    project=project
                    class="relative h-64 sm:h-96 bg-gray-200 dark:bg-gray-800 rounded-xl mb-8"
                />
                <h1 class="text-3xl sm:text-4xl font-bold mb-4">{project.title.clone()}</h1>
                <TechChips technologies=project.technologies.clone() class="mb-6" />
                <div class="flex gap-4 mb-8">
                    <ExternalLinks project=project />
                </div>
                <div class="prose dark:prose-invert max-w-none">
                    <h2>"About This Project"</h2>
                    <p class="text-gray-600 dark:text-gray-400 leading-relaxed">
                        {project.long_description.clone()}
                    </p>
                </div>
            </div>
        </main>
    }
}

#[component]
fn ProjectNotFound() -> impl IntoView {
    set_not_found_status();

    view! {
        <Title text="Project Not Found" />
        <NotFoundBody message="There is no project at this address." />
    }
}

/// Fallback for any path outside the route table.
#[component]
pub fn NotFound() -> impl IntoView {
    set_not_found_status();

    view! {
        <Title text="Page Not Found" />
        <NotFoundBody message="This page could not be found." />
    }
}

#[component]
fn NotFoundBody(message: &'static str) -> impl IntoView {
    view! {
        <main class="min-h-screen flex flex-col items-center justify-center gap-6 px-4 text-center">
            <h1 class="text-6xl font-bold">"404"</h1>
            <p class="text-gray-600 dark:text-gray-400">{message}</p>
            <A href="/" attr:class="text-blue-600 dark:text-blue-400 hover:underline">
                "Go home"
            </A>
        </main>
    }
}
