mod about;
mod contact;
mod cursor;
mod footer;
mod heading;
mod hero;
mod homepage;
pub mod motion;
mod navbar;
mod particles;
mod project_page;
mod projects;
mod skills;
mod smooth_scroll;
mod stats;
mod theme;

use homepage::HomePage;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
    static_routes::StaticRoute,
    SsrMode,
};

use crate::{config, content::project_route_params};
use cursor::CustomCursor;
use footer::Footer;
use motion::ScrollProgressBar;
use navbar::Navbar;
use project_page::{NotFound, ProjectPage};
use smooth_scroll::SmoothScroll;
use theme::ThemeProvider;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="dark">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options root=config::base_path() />
                <link rel="icon" type="image/svg+xml" href=config::asset("/favicon.svg") />
                <link
                    rel="alternate"
                    type="application/rss+xml"
                    title="Projects"
                    href=config::asset("/rss.xml")
                />
                <link
                    rel="stylesheet"
                    id="leptos"
                    href=config::asset("/pkg/portfolio-site.css")
                />
                <MetaTags />
            </head>
            <body class="antialiased bg-white dark:bg-slate-950 text-gray-900 dark:text-white transition-colors duration-300 [@media(pointer:fine)]:cursor-none">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Meta name="description" content="Personal portfolio showcasing my projects and skills" />

        <Router base=config::base_path()>
            <ThemeProvider>
                <SmoothScroll />
                <CustomCursor />
                <ScrollProgressBar />
                <Navbar />
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route
                        path=path!("/")
                        view=HomePage
                        ssr=SsrMode::Static(StaticRoute::new())
                    />
                    <Route
                        path=path!("/projects/:slug")
                        view=ProjectPage
                        ssr=SsrMode::Static(
                            StaticRoute::new()
                                .prerender_params(|| async move { project_route_params() }),
                        )
                    />
                </Routes>
                <Footer />
            </ThemeProvider>
        </Router>
    }
}
