#[cfg(any(feature = "ssr", feature = "rss"))]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use axum::Router;
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list_with_ssg, LeptosRoutes};
    use portfolio_site::app::*;

    init_tracing();

    let conf = get_configuration(None).expect("Should be able to read leptos configuration");
    let addr = conf.leptos_options.site_addr;
    let leptos_options = conf.leptos_options;

    // Renders `/` and one page per project slug into the site root.
    let (routes, static_routes) = generate_route_list_with_ssg({
        let leptos_options = leptos_options.clone();
        move || shell(leptos_options.clone())
    });
    static_routes.generate(&leptos_options).await;
    tracing::info!(
        routes = routes.len(),
        site_root = %leptos_options.site_root,
        "static pages generated"
    );

    let app = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptos_options);

    tracing::info!("listening on http://{}", &addr);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Should be able to bind site address");
    axum::serve(listener, app.into_make_service())
        .await
        .expect("Server should run until shutdown");
}

#[cfg(all(feature = "rss", not(feature = "ssr")))]
#[tokio::main]
async fn main() {
    use chrono::{DateTime, Utc};
    use portfolio_site::{content::projects, rss::build_channel};
    use std::fs::File;

    init_tracing();

    let built = DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .map(|d| d.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now());
    let channel = build_channel(projects(), built);

    let file = File::create("public/rss.xml").expect("Should be able to create RSS feed file");
    channel
        .pretty_write_to(file, b' ', 2)
        .expect("Should be able to write RSS feed");
    tracing::info!(items = channel.items().len(), "wrote public/rss.xml");
}

#[cfg(not(any(feature = "ssr", feature = "rss")))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}
