use leptos::prelude::*;
use leptos_meta::Title;

use super::{
    about::About, contact::Contact, hero::Hero, projects::Projects, skills::Skills, stats::Stats,
};
use crate::content::personal_info;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text=format!("Portfolio | {}", personal_info().name) />
        <main>
            <Hero />
            <About />
            <Stats />
            <Projects />
            <Skills />
            <Contact />
        </main>
    }
}
