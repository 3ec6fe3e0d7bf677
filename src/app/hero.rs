use leptos::prelude::*;

use super::{motion::MagneticLink, particles::ParticleCanvas};
use crate::content::{personal_info, Section};

const SOCIAL_CLASS: &str = "group w-12 h-12 flex items-center justify-center rounded-full bg-white/5 backdrop-blur-sm border border-white/10 transition-all duration-300 hover:bg-white/10 hover:border-indigo-400/50 text-slate-300 hover:text-indigo-400";

#[component]
pub fn Hero() -> impl IntoView {
    let info = personal_info();
    let socials = [
        ("GitHub", info.social("github"), "GH"),
        ("LinkedIn", info.social("linkedin"), "in"),
    ];

    view! {
        <section
            id=Section::Home.id()
            class="relative min-h-screen flex items-center justify-center overflow-hidden bg-gray-950"
        >
            <ParticleCanvas class="absolute inset-0 w-full h-full" />
            <div class="absolute top-20 -left-20 w-72 h-72 bg-indigo-600 rounded-full mix-blend-multiply blur-3xl opacity-20 animate-blob"></div>
            <div class="absolute top-40 -right-20 w-72 h-72 bg-purple-600 rounded-full mix-blend-multiply blur-3xl opacity-20 animate-blob [animation-delay:2s]"></div>
            <div class="absolute -bottom-20 left-1/2 w-72 h-72 bg-blue-600 rounded-full mix-blend-multiply blur-3xl opacity-20 animate-blob [animation-delay:4s]"></div>

            <div class="relative z-10 max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center space-y-8">
                    <div class="inline-flex items-center gap-2 px-4 py-2 rounded-full bg-indigo-500/10 border border-indigo-500/20 backdrop-blur-sm animate-fade-in">
                        <span class="relative flex h-2 w-2">
                            <span class="animate-ping absolute inline-flex h-full w-full rounded-full bg-indigo-400 opacity-75"></span>
                            <span class="relative inline-flex rounded-full h-2 w-2 bg-indigo-500"></span>
                        </span>
                        <span class="text-indigo-300 text-sm font-medium tracking-wide">
                            "Available for opportunities"
                        </span>
                    </div>

                    <h1 class="text-5xl sm:text-6xl md:text-7xl lg:text-8xl font-bold tracking-tight">
                        <span class="block text-white animate-slide-up opacity-0 [animation-delay:200ms] [animation-fill-mode:forwards]">
                            "Hi, I'm"
                        </span>
                        <span class="block bg-gradient-to-r from-indigo-400 via-purple-400 to-pink-400 bg-clip-text text-transparent animate-slide-up opacity-0 [animation-delay:400ms] [animation-fill-mode:forwards]">
                            {info.name.clone()}
                        </span>
                    </h1>

                    <div class="h-16 flex items-center justify-center">
                        <p class="text-xl sm:text-2xl md:text-3xl text-indigo-200/80 font-light animate-slide-up opacity-0 [animation-delay:600ms] [animation-fill-mode:forwards]">
                            <span class="inline-block animate-typing overflow-hidden whitespace-nowrap border-r-4 border-indigo-400 pr-1">
                                {format!("{} & UI/UX Enthusiast", info.title)}
                            </span>
                        </p>
                    </div>

                    <p class="max-w-2xl mx-auto text-base sm:text-lg text-slate-300/70 leading-relaxed animate-fade-in-up opacity-0 [animation-delay:800ms] [animation-fill-mode:forwards]">
                        "Crafting beautiful, performant web experiences with modern technologies. Passionate about clean code, elegant design, and solving complex problems."
                    </p>

                    <div class="flex flex-col sm:flex-row gap-4 justify-center items-center pt-4 animate-fade-in-up opacity-0 [animation-delay:1000ms] [animation-fill-mode:forwards]">
                        <MagneticLink
                            href=Section::Projects.anchor()
                            strength=0.4
                            class="group relative px-8 py-4 bg-gradient-to-r from-indigo-600 to-purple-600 text-white rounded-lg font-semibold overflow-hidden transition-shadow duration-300 hover:shadow-2xl hover:shadow-indigo-500/50"
                        >
                            <span class="relative z-10">"View My Work →"</span>
                        </MagneticLink>
                        <MagneticLink
                            href=Section::Contact.anchor()
                            strength=0.4
                            class="group px-8 py-4 bg-white/5 backdrop-blur-sm text-white rounded-lg font-semibold border border-white/10 transition-colors duration-300 hover:bg-white/10 hover:border-indigo-400/50"
                        >
                            "Get In Touch"
                        </MagneticLink>
                    </div>

                    <div class="flex gap-6 justify-center pt-8 animate-fade-in opacity-0 [animation-delay:1200ms] [animation-fill-mode:forwards]">
                        {socials
                            .into_iter()
                            .filter_map(|(label, url, glyph)| url.map(|url| (label, url, glyph)))
                            .map(|(label, url, glyph)| {
                                view! {
                                    <MagneticLink
                                        href=url
                                        strength=0.5
                                        external=true
                                        aria_label=label
                                        class=SOCIAL_CLASS
                                    >
                                        <span class="font-bold">{glyph}</span>
                                    </MagneticLink>
                                }
                            })
                            .collect_view()}
                        <MagneticLink
                            href=format!("mailto:{}", info.email)
                            strength=0.5
                            aria_label="Email"
                            class=SOCIAL_CLASS
                        >
                            "✉"
                        </MagneticLink>
                    </div>
                </div>
            </div>

            <div class="absolute bottom-8 left-1/2 -translate-x-1/2 animate-bounce">
                <div class="flex flex-col items-center gap-2 text-indigo-300/60">
                    <span class="text-sm font-medium">"Scroll Down"</span>
                    <span aria-hidden="true">"↓"</span>
                </div>
            </div>
        </section>
    }
}
