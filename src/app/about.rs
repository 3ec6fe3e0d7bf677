use leptos::prelude::*;

use super::{
    heading::SectionTitle,
    motion::{Parallax, ScrollReveal, StaggerChildren, StaggerItem, TextReveal},
};
use crate::{
    content::{experiences, personal_info, Section},
    motion::reveal::Direction,
};

const PARAGRAPH: &str = "text-gray-600 dark:text-gray-400 leading-relaxed";

#[component]
pub fn About() -> impl IntoView {
    let info = personal_info();
    let paragraphs = [
        format!(
            "Hello! I'm {}, a passionate developer based in {}. I enjoy creating things that live on the internet, whether that be websites, applications, or anything in between.",
            info.name, info.location
        ),
        "My goal is to always build products that provide pixel-perfect, performant experiences. I'm constantly learning and exploring new technologies to stay up-to-date with the latest industry trends.".to_string(),
        "When I'm not coding, you can find me exploring new technologies, contributing to open source, or enjoying a good cup of coffee.".to_string(),
    ];

    view! {
        <section id=Section::About.id() class="py-20 bg-white dark:bg-gray-950">
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionTitle title="About Me" sweep=Direction::Left mask_class="bg-indigo-500" />

                <div class="grid md:grid-cols-2 gap-12 items-center">
                    <StaggerChildren once=true direction=Direction::Left stagger=0.2 class="space-y-6">
                        {paragraphs
                            .into_iter()
                            .enumerate()
                            .map(|(i, text)| {
                                view! {
                                    <StaggerItem index=i>
                                        <TextReveal
                                            text=text
                                            once=true
                                            delay={i as f64 * 0.3}
                                            stagger=0.03
                                            class=PARAGRAPH
                                        />
                                    </StaggerItem>
                                }
                            })
                            .collect_view()}
                        <StaggerItem index=3>
                            <Experience />
                        </StaggerItem>
                    </StaggerChildren>

                    <ScrollReveal once=true direction=Direction::Right delay=0.3>
                        <div class="flex justify-center">
                            <Parallax speed={-0.2}>
                                <div class="relative w-64 h-64 transition-transform duration-300 hover:scale-105 hover:rotate-6">
                                    <div class="absolute inset-0 bg-gradient-to-br from-blue-500 to-purple-600 rounded-full animate-pulse opacity-20 scale-110"></div>
                                    <div class="absolute inset-0 bg-gradient-to-br from-indigo-500 to-pink-600 rounded-full animate-pulse opacity-20 scale-105 [animation-delay:0.5s]"></div>
                                    <div class="w-full h-full bg-gradient-to-br from-blue-500 to-purple-600 rounded-full flex items-center justify-center relative z-10">
                                        <span class="text-6xl animate-float">"👨‍💻"</span>
                                    </div>
                                </div>
                            </Parallax>
                        </div>
                    </ScrollReveal>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Experience() -> impl IntoView {
    view! {
        <ul class="space-y-4 border-l-2 border-indigo-500/40 pl-4">
            {experiences()
                .iter()
                .map(|e| {
                    view! {
                        <li>
                            <h3 class="font-semibold">{e.title.clone()}</h3>
                            <p class="text-sm text-indigo-500">
                                {format!("{} · {}", e.company, e.duration)}
                            </p>
                            <p class=PARAGRAPH>{e.description.clone()}</p>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}
