use leptos::prelude::*;

use super::motion::{CountUp, ScaleOnScroll, StaggerChildren, StaggerItem};
use crate::content::{stats, Stat};

/// Delay between neighbouring cards, also used to offset their counters.
const CARD_STAGGER: f64 = 0.15;

#[component]
pub fn Stats() -> impl IntoView {
    view! {
        <section class="py-16 bg-gradient-to-r from-indigo-600 via-purple-600 to-pink-600 overflow-hidden relative">
            <div class="absolute inset-0 overflow-hidden">
                <div class="absolute -top-20 -left-20 w-40 h-40 bg-white/5 rounded-full blur-3xl animate-drift"></div>
                <div class="absolute -bottom-20 -right-20 w-60 h-60 bg-white/5 rounded-full blur-3xl animate-drift [animation-direction:reverse]"></div>
            </div>
            <ScaleOnScroll from=0.95 to=1.0>
                <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8 relative z-10">
                    <StaggerChildren
                        once=true
                        stagger=CARD_STAGGER
                        threshold=0.5
                        class="grid grid-cols-2 md:grid-cols-4 gap-8"
                    >
                        {stats()
                            .iter()
                            .enumerate()
                            .map(|(index, stat)| view! { <StatCard stat=stat index=index /> })
                            .collect_view()}
                    </StaggerChildren>
                </div>
            </ScaleOnScroll>
        </section>
    }
}

#[component]
fn StatCard(stat: &'static Stat, index: usize) -> impl IntoView {
    view! {
        <StaggerItem index=index class="text-center group transition-transform duration-300 hover:scale-105 hover:-translate-y-1">
            <div class="text-3xl mb-2 group-hover:animate-bounce">{stat.icon.clone()}</div>
            <div class="relative">
                <CountUp
                    end=stat.value
                    suffix=stat.suffix.clone()
                    once=true
                    delay={index as f64 * CARD_STAGGER}
                    duration=2.5
                    class="text-4xl sm:text-5xl font-bold text-white mb-2 relative z-10"
                />
                <div class="absolute inset-0 bg-white/20 blur-xl rounded-full opacity-30"></div>
            </div>
            <p class="text-white/80 text-sm sm:text-base">{stat.label.clone()}</p>
            <div class="h-0.5 bg-white/30 mt-4 mx-auto max-w-[60%]"></div>
        </StaggerItem>
    }
}
