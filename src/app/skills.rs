use leptos::{html, prelude::*};

use super::{heading::SectionTitle, motion::use_in_view};
use crate::{
    content::{skills, Section, Skill},
    motion::{easing::EASE_OUT_SOFT, reveal::Direction, viewport::TriggerConfig},
};

/// Seconds a bar takes to fill.
const FILL_DURATION: f64 = 1.2;
const BAR_STAGGER: f64 = 0.1;

fn bar_css(level: u8, filled: bool, index: usize) -> String {
    let width = if filled { level.min(100) } else { 0 };
    format!(
        "width: {width}%; transition: width {FILL_DURATION}s {} {}s;",
        EASE_OUT_SOFT.to_css(),
        index as f64 * BAR_STAGGER
    )
}

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id=Section::Skills.id() class="py-20 bg-white dark:bg-gray-950">
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionTitle
                    title="Skills"
                    subtitle="Technologies and tools I work with"
                    sweep=Direction::Right
                    mask_class="bg-purple-500"
                />
                <div class="grid md:grid-cols-2 gap-6 max-w-4xl mx-auto">
                    {skills()
                        .iter()
                        .enumerate()
                        .map(|(index, skill)| view! { <SkillBar skill=skill index=index /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillBar(skill: &'static Skill, index: usize) -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let in_view = use_in_view(node, TriggerConfig::new(0.5, true));
    let delay = index as f64 * BAR_STAGGER;

    view! {
        <div
            node_ref=node
            class="group"
            style=move || {
                let (opacity, x) = if in_view.get() { (1, 0) } else { (0, -30) };
                format!(
                    "opacity: {opacity}; transform: translateX({x}px); transition: opacity 0.5s ease {delay}s, transform 0.5s ease {delay}s;",
                )
            }
        >
            <div class="flex justify-between mb-2">
                <span class="font-medium group-hover:text-indigo-500 transition-colors">
                    {skill.name.clone()}
                </span>
                <span class="text-gray-500 tabular-nums">{format!("{}%", skill.level)}</span>
            </div>
            <div class="h-3 bg-gray-200 dark:bg-gray-700 rounded-full overflow-hidden relative">
                <div
                    class="h-full bg-gradient-to-r from-blue-500 via-indigo-500 to-purple-600 rounded-full"
                    style=move || bar_css(skill.level, in_view.get(), index)
                ></div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_fills_to_level_after_its_delay() {
        assert!(bar_css(85, false, 2).starts_with("width: 0%;"));
        let filled = bar_css(85, true, 2);
        assert!(filled.starts_with("width: 85%;"));
        assert!(filled.contains("1.2s"));
        assert!(filled.ends_with("0.2s;"));
    }
}
