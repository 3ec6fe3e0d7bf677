use leptos::{html, prelude::*};

use super::{
    heading::SectionTitle,
    motion::{use_in_view, MagneticButton, MagneticLink, ScrollReveal},
};
use crate::{
    content::{personal_info, Section},
    motion::{reveal::Direction, viewport::TriggerConfig},
};

const FIELD_CLASS: &str = "w-full px-4 py-3 bg-gray-100 dark:bg-gray-800 rounded-lg focus:outline-none focus:ring-2 focus:ring-indigo-500 transition-all duration-300 border border-transparent hover:border-indigo-300 dark:hover:border-indigo-700";

fn mailto(to: &str, name: &str, from: &str, message: &str) -> String {
    let subject = String::from(js_sys::encode_uri_component(&format!("Hello from {name}")));
    let body = String::from(js_sys::encode_uri_component(&format!(
        "{message}\n\n{name} <{from}>"
    )));
    format!("mailto:{to}?subject={subject}&body={body}")
}

/// Slides `x_from` px sideways into place after `delay` seconds in view.
fn slide_css(in_view: bool, x_from: f64, y_from: f64, duration: f64, delay: f64) -> String {
    let (opacity, x, y) = if in_view { (1.0, 0.0, 0.0) } else { (0.0, x_from, y_from) };
    format!(
        "opacity: {opacity}; transform: translate({x}px, {y}px); transition: opacity {duration}s ease {delay}s, transform {duration}s ease {delay}s;",
    )
}

#[component]
fn InfoItem(title: &'static str, icon: &'static str, index: usize, children: Children) -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let in_view = use_in_view(node, TriggerConfig::new(0.5, true));
    let delay = index as f64 * 0.15;

    view! {
        <div
            node_ref=node
            class="flex items-center gap-4 group"
            style=move || slide_css(in_view.get(), -30.0, 0.0, 0.5, delay)
        >
            <div class="p-3 bg-blue-100 dark:bg-blue-900 rounded-full transition-transform group-hover:scale-110 group-hover:rotate-12">
                {icon}
            </div>
            <div>
                <h3 class="font-medium">{title}</h3>
                {children()}
            </div>
        </div>
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    let info = personal_info();
    let form = NodeRef::<html::Div>::new();
    let form_in_view = use_in_view(form, TriggerConfig::new(0.3, true));
    let name_ref = NodeRef::<html::Input>::new();
    let email_ref = NodeRef::<html::Input>::new();
    let message_ref = NodeRef::<html::Textarea>::new();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let (Some(name), Some(email), Some(message)) = (
            name_ref.get_untracked(),
            email_ref.get_untracked(),
            message_ref.get_untracked(),
        ) else {
            return;
        };
        let href = mailto(
            &personal_info().email,
            &name.value(),
            &email.value(),
            &message.value(),
        );
        if window().location().set_href(&href).is_err() {
            log::warn!("could not open mail client");
        }
    };

    let field = move |index: usize| {
        move || slide_css(form_in_view.get(), 0.0, 20.0, 0.4, index as f64 * 0.1)
    };

    view! {
        <section id=Section::Contact.id() class="py-20 bg-gray-50 dark:bg-gray-900">
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionTitle
                    title="Get In Touch"
                    subtitle="I'm currently open for new opportunities. Whether you have a question or just want to say hi, feel free to reach out!"
                    sweep=Direction::Right
                    mask_class="bg-blue-500"
                />
                <div class="grid md:grid-cols-2 gap-12 max-w-4xl mx-auto">
                    <div class="space-y-6">
                        <InfoItem title="Email" icon="✉" index=0>
                            <MagneticLink
                                href=format!("mailto:{}", info.email)
                                strength=0.3
                                class="text-gray-600 dark:text-gray-400 hover:text-indigo-600 dark:hover:text-indigo-400 transition-colors"
                            >
                                {info.email.clone()}
                            </MagneticLink>
                        </InfoItem>
                        <InfoItem title="Location" icon="📍" index=1>
                            <p class="text-gray-600 dark:text-gray-400">{info.location.clone()}</p>
                        </InfoItem>
                        <ScrollReveal once=true direction=Direction::Left delay=0.4>
                            <div class="mt-8 p-6 bg-gradient-to-br from-indigo-50 to-purple-50 dark:from-indigo-900/20 dark:to-purple-900/20 rounded-xl border border-indigo-100 dark:border-indigo-800">
                                <p class="text-sm text-gray-600 dark:text-gray-400 italic">
                                    "\"The best way to predict the future is to create it.\""
                                </p>
                            </div>
                        </ScrollReveal>
                    </div>

                    <div
                        node_ref=form
                        style=move || slide_css(form_in_view.get(), 30.0, 0.0, 0.6, 0.0)
                    >
                        <form class="space-y-4" on:submit=on_submit>
                            <div style=field(0)>
                                <input node_ref=name_ref type="text" placeholder="Your Name" required=true class=FIELD_CLASS />
                            </div>
                            <div style=field(1)>
                                <input node_ref=email_ref type="email" placeholder="Your Email" required=true class=FIELD_CLASS />
                            </div>
                            <div style=field(2)>
                                <textarea
                                    node_ref=message_ref
                                    rows=4
                                    placeholder="Your Message"
                                    required=true
                                    class=format!("{FIELD_CLASS} resize-none")
                                ></textarea>
                            </div>
                            <div style=field(3)>
                                <MagneticButton
                                    kind="submit"
                                    strength=0.2
                                    class="w-full py-3 bg-gradient-to-r from-indigo-600 to-purple-600 text-white rounded-lg hover:from-indigo-700 hover:to-purple-700 transition-colors duration-300 font-medium"
                                >
                                    "Send Message"
                                </MagneticButton>
                            </div>
                        </form>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_items_sit_offset_and_transparent() {
        let hidden = slide_css(false, -30.0, 0.0, 0.5, 0.15);
        assert!(hidden.starts_with("opacity: 0; transform: translate(-30px, 0px);"));
        let shown = slide_css(true, -30.0, 0.0, 0.5, 0.15);
        assert!(shown.starts_with("opacity: 1; transform: translate(0px, 0px);"));
        assert!(shown.ends_with("transform 0.5s ease 0.15s;"));
    }
}
