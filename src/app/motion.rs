//! Components that drive the `crate::motion` math from the DOM.
//!
//! Reveals hand their transitions to the browser through inline
//! `transition` styles; anything spring driven or counted runs on a frame
//! loop from [`use_frame_loop`].

use leptos::{ev, html, prelude::*};
use leptos_use::{
    use_event_listener, use_intersection_observer_with_options, use_window,
    UseIntersectionObserverOptions,
};

use crate::motion::{
    count_up::CountUp as Counter,
    pointer::Magnetic,
    reveal::{split_words, Direction, Reveal, SlideMask},
    scroll::{document_progress, ScrollTransform},
    session::Flow,
    spring::{Spring, MAGNETIC_SPRING, SCROLL_SPRING},
    viewport::{InViewLatch, TriggerConfig},
    Rect, Vec2,
};

/// Browsers report ratios a hair under the threshold they just crossed.
const RATIO_SLACK: f64 = 1e-3;

/// In-view signal for the element behind `target`.
///
/// Stays false on the server and until the element is mounted.
pub fn use_in_view(target: NodeRef<html::Div>, trigger: TriggerConfig) -> ReadSignal<bool> {
    let (in_view, set_in_view) = signal(false);
    let mut latch = InViewLatch::new(trigger);

    use_intersection_observer_with_options(
        target,
        move |entries, observer| {
            for entry in entries {
                let fraction = if entry.is_intersecting() {
                    (entry.intersection_ratio() + RATIO_SLACK).min(1.0)
                } else {
                    0.0
                };
                let now = latch.observe(fraction);
                if now != in_view.get_untracked() {
                    set_in_view.set(now);
                }
            }
            if latch.is_final() {
                observer.disconnect();
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![0.0, trigger.threshold]),
    );

    in_view
}

/// Runs `on_frame` once per animation frame after being woken.
///
/// The loop pauses itself when `on_frame` returns [`Flow::Idle`] and stops
/// for good on [`Flow::Finished`] or when the owning component unmounts.
/// The returned callback wakes it.
pub fn use_frame_loop<F>(on_frame: F) -> Callback<()>
where
    F: FnMut(f64) -> Flow + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        use crate::motion::session::FrameSession;
        use leptos_use::{use_raf_fn_with_options, utils::Pausable, UseRafFnOptions};

        let session = StoredValue::new_local(FrameSession::new(on_frame));
        let (idle, set_idle) = signal(false);
        let Pausable { pause, resume, .. } = use_raf_fn_with_options(
            move |args| {
                let flow = session
                    .try_update_value(|s| s.frame(args.timestamp))
                    .unwrap_or(Flow::Finished);
                if flow != Flow::Continue {
                    set_idle.set(true);
                }
            },
            UseRafFnOptions::default().immediate(false),
        );

        Effect::new({
            let pause = pause.clone();
            move |_| {
                if idle.get() {
                    pause();
                }
            }
        });
        on_cleanup({
            let pause = pause.clone();
            move || {
                session.try_update_value(|s| s.stop());
                pause();
            }
        });

        Callback::new(move |_: ()| {
            set_idle.set(false);
            resume();
        })
    }

    #[cfg(not(feature = "hydrate"))]
    {
        drop(on_frame);
        Callback::new(|_: ()| {})
    }
}

pub(crate) fn element_rect(el: &web_sys::Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(r.left(), r.top(), r.width(), r.height())
}

pub(crate) fn viewport_height() -> f64 {
    window()
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

#[component]
fn RevealBlock(reveal: Reveal, children: Children, class: String) -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let in_view = use_in_view(node, reveal.trigger);

    view! {
        <div node_ref=node class=class style=move || reveal.child_css(in_view.get(), 0)>
            {children()}
        </div>
    }
}

/// Slides its content in from `direction` once scrolled into view.
#[component]
pub fn ScrollReveal(
    children: Children,
    once: bool,
    #[prop(optional)] direction: Direction,
    #[prop(optional)] delay: f64,
    #[prop(default = 0.6)] duration: f64,
    #[prop(default = 60.0)] distance: f64,
    #[prop(default = 0.2)] threshold: f64,
    /// Also grow from 90% while revealing.
    #[prop(optional)]
    scale: bool,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let mut reveal = Reveal::slide(direction, TriggerConfig::new(threshold, once))
        .with_delay(delay)
        .with_duration(duration)
        .with_distance(distance);
    if scale {
        reveal = reveal.with_scale(0.9);
    }

    view! { <RevealBlock reveal=reveal class=class>{children()}</RevealBlock> }
}

#[component]
pub fn FadeInWhenVisible(
    children: Children,
    once: bool,
    #[prop(optional)] delay: f64,
    #[prop(default = 0.6)] duration: f64,
    #[prop(default = 0.3)] threshold: f64,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let reveal = Reveal::fade(TriggerConfig::new(threshold, once))
        .with_delay(delay)
        .with_duration(duration);

    view! { <RevealBlock reveal=reveal class=class>{children()}</RevealBlock> }
}

#[component]
pub fn BlurReveal(
    children: Children,
    once: bool,
    #[prop(optional)] delay: f64,
    #[prop(default = 0.8)] duration: f64,
    #[prop(default = 0.3)] threshold: f64,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let reveal = Reveal::blur(TriggerConfig::new(threshold, once))
        .with_delay(delay)
        .with_duration(duration);

    view! { <RevealBlock reveal=reveal class=class>{children()}</RevealBlock> }
}

#[derive(Clone, Copy)]
struct StaggerContext {
    reveal: Reveal,
    in_view: ReadSignal<bool>,
}

/// Reveals each nested [`StaggerItem`] one after another.
#[component]
pub fn StaggerChildren(
    children: Children,
    once: bool,
    #[prop(optional)] direction: Direction,
    #[prop(optional)] delay: f64,
    #[prop(default = 0.1)] stagger: f64,
    #[prop(default = 0.1)] threshold: f64,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let reveal = Reveal::stagger(direction, TriggerConfig::new(threshold, once))
        .with_delay(delay)
        .with_stagger(stagger);
    let in_view = use_in_view(node, reveal.trigger);
    provide_context(StaggerContext { reveal, in_view });

    view! {
        <div node_ref=node class=class>
            {children()}
        </div>
    }
}

/// The `index`-th child of a [`StaggerChildren`].
#[component]
pub fn StaggerItem(
    children: Children,
    index: usize,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let StaggerContext { reveal, in_view } = expect_context::<StaggerContext>();

    view! {
        <div class=class style=move || reveal.child_css(in_view.get(), index)>
            {children()}
        </div>
    }
}

#[component]
pub fn TextReveal(
    #[prop(into)] text: String,
    once: bool,
    #[prop(optional)] delay: f64,
    #[prop(default = 0.05)] stagger: f64,
    #[prop(default = 0.5)] threshold: f64,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let reveal = Reveal::words(TriggerConfig::new(threshold, once))
        .with_delay(delay)
        .with_stagger(stagger);
    let in_view = use_in_view(node, reveal.trigger);

    let words = split_words(&text)
        .into_iter()
        .enumerate()
        .map(|(i, word)| {
            view! {
                <span class="inline-block mr-[0.25em]" style=move || reveal.child_css(in_view.get(), i)>
                    {word.to_string()}
                </span>
            }
        })
        .collect_view();

    view! {
        <div node_ref=node class=format!("flex flex-wrap [perspective:1000px] {class}")>
            {words}
        </div>
    }
}

#[component]
pub fn CharacterReveal(
    #[prop(into)] text: String,
    once: bool,
    #[prop(optional)] delay: f64,
    #[prop(default = 0.5)] threshold: f64,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let reveal = Reveal::chars(TriggerConfig::new(threshold, once)).with_delay(delay);
    let in_view = use_in_view(node, reveal.trigger);

    let chars = text
        .chars()
        .enumerate()
        .map(|(i, c)| {
            let shown = if c == ' ' { '\u{a0}' } else { c };
            view! {
                <span class="inline-block" style=move || reveal.child_css(in_view.get(), i)>
                    {shown.to_string()}
                </span>
            }
        })
        .collect_view();

    view! {
        <div node_ref=node class=format!("inline-block {class}")>
            {chars}
        </div>
    }
}

/// A coloured panel sweeps across and leaves the content behind it.
#[component]
pub fn SlideReveal(
    children: Children,
    once: bool,
    #[prop(default = Direction::Left)] direction: Direction,
    #[prop(optional)] delay: f64,
    #[prop(default = 0.3)] threshold: f64,
    #[prop(default = "bg-indigo-600".to_string(), into)] mask_class: String,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let mask = SlideMask::new(direction, TriggerConfig::new(threshold, once)).with_delay(delay);
    let in_view = use_in_view(node, mask.trigger);

    view! {
        <div node_ref=node class=format!("relative overflow-hidden {class}")>
            <div style=move || mask.content_css(in_view.get())>{children()}</div>
            <div
                class=format!("absolute inset-0 z-10 {mask_class}")
                style=move || mask.mask_css(in_view.get())
            ></div>
        </div>
    }
}

/// Counts up to `end` when scrolled into view.
#[component]
pub fn CountUp(
    end: f64,
    once: bool,
    #[prop(optional)] start: f64,
    #[prop(default = 2.0)] duration: f64,
    #[prop(optional)] delay: f64,
    #[prop(optional)] decimals: usize,
    #[prop(optional, into)] prefix: String,
    #[prop(optional, into)] suffix: String,
    #[prop(default = 0.5)] threshold: f64,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let counter = Counter::new(end)
        .starting_at(start)
        .duration(duration)
        .delay(delay)
        .decimals(decimals)
        .prefix(prefix)
        .suffix(suffix);
    let (text, set_text) = signal(counter.display_at(0.0));
    let counter = StoredValue::new(counter);
    let elapsed = StoredValue::new(0.0_f64);
    let in_view = use_in_view(node, TriggerConfig::new(threshold, once));

    let wake = use_frame_loop(move |dt| {
        let Some(now) = elapsed.try_update_value(|e| {
            *e += dt;
            *e
        }) else {
            return Flow::Finished;
        };
        let Some((shown, done)) = counter.try_with_value(|c| (c.display_at(now), c.is_done(now)))
        else {
            return Flow::Finished;
        };
        set_text.set(shown);
        if done {
            Flow::Idle
        } else {
            Flow::Continue
        }
    });

    Effect::new(move |_| {
        if in_view.get() {
            elapsed.set_value(0.0);
            wake.run(());
        }
    });

    view! {
        <div node_ref=node class=format!("inline-block tabular-nums {class}")>
            {text}
        </div>
    }
}

#[component]
fn ScrollDriven(transform: ScrollTransform, children: Children, class: String) -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let (css, set_css) = signal(transform.css());
    let transform = StoredValue::new(transform);

    let wake = use_frame_loop(move |dt| {
        let Some((next, settled)) = transform.try_update_value(|t| {
            t.tick(dt);
            (t.css(), t.is_settled())
        }) else {
            return Flow::Finished;
        };
        set_css.set(next);
        if settled {
            Flow::Idle
        } else {
            Flow::Continue
        }
    });

    Effect::new(move |_| {
        let Some(el) = node.get() else {
            return;
        };
        let rect = element_rect(&el);
        transform.update_value(|t| t.jump(rect.top, rect.height, viewport_height()));
        set_css.set(transform.with_value(ScrollTransform::css));
    });

    let observe = move || {
        let Some(el) = node.get_untracked() else {
            return;
        };
        let rect = element_rect(&el);
        transform.update_value(|t| {
            t.observe(rect.top, rect.height, viewport_height());
        });
        wake.run(());
    };
    let _ = use_event_listener(use_window(), ev::scroll, move |_| observe());
    let _ = use_event_listener(use_window(), ev::resize, move |_| observe());

    // outer box is measured, inner box is transformed
    view! {
        <div node_ref=node>
            <div class=class style=css>
                {children()}
            </div>
        </div>
    }
}

/// Drifts vertically by up to `speed * 100` px as it crosses the viewport.
#[component]
pub fn Parallax(
    children: Children,
    #[prop(default = 0.5)] speed: f64,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    view! {
        <ScrollDriven transform=ScrollTransform::parallax(speed) class=class>
            {children()}
        </ScrollDriven>
    }
}

#[component]
pub fn HorizontalParallax(
    children: Children,
    #[prop(default = 0.5)] speed: f64,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    view! {
        <ScrollDriven transform=ScrollTransform::horizontal_parallax(speed) class=class>
            {children()}
        </ScrollDriven>
    }
}

/// Grows from `from` to `to` until its centre reaches the viewport centre.
#[component]
pub fn ScaleOnScroll(
    children: Children,
    #[prop(default = 0.8)] from: f64,
    #[prop(default = 1.0)] to: f64,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    view! {
        <ScrollDriven transform=ScrollTransform::scale((from, to)) class=class>
            {children()}
        </ScrollDriven>
    }
}

#[component]
pub fn RotateOnScroll(
    children: Children,
    #[prop(optional)] from: f64,
    #[prop(default = 360.0)] to: f64,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    view! {
        <ScrollDriven transform=ScrollTransform::rotate((from, to)) class=class>
            {children()}
        </ScrollDriven>
    }
}

/// Reading-progress bar pinned to the top of the page.
#[component]
pub fn ScrollProgressBar(#[prop(optional, into)] class: String) -> impl IntoView {
    let spring = StoredValue::new(Spring::new(SCROLL_SPRING.resting_for_span(1.0), 0.0));
    let (progress, set_progress) = signal(0.0_f64);

    let wake = use_frame_loop(move |dt| {
        let Some((value, settled)) = spring.try_update_value(|s| (s.step(dt), s.is_settled()))
        else {
            return Flow::Finished;
        };
        set_progress.set(value);
        if settled {
            Flow::Idle
        } else {
            Flow::Continue
        }
    });

    let _ = use_event_listener(use_window(), ev::scroll, move |_| {
        let win = window();
        let Some(height) = win
            .document()
            .and_then(|d| d.document_element())
            .map(|el| el.scroll_height() as f64)
        else {
            return;
        };
        let scroll_y = win.scroll_y().unwrap_or(0.0);
        let target = document_progress(scroll_y, height, viewport_height());
        spring.update_value(|s| s.set_target(target));
        wake.run(());
    });

    view! {
        <div
            class=format!(
                "fixed top-0 left-0 right-0 h-1 z-50 origin-left bg-gradient-to-r from-indigo-500 via-purple-500 to-pink-500 {class}",
            )
            style=move || format!("transform: scaleX({});", progress.get())
        ></div>
    }
}

/// Pointer pull shared by the magnetic link and button.
#[derive(Clone, Copy)]
pub struct Magnet {
    magnetic: StoredValue<Magnetic>,
    offset: ReadSignal<Vec2>,
    set_offset: WriteSignal<Vec2>,
    wake: Callback<()>,
}

impl Magnet {
    pub fn pointer_move(&self, el: &web_sys::Element, ev: &ev::MouseEvent) {
        let rect = element_rect(el);
        let pointer = Vec2::new(ev.client_x() as f64, ev.client_y() as f64);
        if let Some(at) = self.magnetic.try_update_value(|m| m.pointer_move(&rect, pointer)) {
            self.set_offset.set(at);
        }
    }

    pub fn pointer_leave(&self) {
        self.magnetic.update_value(Magnetic::pointer_leave);
        self.wake.run(());
    }

    pub fn style(&self) -> String {
        let Vec2 { x, y } = self.offset.get();
        format!("transform: translate({x}px, {y}px);")
    }
}

pub fn use_magnet(strength: f64) -> Magnet {
    let magnetic = StoredValue::new(Magnetic::new(strength, MAGNETIC_SPRING));
    let (offset, set_offset) = signal(Vec2::ZERO);

    let wake = use_frame_loop(move |dt| {
        let Some((at, moving)) = magnetic.try_update_value(|m| (m.tick(dt), m.is_animating()))
        else {
            return Flow::Finished;
        };
        set_offset.set(at);
        if moving {
            Flow::Continue
        } else {
            Flow::Idle
        }
    });

    Magnet {
        magnetic,
        offset,
        set_offset,
        wake,
    }
}

/// A link that leans toward the pointer and springs back on leave.
#[component]
pub fn MagneticLink(
    children: Children,
    #[prop(into)] href: String,
    #[prop(default = 0.3)] strength: f64,
    #[prop(optional)] external: bool,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let node = NodeRef::<html::A>::new();
    let magnet = use_magnet(strength);

    let (target, rel) = if external {
        (Some("_blank"), Some("noopener noreferrer"))
    } else {
        (None, None)
    };

    view! {
        <a
            node_ref=node
            href=href
            target=target
            rel=rel
            aria-label=aria_label
            class=format!("inline-block {class}")
            style=move || magnet.style()
            on:mousemove=move |ev| {
                if let Some(el) = node.get_untracked() {
                    magnet.pointer_move(&el, &ev);
                }
            }
            on:mouseleave=move |_| magnet.pointer_leave()
        >
            {children()}
        </a>
    }
}

#[component]
pub fn MagneticButton(
    children: Children,
    #[prop(default = 0.3)] strength: f64,
    #[prop(default = "button")] kind: &'static str,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let node = NodeRef::<html::Button>::new();
    let magnet = use_magnet(strength);

    view! {
        <button
            node_ref=node
            type=kind
            class=class
            style=move || magnet.style()
            on:mousemove=move |ev| {
                if let Some(el) = node.get_untracked() {
                    magnet.pointer_move(&el, &ev);
                }
            }
            on:mouseleave=move |_| magnet.pointer_leave()
        >
            {children()}
        </button>
    }
}
