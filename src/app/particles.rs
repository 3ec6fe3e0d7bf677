use leptos::{ev, html, prelude::*};
use leptos_use::{use_event_listener, use_window};

use super::motion::use_frame_loop;
use crate::motion::{
    particles::{ParticleField, PARTICLE_COUNT, TRAIL_FADE},
    session::Flow,
};

fn window_size() -> (f64, f64) {
    let win = window();
    let w = win.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let h = win.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (w, h)
}

/// Full-viewport canvas of slowly drifting dots behind the hero.
#[component]
pub fn ParticleCanvas(#[prop(optional, into)] class: String) -> impl IntoView {
    let canvas = NodeRef::<html::Canvas>::new();
    let field = StoredValue::new(None::<ParticleField>);

    let draw = move |_dt: f64| {
        let Some(el) = canvas.get_untracked() else {
            return Flow::Finished;
        };
        let Some(ctx) = context_2d(&el) else {
            return Flow::Finished;
        };
        let Some(()) = field.try_update_value(|f| {
            let Some(f) = f.as_mut() else {
                return;
            };
            let (w, h) = f.size();
            ctx.set_fill_style_str(&format!("rgba(3, 7, 18, {TRAIL_FADE})"));
            ctx.fill_rect(0.0, 0.0, w, h);
            f.step();
            for p in f.particles() {
                ctx.begin_path();
                if ctx
                    .arc(p.x, p.y, p.radius, 0.0, std::f64::consts::TAU)
                    .is_err()
                {
                    continue;
                }
                ctx.set_fill_style_str(&format!("rgba(129, 140, 248, {})", p.opacity));
                ctx.fill();
            }
        }) else {
            return Flow::Finished;
        };
        Flow::Continue
    };
    let wake = use_frame_loop(draw);

    Effect::new(move |_| {
        let Some(el) = canvas.get() else {
            return;
        };
        let (w, h) = window_size();
        el.set_width(w as u32);
        el.set_height(h as u32);
        let mut rng = fastrand::Rng::with_seed(js_sys::Date::now() as u64);
        field.set_value(Some(ParticleField::new(&mut rng, PARTICLE_COUNT, w, h)));
        wake.run(());
    });

    let _ = use_event_listener(use_window(), ev::resize, move |_| {
        let Some(el) = canvas.get_untracked() else {
            return;
        };
        let (w, h) = window_size();
        el.set_width(w as u32);
        el.set_height(h as u32);
        field.update_value(|f| {
            if let Some(f) = f.as_mut() {
                f.resize(w, h);
            }
        });
    });

    view! { <canvas node_ref=canvas class=class aria-hidden="true"></canvas> }
}

fn context_2d(el: &web_sys::HtmlCanvasElement) -> Option<web_sys::CanvasRenderingContext2d> {
    use wasm_bindgen::JsCast;

    match el.get_context("2d") {
        Ok(Some(ctx)) => ctx.dyn_into().ok(),
        _ => {
            log::warn!("2d canvas context unavailable");
            None
        }
    }
}
