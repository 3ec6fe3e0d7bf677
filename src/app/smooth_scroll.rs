use leptos::{ev, prelude::*};
use leptos_use::{
    use_document, use_event_listener, use_event_listener_with_options, use_window,
    UseEventListenerOptions,
};
use wasm_bindgen::JsCast;

use super::motion::use_frame_loop;
use crate::motion::{
    session::Flow,
    smooth_scroll::{anchor_id, SmoothScroller, WheelUnit},
};

struct Page {
    scroll_y: f64,
    viewport: f64,
    max_scroll: f64,
}

fn page() -> Option<Page> {
    let win = window();
    let scroll_y = win.scroll_y().ok()?;
    let viewport = win.inner_height().ok()?.as_f64()?;
    let height = win.document()?.document_element()?.scroll_height() as f64;
    Some(Page {
        scroll_y,
        viewport,
        max_scroll: height - viewport,
    })
}

/// Document top of the anchor target for `href`.
fn anchor_top(href: &str, scroll_y: f64) -> Option<f64> {
    let id = anchor_id(href)?;
    let Some(target) = document().get_element_by_id(id) else {
        log::debug!("no element for anchor #{id}");
        return None;
    };
    Some(target.get_bounding_client_rect().top() + scroll_y)
}

/// Glides the page for in-page anchor clicks and wheel scrolling.
///
/// Touch scrolling stays native; a touch cancels any running glide.
#[component]
pub fn SmoothScroll() -> impl IntoView {
    let scroller = StoredValue::new(SmoothScroller::default());

    let wake = use_frame_loop(move |dt| {
        let Some(next) = scroller.try_update_value(|s| s.tick(dt)) else {
            return Flow::Finished;
        };
        match next {
            Some(y) => {
                window().scroll_to_with_x_and_y(0.0, y);
                Flow::Continue
            }
            None => Flow::Idle,
        }
    });

    let _ = use_event_listener(use_document(), ev::click, move |ev| {
        let Some(el) = ev.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) else {
            return;
        };
        let Ok(Some(link)) = el.closest("a[href^='#']") else {
            return;
        };
        let Some(href) = link.get_attribute("href") else {
            return;
        };
        let Some(page) = page() else {
            return;
        };
        let Some(top) = anchor_top(&href, page.scroll_y) else {
            return;
        };
        ev.prevent_default();
        scroller.update_value(|s| {
            s.scroll_to(page.scroll_y, top, page.max_scroll);
        });
        wake.run(());
    });

    let _ = use_event_listener_with_options(
        use_window(),
        ev::wheel,
        move |ev| {
            // pinch zoom arrives as ctrl+wheel
            if ev.ctrl_key() || ev.delta_y() == 0.0 {
                return;
            }
            let Some(page) = page() else {
                return;
            };
            let delta =
                WheelUnit::from_delta_mode(ev.delta_mode()).to_pixels(ev.delta_y(), page.viewport);
            ev.prevent_default();
            scroller.update_value(|s| {
                s.wheel(page.scroll_y, delta, page.max_scroll);
            });
            wake.run(());
        },
        UseEventListenerOptions::default().passive(false),
    );
    let _ = use_event_listener(use_window(), ev::touchstart, move |_| {
        scroller.update_value(SmoothScroller::cancel)
    });
}
