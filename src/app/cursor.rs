use leptos::{ev, prelude::*};
use leptos_use::{use_document, use_event_listener, use_media_query, use_window};
use wasm_bindgen::JsCast;

use crate::motion::{
    pointer::{CursorState, FINE_POINTER_QUERY, INTERACTIVE_SELECTOR},
    Vec2,
};

fn cursor_style(el: &web_sys::Element) -> String {
    window()
        .get_computed_style(el)
        .ok()
        .flatten()
        .and_then(|s| s.get_property_value("cursor").ok())
        .unwrap_or_default()
}

/// Replacement pointer: a dot under the mouse and a ring trailing behind it,
/// both growing over links and buttons.
///
/// Only mounts while the primary pointer is fine; the shell hides the native
/// cursor under the same media query.
#[component]
pub fn CustomCursor() -> impl IntoView {
    let fine_pointer = use_media_query(FINE_POINTER_QUERY);
    let (cursor, set_cursor) = signal(CursorState::default());

    let _ = use_event_listener(use_window(), ev::mousemove, move |ev| {
        let at = Vec2::new(ev.client_x() as f64, ev.client_y() as f64);
        set_cursor.update(|c| c.moved(at));
    });
    let _ = use_event_listener(use_document(), ev::mouseleave, move |_| {
        set_cursor.update(CursorState::left_window);
    });
    let _ = use_event_listener(use_document(), ev::mouseenter, move |_| {
        set_cursor.update(CursorState::entered_window);
    });
    let _ = use_event_listener(use_window(), ev::mouseover, move |ev| {
        let Some(el) = ev.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) else {
            return;
        };
        let inside_control = matches!(el.closest(INTERACTIVE_SELECTOR), Ok(Some(_)));
        let style = cursor_style(&el);
        set_cursor.update(|c| c.hovered(inside_control, &style));
    });

    move || {
        fine_pointer.get().then(|| {
            view! {
                <div
                    class="fixed top-0 left-0 w-4 h-4 -ml-2 -mt-2 rounded-full bg-white pointer-events-none z-[9999] mix-blend-difference transition-[transform,opacity] duration-100 ease-out"
                    style=move || cursor.get().dot_css()
                ></div>
                <div
                    class="fixed top-0 left-0 w-8 h-8 -ml-4 -mt-4 rounded-full border-white pointer-events-none z-[9998] mix-blend-difference transition-all duration-300 ease-out"
                    style=move || cursor.get().ring_css()
                ></div>
            }
        })
    }
}
