//! Browser Helpers
//!
//! Window-level effects that live outside any component's markup.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{ScrollBehavior, ScrollToOptions};

/// Suspend or restore page scrolling through `body.style.overflow`
pub fn set_scroll_locked(locked: bool) {
    let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };
    let value = if locked { "hidden" } else { "auto" };
    if let Err(e) = body.style().set_property("overflow", value) {
        web_sys::console::error_1(&e);
    }
}

pub fn scroll_top() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn scroll_to_top_smooth() {
    if let Some(win) = web_sys::window() {
        let opts = ScrollToOptions::new();
        opts.set_top(0.0);
        opts.set_behavior(ScrollBehavior::Smooth);
        win.scroll_to_with_scroll_to_options(&opts);
    }
}

/// Bind a window event listener for the lifetime of the page
pub fn on_window_event(event: &str, handler: impl FnMut() + 'static) {
    let closure = Closure::<dyn FnMut()>::new(handler);
    if let Some(win) = web_sys::window() {
        if let Err(e) = win.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
            web_sys::console::error_1(&e);
        }
    }
    closure.forget();
}
