//! Navigation Bar Component
//!
//! Top bar with the logo and panel buttons. Slides away while scrolling down.

use leptos::prelude::*;

use crate::chrome::Panel;
use crate::config::NAVBAR_HIDDEN_TOP;
use crate::dom;
use crate::store::{use_page_store, PageStateStoreFields};

#[component]
pub fn NavBar() -> impl IntoView {
    let store = use_page_store();

    dom::on_window_event("scroll", move || {
        store.chrome().write().scrolled_to(dom::scroll_top());
    });
    // Start from the top after a reload
    dom::on_window_event("beforeunload", || {
        if let Some(win) = web_sys::window() {
            win.scroll_to_with_x_and_y(0.0, 0.0);
        }
    });

    let navbar_style = move || {
        if store.chrome().read().navbar_hidden() {
            format!("top: {};", NAVBAR_HIDDEN_TOP)
        } else {
            "top: 0;".to_string()
        }
    };
    let toggle = move |panel: Panel| {
        move |_: web_sys::MouseEvent| {
            web_sys::console::log_1(&format!("[Nav] Toggle {:?}", panel).into());
            store.chrome().write().toggle(panel);
        }
    };

    view! {
        <nav id="navbar" class="navbar" style=navbar_style>
            <button id="menuBtn" class="nav-btn" title="Menu" on:click=toggle(Panel::Menu)>
                "☰"
            </button>
            <button id="logoBtn" class="nav-logo" on:click=move |_| dom::scroll_to_top_smooth()>
                "Zero Regret"
            </button>
            <div class="nav-actions">
                <button id="searchBtn" class="nav-btn" title="Search" on:click=toggle(Panel::Search)>
                    "🔍"
                </button>
                <button id="cartBtn" class="nav-btn" title="Cart" on:click=toggle(Panel::Cart)>
                    "🛒"
                </button>
            </div>
        </nav>
    }
}
