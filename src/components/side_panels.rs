//! Side Panels Component
//!
//! Menu sidebar, cart sidebar, search bar and the dimming overlay behind them.
//! At most one panel is open.

use leptos::prelude::*;

use crate::chrome::Panel;
use crate::store::{use_page_store, PageStateStoreFields};

const MENU_LINKS: &[(&str, &str)] = &[
    ("#home", "Home"),
    ("#menu", "Menu"),
    ("#plans", "Meal Plans"),
    ("#contact", "Contact"),
];

#[component]
pub fn SidePanels() -> impl IntoView {
    let store = use_page_store();

    let panel_class = move |panel: Panel, base: &'static str| {
        move || {
            if store.chrome().read().is_open(panel) {
                format!("{} active", base)
            } else {
                base.to_string()
            }
        }
    };

    view! {
        <aside id="menuSidebar" class=panel_class(Panel::Menu, "menu-sidebar")>
            <ul class="menu-list">
                {MENU_LINKS.iter().map(|(href, label)| view! {
                    <li>
                        <a
                            href=*href
                            class="menu-item"
                            on:click=move |_| store.chrome().write().close(Panel::Menu)
                        >
                            {*label}
                        </a>
                    </li>
                }).collect_view()}
            </ul>
        </aside>

        <aside id="cartSidebar" class=panel_class(Panel::Cart, "cart-sidebar")>
            <h3>"Your Cart"</h3>
            <p class="cart-empty">"Your cart is empty"</p>
        </aside>

        <div id="searchContainer" class=panel_class(Panel::Search, "search-container")>
            <input type="text" class="search-input" placeholder="Search dishes..." />
            <button
                id="searchCloseBtn"
                class="search-close"
                on:click=move |_| store.chrome().write().close(Panel::Search)
            >
                "✕"
            </button>
        </div>

        <div
            id="overlay"
            class=move || if store.chrome().read().overlay_active() { "overlay active" } else { "overlay" }
            on:click=move |_| {
                web_sys::console::log_1(&"[Nav] Overlay clicked - closing all".into());
                store.chrome().write().close_all();
            }
        ></div>
    }
}
