//! Filter Bar Component
//!
//! Category filter buttons; exactly one is active.

use leptos::prelude::*;

use crate::context::use_page_context;
use crate::state::MenuCommand;
use crate::store::PageStateStoreFields;

#[component]
pub fn FilterBar() -> impl IntoView {
    let ctx = use_page_context();
    let store = ctx.store();

    let controls = move || store.menu().read().controls().to_vec();

    view! {
        <div class="menu-filters">
            <For
                each=controls
                key=|control| control.token.clone()
                children=move |control| {
                    let token = control.token.clone();
                    let check = control.clone();
                    let is_active = move || store.menu().read().filter().is_active(&check);
                    view! {
                        <button
                            class=move || if is_active() { "filter-btn active" } else { "filter-btn" }
                            data-filter=control.token.clone()
                            on:click=move |_| {
                                ctx.dispatch(MenuCommand::SelectFilter(token.clone()));
                                let menu = store.menu().read_untracked();
                                let shown = menu.filter().visible_count(menu.generation());
                                web_sys::console::log_1(&format!("[Filter] {} -> {} cards shown", token, shown).into());
                            }
                        >
                            {control.label.clone()}
                        </button>
                    }
                }
            />
        </div>
    }
}
