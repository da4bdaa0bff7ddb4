//! Menu Grid Component
//!
//! Renders the current generation of cards. Cards are keyed by
//! `(generation, index)` so a new render replaces every card.

use leptos::prelude::*;

use crate::components::MenuCard;
use crate::state::LoadState;
use crate::store::{use_page_store, PageStateStoreFields};

#[component]
pub fn MenuGrid() -> impl IntoView {
    let store = use_page_store();

    let entries = move || {
        let menu = store.menu().read();
        let generation = menu.generation().id();
        let entries: Vec<_> = menu
            .generation()
            .cards()
            .iter()
            .cloned()
            .zip(menu.bindings().cards().iter().cloned())
            .map(|(card, binding)| (generation, card, binding))
            .collect();
        entries
    };

    let load_state = move || match store.menu().read().load_state() {
        LoadState::Pending => "pending",
        LoadState::Ready => "ready",
        LoadState::Failed(_) => "failed",
    };

    view! {
        <div class="menu-cards-grid" data-state=load_state>
            <For
                each=entries
                key=|(generation, card, _)| (*generation, card.index)
                children=move |(_, card, binding)| {
                    view! { <MenuCard card=card binding=binding /> }
                }
            />
        </div>
    }
}
