//! Menu Card Component
//!
//! One dish: image, rating, prices and the nutrition / add-to-cart actions.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::binder::CardBinding;
use crate::cart::{self, ADDED_LABEL, ADD_LABEL};
use crate::config::{ADDED_FEEDBACK_MS, FADE_IN_DELAY_MS};
use crate::context::use_page_context;
use crate::notify::NotificationKind;
use crate::render::CardView;
use crate::store::PageStateStoreFields;

#[component]
pub fn MenuCard(card: CardView, binding: CardBinding) -> impl IntoView {
    let ctx = use_page_context();
    let store = ctx.store();
    let index = card.index;

    // Visibility follows the active filter; shown cards fade in
    let visible = Memo::new(move |_| store.menu().read().is_visible(index));
    let (faded_in, set_faded_in) = signal(false);
    Effect::new(move |_| {
        if visible.get() {
            spawn_local(async move {
                TimeoutFuture::new(FADE_IN_DELAY_MS).await;
                let _ = set_faded_in.try_set(true);
            });
        } else {
            set_faded_in.set(false);
        }
    });
    let card_style = move || {
        if !visible.get() {
            "display: none; opacity: 0;"
        } else if faded_in.get() {
            "display: block; opacity: 1;"
        } else {
            "display: block; opacity: 0;"
        }
    };

    let on_nutrition = binding.on_nutrition.clone();
    let show_nutrition = move |_| {
        if let Some(command) = on_nutrition.clone() {
            ctx.dispatch(command);
        }
    };

    let on_image = binding.on_image.clone();
    let zoom_image = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        if let Some(command) = on_image.clone() {
            ctx.dispatch(command);
        }
    };

    // Add-to-cart shows a toast and a short confirmation on the button
    let (added, set_added) = signal(false);
    let name = card.name.clone();
    let price = card.price.clone();
    let add_to_cart = move |_| {
        ctx.notify(cart::added_message(&name, &price), NotificationKind::Success);
        set_added.set(true);
        spawn_local(async move {
            TimeoutFuture::new(ADDED_FEEDBACK_MS).await;
            let _ = set_added.try_set(false);
        });
    };

    view! {
        <div class="menu-card" data-category=card.category_tag.clone() style=card_style>
            <div class="card-image-wrapper">
                <img
                    src=card.image.clone()
                    alt=card.name.clone()
                    class="card-food-img"
                    on:click=zoom_image
                />
            </div>
            <div class="card-content">
                <div class="card-header">
                    <div class="card-rating">
                        <span class="star">"⭐"</span>
                        <span class="rating-value">{card.rating.clone()}</span>
                    </div>
                    <h3 class="card-title">{card.name.clone()}</h3>
                </div>
                <p class="card-description">{card.description.clone()}</p>
                <div class="card-footer">
                    <div class=if card.has_discount() { "price-container discounted" } else { "price-container" }>
                        {card.original_price.clone().map(|p| view! {
                            <span class="original-price">{p}</span>
                        })}
                        <span class="card-price">{card.price.clone()}</span>
                    </div>
                    <button class="nutrition-btn" on:click=show_nutrition>
                        "Know your nutritions"
                    </button>
                    <button
                        class=move || if added.get() { "add-to-cart-btn added" } else { "add-to-cart-btn" }
                        on:click=add_to_cart
                    >
                        {move || if added.get() { ADDED_LABEL } else { ADD_LABEL }}
                    </button>
                </div>
            </div>
        </div>
    }
}
