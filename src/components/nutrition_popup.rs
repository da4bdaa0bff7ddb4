//! Nutrition Popup Component
//!
//! Shared popup filled by whichever card opened it last.

use leptos::prelude::*;

use crate::context::use_page_context;
use crate::overlay::{ClickTarget, NutritionPanel};
use crate::state::MenuCommand;
use crate::store::PageStateStoreFields;

#[component]
pub fn NutritionPopup() -> impl IntoView {
    let ctx = use_page_context();
    let store = ctx.store();

    let panel = Memo::new(move |_| store.menu().read().overlay().nutrition().cloned());
    let slot = move |pick: fn(&NutritionPanel) -> String| {
        move || panel.get().map(|p| pick(&p)).unwrap_or_default()
    };

    view! {
        <div
            id="nutritionOverlay"
            class=move || if panel.get().is_some() { "nutrition-overlay active" } else { "nutrition-overlay" }
            on:click=move |_| {
                ctx.dispatch(MenuCommand::Click(ClickTarget::PopupBackdrop));
            }
        >
            <div
                class="nutrition-popup"
                on:click=move |ev| ev.stop_propagation()
            >
                <button
                    id="closeNutrition"
                    class="nutrition-close"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        ctx.dispatch(MenuCommand::CloseOverlay);
                    }
                >
                    "×"
                </button>
                <h3>"Nutrition Facts"</h3>
                <div class="nutrition-grid">
                    <div class="nutrition-item">
                        <span class="nutrition-label">"Calories"</span>
                        <span id="caloriesValue" class="nutrition-value">{slot(|p| p.calories.clone())}</span>
                    </div>
                    <div class="nutrition-item">
                        <span class="nutrition-label">"Carbs"</span>
                        <span id="carbsValue" class="nutrition-value">{slot(|p| p.carbs.clone())}</span>
                    </div>
                    <div class="nutrition-item">
                        <span class="nutrition-label">"Protein"</span>
                        <span id="proteinValue" class="nutrition-value">{slot(|p| p.protein.clone())}</span>
                    </div>
                    <div class="nutrition-item">
                        <span class="nutrition-label">"Fats"</span>
                        <span id="fatsValue" class="nutrition-value">{slot(|p| p.fats.clone())}</span>
                    </div>
                </div>
            </div>
        </div>
    }
}
