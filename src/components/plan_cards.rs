//! Plan Cards Component
//!
//! Weekly meal plans; picking one highlights it and confirms with a toast.

use leptos::prelude::*;

use crate::cart::{plan_message, PLANS};
use crate::context::use_page_context;
use crate::notify::NotificationKind;

#[component]
pub fn PlanCards() -> impl IntoView {
    let ctx = use_page_context();
    let (selected, set_selected) = signal::<Option<u32>>(None);

    view! {
        <section class="plans-section" id="plans">
            <h2>"Meal Plans"</h2>
            <div class="plan-cards">
                {PLANS.iter().map(|plan| {
                    let plan = *plan;
                    let is_selected = move || selected.get() == Some(plan.id);
                    view! {
                        <div class=move || if is_selected() { "plan-card selected" } else { "plan-card" }>
                            <h3>{plan.name}</h3>
                            <p class="plan-price">{plan.price}</p>
                            <ul class="plan-perks">
                                {plan.perks.iter().map(|perk| view! { <li>{*perk}</li> }).collect_view()}
                            </ul>
                            <button
                                class="plan-btn"
                                on:click=move |_| {
                                    set_selected.set(Some(plan.id));
                                    ctx.notify(plan_message(plan.name, plan.price), NotificationKind::Success);
                                }
                            >
                                "Choose plan"
                            </button>
                        </div>
                    }
                }).collect_view()}
            </div>
        </section>
    }
}
