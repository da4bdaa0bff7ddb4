//! Image Lightbox Component
//!
//! Full-size viewer for a card image. Clicking the background closes it;
//! clicking the image itself does not.

use leptos::prelude::*;

use crate::context::use_page_context;
use crate::overlay::ClickTarget;
use crate::state::MenuCommand;
use crate::store::PageStateStoreFields;

#[component]
pub fn ImageLightbox() -> impl IntoView {
    let ctx = use_page_context();
    let store = ctx.store();

    let view_model = Memo::new(move |_| store.menu().read().overlay().lightbox().cloned());

    view! {
        <div
            id="imageLightbox"
            class=move || if view_model.get().is_some() { "image-lightbox active" } else { "image-lightbox" }
            on:click=move |_| {
                ctx.dispatch(MenuCommand::Click(ClickTarget::LightboxBackdrop));
            }
        >
            <img
                id="lightboxImg"
                src=move || view_model.get().map(|v| v.src).unwrap_or_default()
                alt=move || view_model.get().map(|v| v.alt).unwrap_or_default()
                on:click=move |ev| ev.stop_propagation()
            />
        </div>
    }
}
