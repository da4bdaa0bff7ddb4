//! Notification Toast Component

use leptos::prelude::*;

use crate::store::{use_page_store, PageStateStoreFields};

/// Bottom-right toast showing the current notification, if any
#[component]
pub fn NotificationToast() -> impl IntoView {
    let store = use_page_store();
    let current = Memo::new(move |_| store.notifications().read().current().cloned());

    view! {
        {move || current.get().map(|note| view! {
            <div class=note.kind.class() role="status">
                {note.message}
            </div>
        })}
    }
}
