//! Zero Regret App
//!
//! Root component: loads the catalog once on mount and lays out the page.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::binder::WidgetDirectory;
use crate::catalog;
use crate::components::{
    ContactSection, FilterBar, ImageLightbox, MenuGrid, NavBar, NotificationToast, NutritionPopup,
    PlanCards, SidePanels,
};
use crate::config::CATALOG_URL;
use crate::context::PageContext;
use crate::dom;
use crate::store::{PageState, PageStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    // Popup and lightbox are always mounted below
    let store = Store::new(PageState::new(WidgetDirectory::default()));
    provide_context(store);
    provide_context(PageContext::new(store));

    // Load the catalog once; a failure leaves the menu empty
    Effect::new(move |_| {
        spawn_local(async move {
            let loaded = catalog::fetch_catalog(CATALOG_URL).await;
            if let Ok(items) = &loaded {
                web_sys::console::log_1(&format!("[Menu] Loaded {} items", items.len()).into());
            }

            let field = store.menu();
            let mut menu = field.write();
            match menu.load(loaded) {
                Ok(generation) => {
                    for skipped in menu.bindings().skipped() {
                        web_sys::console::warn_1(&format!("[Binder] Not bound: {}", skipped).into());
                    }
                    web_sys::console::log_1(&format!("[Menu] Rendered generation {}", generation).into());
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[Menu] Error loading menu: {}", e).into());
                }
            }
        });
    });

    // Lightbox suspends page scroll while open
    Effect::new(move |prev: Option<bool>| {
        let locked = store.menu().read().overlay().scroll_locked();
        if prev.map_or(locked, |was| was != locked) {
            dom::set_scroll_locked(locked);
        }
        locked
    });

    view! {
        <NavBar />
        <SidePanels />

        <main class="page-content">
            <section class="menu-section" id="menu">
                <h2>"Our Menu"</h2>
                <FilterBar />
                <MenuGrid />
            </section>

            <PlanCards />
            <ContactSection />
        </main>

        <NutritionPopup />
        <ImageLightbox />
        <NotificationToast />
    }
}
