//! Global Page State Store
//!
//! Uses Leptos reactive_stores for field-level reactivity: the menu pipeline,
//! the page chrome and the toast each notify only their own readers.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::binder::WidgetDirectory;
use crate::chrome::Chrome;
use crate::notify::NotificationCenter;
use crate::state::{MenuCommand, MenuState, Outcome};

#[derive(Clone, Debug, Default, Store)]
pub struct PageState {
    /// Menu pipeline: generation, filter, overlay
    pub menu: MenuState,
    /// Side panels and navbar
    pub chrome: Chrome,
    /// Current toast
    pub notifications: NotificationCenter,
}

impl PageState {
    pub fn new(widgets: WidgetDirectory) -> Self {
        Self {
            menu: MenuState::new(widgets),
            ..Default::default()
        }
    }
}

pub type PageStore = Store<PageState>;

/// Get the page store from context
pub fn use_page_store() -> PageStore {
    expect_context::<PageStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Dispatch a menu command, logging anything that did not apply
pub fn store_dispatch(store: &PageStore, command: MenuCommand) -> Outcome {
    let outcome = store.menu().write().dispatch(command.clone());
    match &outcome {
        Outcome::Stale { handle, current } => {
            web_sys::console::warn_1(
                &format!(
                    "[Binder] Dropped {:?}: card from generation {} but current is {}",
                    command, handle.generation, current
                )
                .into(),
            );
        }
        Outcome::NoSuchCard(handle) => {
            web_sys::console::warn_1(&format!("[Binder] No card at index {}", handle.index).into());
        }
        Outcome::Applied | Outcome::Ignored => {}
    }
    outcome
}
