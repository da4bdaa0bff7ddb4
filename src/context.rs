//! Page Context
//!
//! Shared handle provided via Leptos Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::NOTIFICATION_LIFETIME_MS;
use crate::notify::NotificationKind;
use crate::state::{MenuCommand, Outcome};
use crate::store::{store_dispatch, PageStateStoreFields, PageStore};

/// Page-wide actions provided via context
#[derive(Clone, Copy)]
pub struct PageContext {
    store: PageStore,
}

impl PageContext {
    pub fn new(store: PageStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> PageStore {
        self.store
    }

    /// Send a command to the menu pipeline
    pub fn dispatch(&self, command: MenuCommand) -> Outcome {
        store_dispatch(&self.store, command)
    }

    /// Show a toast and schedule its removal
    pub fn notify(&self, message: impl Into<String>, kind: NotificationKind) {
        let store = self.store;
        let id = store.notifications().write().show(message, kind);
        spawn_local(async move {
            TimeoutFuture::new(NOTIFICATION_LIFETIME_MS).await;
            store.notifications().write().expire(id);
        });
    }
}

pub fn use_page_context() -> PageContext {
    use_context::<PageContext>().expect("PageContext should be provided")
}
