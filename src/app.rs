//! Ingredients Frontend App
//!
//! Root component: provides the store, the remote client and the list
//! observer to the ingredients screen.

use std::sync::Arc;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::Ingredients;
use crate::config::StoreConfig;
use crate::remote::FirebaseStore;
use crate::store::{AppState, AppStore, ListObserver, RemoteHandle};

#[component]
pub fn App() -> impl IntoView {
    let config = StoreConfig::from_build_env();
    log::info!("using remote store at {}", config.base_url);

    // Provide context to all children
    provide_context::<AppStore>(Store::new(AppState::default()));
    provide_context::<RemoteHandle>(Arc::new(FirebaseStore::new(config)));
    provide_context(ListObserver::default());

    view! {
        <Ingredients />
    }
}
