//! Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. All writes go
//! through the pure reducers in `crate::reducer`.

use std::sync::Arc;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::handlers::Dispatch;
use crate::models::Ingredient;
use crate::reducer::{http_reducer, ingredient_reducer, HttpAction, HttpState, IngredientAction};
use crate::remote::RemoteStore;

/// View state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Ingredients currently displayed
    pub ingredients: Vec<Ingredient>,
    /// Status of the tracked request
    pub http: HttpState,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Shared handle to the remote store client
pub type RemoteHandle = Arc<dyn RemoteStore>;

/// Get the remote store client from context
pub fn use_remote() -> RemoteHandle {
    expect_context::<RemoteHandle>()
}

// ========================
// Store Helper Functions
// ========================

/// Current list (tracked)
pub fn read_ingredients(store: &AppStore) -> Vec<Ingredient> {
    store.ingredients().get()
}

/// Current request state (tracked)
pub fn read_http(store: &AppStore) -> HttpState {
    store.http().get()
}

impl Dispatch for AppStore {
    fn dispatch_ingredients(&self, action: IngredientAction) {
        let field = self.ingredients();
        let mut list = field.write();
        let current = std::mem::take(&mut *list);
        *list = ingredient_reducer(current, action);
    }

    fn dispatch_http(&self, action: HttpAction) {
        let field = self.http();
        let mut http = field.write();
        let current = std::mem::take(&mut *http);
        *http = http_reducer(current, action);
    }
}

/// Hook invoked with the list after every list transition
#[derive(Clone)]
pub struct ListObserver(Arc<dyn Fn(&[Ingredient]) + Send + Sync>);

impl ListObserver {
    pub fn new(f: impl Fn(&[Ingredient]) + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    pub fn notify(&self, list: &[Ingredient]) {
        (self.0)(list)
    }
}

impl Default for ListObserver {
    /// Logs each change at debug level
    fn default() -> Self {
        Self::new(|list| log::debug!("rendering {} ingredients: {:?}", list.len(), list))
    }
}

/// `AppStore` that reports each list transition to a `ListObserver`
#[derive(Clone)]
pub struct ObservedStore {
    pub store: AppStore,
    observer: ListObserver,
}

impl ObservedStore {
    pub fn new(store: AppStore, observer: ListObserver) -> Self {
        Self { store, observer }
    }
}

impl Dispatch for ObservedStore {
    fn dispatch_ingredients(&self, action: IngredientAction) {
        self.store.dispatch_ingredients(action);
        let list = self.store.ingredients().get_untracked();
        self.observer.notify(&list);
    }

    fn dispatch_http(&self, action: HttpAction) {
        self.store.dispatch_http(action);
    }
}
