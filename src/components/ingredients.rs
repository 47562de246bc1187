//! Ingredients Component
//!
//! Composition root of the screen: wires the store, the remote client and the
//! handlers to the form, search box, list and error dialog.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{ErrorModal, IngredientForm, IngredientList, Search};
use crate::handlers;
use crate::models::{Ingredient, IngredientDraft};
use crate::store::{read_http, read_ingredients, use_app_store, use_remote, ListObserver, ObservedStore};

#[component]
pub fn Ingredients() -> impl IntoView {
    let store = use_app_store();
    let remote = use_remote();
    let observer = use_context::<ListObserver>().unwrap_or_default();
    let sink = ObservedStore::new(store, observer);

    // Memos only notify when the value actually changed
    let ingredients = Memo::new(move |_| read_ingredients(&store));
    let loading = Memo::new(move |_| read_http(&store).loading);
    let error = Memo::new(move |_| read_http(&store).error);

    let on_load = {
        let sink = sink.clone();
        Callback::new(move |results: Vec<Ingredient>| {
            handlers::load_filtered(&sink, results);
        })
    };

    let on_add = {
        let remote = remote.clone();
        let sink = sink.clone();
        Callback::new(move |draft: IngredientDraft| {
            let remote = remote.clone();
            let sink = sink.clone();
            spawn_local(async move {
                handlers::add_ingredient(remote.as_ref(), &sink, draft).await;
            });
        })
    };

    let on_remove = {
        let sink = sink.clone();
        Callback::new(move |id: String| {
            let remote = remote.clone();
            let sink = sink.clone();
            spawn_local(async move {
                handlers::remove_ingredient(remote.as_ref(), &sink, id).await;
            });
        })
    };

    let on_clear = Callback::new(move |_: ()| handlers::clear_error(&sink));

    view! {
        <div class="App">
            {move || error.get().map(|message| view! {
                <ErrorModal on_close=on_clear>{message}</ErrorModal>
            })}

            <IngredientForm on_add=on_add loading=loading />

            <section>
                <Search on_load=on_load />
                <IngredientList ingredients=ingredients on_remove=on_remove />
            </section>
        </div>
    }
}
