//! Search Component
//!
//! Filter box that queries the remote store once typing pauses and hands the
//! results to the parent.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::SEARCH_DEBOUNCE_MS;
use crate::models::Ingredient;
use crate::store::use_remote;

#[component]
pub fn Search(on_load: Callback<Vec<Ingredient>>) -> impl IntoView {
    let remote = use_remote();
    let (filter, set_filter) = signal(String::new());

    // Runs on mount with an empty filter, which loads everything
    Effect::new(move |_| {
        let entered = filter.get();
        let remote = remote.clone();
        spawn_local(async move {
            TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
            // Superseded by newer input
            if filter.try_get_untracked().as_deref() != Some(entered.as_str()) {
                return;
            }
            match remote.search(&entered).await {
                Ok(results) => {
                    log::debug!("search {:?} returned {} ingredients", entered, results.len());
                    on_load.run(results);
                }
                Err(err) => log::warn!("search {:?} failed: {err}", entered),
            }
        });
    });

    view! {
        <section class="search">
            <div class="search-input">
                <label for="filter">"Filter by Title"</label>
                <input
                    type="text"
                    id="filter"
                    prop:value=move || filter.get()
                    on:input=move |ev| set_filter.set(event_target_value(&ev))
                />
            </div>
        </section>
    }
}
