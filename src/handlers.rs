//! Ingredient Handlers
//!
//! Request sequences behind the ingredient view, independent of Leptos.
//! Each handler talks to a `RemoteStore` and reports state changes through a
//! `Dispatch` sink, which only ever runs the pure reducers.
//!
//! Overlapping requests are not serialized. They share one `HttpState`, so
//! whichever completion lands last decides `loading`/`error`.

use log::{debug, warn};

use crate::models::{Ingredient, IngredientDraft};
use crate::reducer::{HttpAction, IngredientAction};
use crate::remote::RemoteStore;

/// Message shown in the error dialog for any failed request
pub const GENERIC_ERROR: &str = "Something went wrong!";

/// Receiver for reducer actions
pub trait Dispatch {
    fn dispatch_ingredients(&self, action: IngredientAction);
    fn dispatch_http(&self, action: HttpAction);
}

/// Create `draft` in the store, then append it with the assigned id
pub async fn add_ingredient<S, D>(remote: &S, sink: &D, draft: IngredientDraft)
where
    S: RemoteStore + ?Sized,
    D: Dispatch + ?Sized,
{
    sink.dispatch_http(HttpAction::Send);
    match remote.create(&draft).await {
        Ok(id) => {
            debug!("created ingredient {id}");
            sink.dispatch_http(HttpAction::ResponseReceived);
            sink.dispatch_ingredients(IngredientAction::AppendOne(Ingredient::from_draft(id, draft)));
        }
        Err(err) => {
            warn!("create failed: {err}");
            report_failure(sink);
        }
    }
}

/// Delete `id` from the store, then from the list
pub async fn remove_ingredient<S, D>(remote: &S, sink: &D, id: String)
where
    S: RemoteStore + ?Sized,
    D: Dispatch + ?Sized,
{
    sink.dispatch_http(HttpAction::Send);
    match remote.delete(&id).await {
        Ok(()) => {
            debug!("deleted ingredient {id}");
            sink.dispatch_http(HttpAction::ResponseReceived);
            sink.dispatch_ingredients(IngredientAction::RemoveById(id));
        }
        Err(err) => {
            warn!("delete of {id} failed: {err}");
            report_failure(sink);
        }
    }
}

/// Search results replace the displayed list
pub fn load_filtered<D: Dispatch + ?Sized>(sink: &D, results: Vec<Ingredient>) {
    sink.dispatch_ingredients(IngredientAction::ReplaceAll(results));
}

pub fn clear_error<D: Dispatch + ?Sized>(sink: &D) {
    sink.dispatch_http(HttpAction::ClearError);
}

// Error first, then loading cleared
fn report_failure<D: Dispatch + ?Sized>(sink: &D) {
    sink.dispatch_http(HttpAction::Failed(GENERIC_ERROR.to_string()));
    sink.dispatch_http(HttpAction::ResponseReceived);
}
