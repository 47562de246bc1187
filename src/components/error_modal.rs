//! Error Modal Component
//!
//! Dismissible overlay showing a single error message.

use leptos::prelude::*;

/// Backdrop + dialog; clicking either the backdrop or "Okay" closes it
#[component]
pub fn ErrorModal(on_close: Callback<()>, children: Children) -> impl IntoView {
    view! {
        <div class="backdrop" on:click=move |_| on_close.run(()) />
        <div class="error-modal">
            <h2>"An Error Occurred!"</h2>
            <p>{children()}</p>
            <div class="error-modal__actions">
                <button type="button" on:click=move |_| on_close.run(())>
                    "Okay"
                </button>
            </div>
        </div>
    }
}
