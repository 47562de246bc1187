//! Loading Indicator Component

use leptos::prelude::*;

/// CSS ring spinner
#[component]
pub fn LoadingIndicator() -> impl IntoView {
    view! {
        <div class="lds-ring">
            <div></div>
            <div></div>
            <div></div>
            <div></div>
        </div>
    }
}
