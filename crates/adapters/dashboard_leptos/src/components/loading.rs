//! Loading spinner component.

use leptos::prelude::*;

/// A loading indicator with an animated spinner.
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="spinner">
            <div class="lds-dual-ring"></div>
        </div>
    }
}
