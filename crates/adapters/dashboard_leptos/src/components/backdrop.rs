use leptos::prelude::*;

/// Dimmed layer rendered behind an open modal.
#[component]
pub fn Backdrop() -> impl IntoView {
    view! { <div class="backdrop"></div> }
}
