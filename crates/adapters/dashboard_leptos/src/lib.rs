use leptos::prelude::*;

pub mod api;
mod components;
mod pages;
pub mod session;

use components::Nav;
use pages::Events;

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_context(session::load());

    view! {
        <Nav/>
        <main>
            <Events/>
        </main>
    }
}
