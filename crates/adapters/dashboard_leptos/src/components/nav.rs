use leptos::prelude::*;

#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav>
            <h1>"EventBook"</h1>
            <ul>
                <li><a href="/events">"Events"</a></li>
                <li><a href="/bookings">"Bookings"</a></li>
            </ul>
        </nav>
    }
}
