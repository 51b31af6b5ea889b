//! List of events with an owner marker or a details button per row.

use eventbook_domain::event::Event;
use eventbook_domain::id::EventId;
use leptos::prelude::*;

/// Event list. Each entry pairs an event with whether the viewer owns it.
#[component]
pub fn EventList(
    items: Vec<(Event, bool)>,
    #[prop(into)] on_select: Callback<EventId>,
) -> impl IntoView {
    if items.is_empty() {
        return view! { <p>"No events found."</p> }.into_any();
    }

    view! {
        <ul class="event__list">
            {items
                .into_iter()
                .map(|(event, owned)| view! { <EventItem event=event owned=owned on_select=on_select/> })
                .collect_view()}
        </ul>
    }
    .into_any()
}

#[component]
fn EventItem(event: Event, owned: bool, on_select: Callback<EventId>) -> impl IntoView {
    let subtitle = format!("{} - {}", event.price_label(), event.date_label());
    let id = event.id.clone();

    view! {
        <li class="events__list-item">
            <div>
                <h1>{event.title}</h1>
                <h2>{subtitle}</h2>
            </div>
            <div>
                {if owned {
                    view! { <p>"You're the owner of this event."</p> }.into_any()
                } else {
                    view! {
                        <button class="btn" on:click=move |_| on_select.run(id.clone())>
                            "View Details"
                        </button>
                    }
                        .into_any()
                }}
            </div>
        </li>
    }
}
