//! Events page: list, creation form and detail overlay.
//!
//! All state lives in one [`EventsPage`] signal. User input and request
//! completions both go through [`dispatch`], which applies the action and
//! spawns the remote call the reducer asks for.

use eventbook_app::page::{Action, Command, EventsPage};
use eventbook_domain::draft::DraftField;
use eventbook_domain::event::Event;
use eventbook_domain::id::EventId;
use eventbook_domain::session::Session;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{Backdrop, EventList, Loading, Modal};
use crate::session::use_session;

/// Apply `action` and run the resulting command, if any.
///
/// Once the page is disposed the signal rejects updates, so late completions
/// are dropped.
fn dispatch(page: RwSignal<EventsPage>, session: Session, action: Action) {
    let Some(command) = page.try_update(|p| p.update(action, &session)).flatten() else {
        return;
    };
    spawn_local(async move {
        let completion = run(command).await;
        dispatch(page, session, completion);
    });
}

async fn run(command: Command) -> Action {
    match command {
        Command::FetchEvents { seq } => Action::FetchSettled {
            seq,
            result: api::fetch_events().await,
        },
        Command::CreateEvent {
            seq,
            session,
            input,
        } => Action::CreateSettled {
            seq,
            result: api::create_event(&session, &input).await,
        },
    }
}

#[component]
pub fn Events() -> impl IntoView {
    let session = StoredValue::new(use_session());
    let page = RwSignal::new(EventsPage::default());
    let send = move |action: Action| dispatch(page, session.get_value(), action);

    send(Action::Mount);
    on_cleanup(move || send(Action::Unmount));

    let creating = Memo::new(move |_| page.with(|p| p.overlay().is_creating()));
    let selected = Memo::new(move |_| page.with(|p| p.overlay().selected().cloned()));
    let backdrop = Memo::new(move |_| page.with(|p| p.overlay().has_backdrop()));
    let loading = Memo::new(move |_| page.with(EventsPage::is_loading));
    let items = Memo::new(move |_| {
        session.with_value(|s| {
            page.with(|p| {
                p.list_items(s)
                    .map(|item| (item.event.clone(), item.owned))
                    .collect::<Vec<_>>()
            })
        })
    });
    let can_create = session.with_value(EventsPage::can_create);

    let edit =
        move |field: DraftField| move |ev: leptos::ev::Event| send(Action::Edit(field, event_target_value(&ev)));

    view! {
        <Show when=move || backdrop.get()>
            <Backdrop/>
        </Show>
        <Show when=move || creating.get()>
            <Modal
                title="Add Event"
                confirm_text="Confirm"
                on_cancel=move |()| send(Action::Cancel)
                on_confirm=move |()| send(Action::ConfirmCreate)
            >
                <form>
                    <div class="form-control">
                        <label for="title">"Title"</label>
                        <input type="text" id="title" on:input=edit(DraftField::Title)/>
                    </div>
                    <div class="form-control">
                        <label for="price">"Price"</label>
                        <input type="number" id="price" on:input=edit(DraftField::Price)/>
                    </div>
                    <div class="form-control">
                        <label for="date">"Date"</label>
                        <input type="datetime-local" id="date" on:input=edit(DraftField::Date)/>
                    </div>
                    <div class="form-control">
                        <label for="description">"Description"</label>
                        <textarea id="description" rows="4" on:input=edit(DraftField::Description)></textarea>
                    </div>
                </form>
            </Modal>
        </Show>
        {move || selected.get().map(|event| event_detail(event, send))}
        {can_create
            .then(|| {
                view! {
                    <div class="events-control">
                        <p>"Share your own Events!"</p>
                        <button class="btn" on:click=move |_| send(Action::StartCreate)>
                            "Create Event"
                        </button>
                    </div>
                }
            })}
        {move || {
            if loading.get() {
                view! { <Loading/> }.into_any()
            } else {
                view! {
                    <EventList items=items.get() on_select=move |id: EventId| send(Action::Select(id))/>
                }
                    .into_any()
            }
        }}
    }
}

fn event_detail(event: Event, send: impl Fn(Action) + Copy + Send + Sync + 'static) -> impl IntoView {
    let subtitle = format!("{} - {}", event.price_label(), event.date_label());

    view! {
        <Modal
            title=event.title.clone()
            confirm_text="Book"
            on_cancel=move |()| send(Action::Cancel)
            on_confirm=move |()| send(Action::Book)
        >
            <h1>{event.title}</h1>
            <h2>{subtitle}</h2>
            <p>{event.description}</p>
        </Modal>
    }
}
