//! Plain-text rendering of the events page.

use eventbook_app::page::EventsPage;
use eventbook_domain::event::Event;
use eventbook_domain::session::Session;

/// Render the list view: create control, spinner or rows.
#[must_use]
pub fn list_view(page: &EventsPage, session: &Session) -> String {
    let mut out = String::new();
    if EventsPage::can_create(session) {
        out.push_str("Share your own Events! (eventbook create ...)\n\n");
    }
    if page.is_loading() {
        out.push_str("Loading\u{2026}\n");
        return out;
    }
    if page.store().is_empty() {
        out.push_str("No events found.\n");
        return out;
    }
    for item in page.list_items(session) {
        out.push_str(&row(item.event, item.owned));
    }
    out
}

fn row(event: &Event, owned: bool) -> String {
    format!(
        "{id}  {title}  {price} - {date}{owner}\n",
        id = event.id,
        title = event.title,
        price = event.price_label(),
        date = event.date_label(),
        owner = if owned { "  (you're the owner)" } else { "" },
    )
}

/// Render the detail overlay for one event.
#[must_use]
pub fn detail_view(event: &Event) -> String {
    format!(
        "{title}\n{price} - {date}\n\n{description}\n",
        title = event.title,
        price = event.price_label(),
        date = event.date_label(),
        description = event.description,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use eventbook_app::page::{Action, Command};
    use eventbook_domain::id::UserId;
    use eventbook_domain::user::UserRef;

    fn event(id: &str, creator: &str) -> Event {
        Event::builder()
            .id(id)
            .title(format!("Event {id}"))
            .description("Details")
            .date("2024-01-01T10:00")
            .price(10.0)
            .creator(UserRef::by_id(UserId::new(creator)))
            .build()
            .unwrap()
    }

    fn loaded(events: Vec<Event>) -> EventsPage {
        let mut page = EventsPage::default();
        let session = Session::anonymous();
        let Some(Command::FetchEvents { seq }) = page.update(Action::Mount, &session) else {
            panic!("mount must fetch");
        };
        page.update(
            Action::FetchSettled {
                seq,
                result: Ok(events),
            },
            &session,
        );
        page
    }

    #[test]
    fn should_render_rows_with_owner_marker() {
        let page = loaded(vec![event("a", "u1"), event("b", "u2")]);
        let session = Session::authenticated("tok", UserId::new("u1"));

        let text = list_view(&page, &session);

        assert!(text.starts_with("Share your own Events!"));
        assert!(text.contains("a  Event a  $10 - 1/1/2024  (you're the owner)\n"));
        assert!(text.contains("b  Event b  $10 - 1/1/2024\n"));
    }

    #[test]
    fn should_hide_create_control_without_token() {
        let page = loaded(vec![]);
        let text = list_view(&page, &Session::anonymous());
        assert_eq!(text, "No events found.\n");
    }

    #[test]
    fn should_render_spinner_while_loading() {
        let mut page = EventsPage::default();
        page.update(Action::Mount, &Session::anonymous());
        assert_eq!(list_view(&page, &Session::anonymous()), "Loading\u{2026}\n");
    }

    #[test]
    fn should_render_rows_in_store_order() {
        let page = loaded(vec![event("b", "u2"), event("a", "u2")]);
        let text = list_view(&page, &Session::anonymous());
        assert_eq!(
            text,
            "b  Event b  $10 - 1/1/2024\na  Event a  $10 - 1/1/2024\n"
        );
    }

    #[test]
    fn should_render_detail() {
        let text = detail_view(&event("a", "u1"));
        assert_eq!(text, "Event a\n$10 - 1/1/2024\n\nDetails\n");
    }
}
