//! Client-side event store: the ordered list of events known to the page.

use std::collections::HashSet;

use eventbook_domain::event::Event;
use eventbook_domain::id::EventId;

/// Ordered, in-memory sequence of [`Event`]s.
///
/// Seeded by [`load`](Self::load) after the initial fetch and extended by
/// [`append`](Self::append) after each successful creation. Appending does not
/// check identifiers: a server that answers with an id already present yields
/// two entries, visible through [`has_duplicate_ids`](Self::has_duplicate_ids).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole sequence.
    pub fn load(&mut self, events: Vec<Event>) {
        self.events = events;
    }

    /// Add one event at the end.
    pub fn append(&mut self, event: Event) {
        self.events.push(event);
    }

    /// First event with the given identifier.
    #[must_use]
    pub fn find_by_id(&self, id: &EventId) -> Option<&Event> {
        self.events.iter().find(|event| &event.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Event> {
        self.events.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Event] {
        &self.events
    }

    /// Whether two entries share an identifier.
    #[must_use]
    pub fn has_duplicate_ids(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.events.len());
        self.events.iter().any(|event| !seen.insert(&event.id))
    }
}

impl<'a> IntoIterator for &'a EventStore {
    type Item = &'a Event;
    type IntoIter = std::slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eventbook_domain::id::UserId;
    use eventbook_domain::user::UserRef;

    fn event(id: &str, title: &str) -> Event {
        Event::builder()
            .id(id)
            .title(title)
            .description("desc")
            .date("2024-01-01T10:00")
            .price(5.0)
            .creator(UserRef::by_id(UserId::new("u1")))
            .build()
            .unwrap()
    }

    #[test]
    fn should_start_empty() {
        let store = EventStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn should_replace_everything_on_load() {
        let mut store = EventStore::new();
        store.load(vec![event("a", "A"), event("b", "B")]);
        store.load(vec![event("c", "C")]);

        let ids: Vec<&str> = store.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["c"]);
    }

    #[test]
    fn should_append_at_the_end() {
        let mut store = EventStore::new();
        store.load(vec![event("a", "A")]);
        store.append(event("b", "B"));

        let ids: Vec<&str> = store.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn should_find_event_by_id() {
        let mut store = EventStore::new();
        store.load(vec![event("a", "A"), event("b", "B")]);

        let found = store.find_by_id(&EventId::new("b")).unwrap();
        assert_eq!(found.title, "B");
        assert!(store.find_by_id(&EventId::new("zzz")).is_none());
    }

    #[test]
    fn should_keep_duplicate_ids_on_append() {
        let mut store = EventStore::new();
        store.load(vec![event("a", "first")]);
        assert!(!store.has_duplicate_ids());

        store.append(event("a", "second"));
        assert_eq!(store.len(), 2);
        assert!(store.has_duplicate_ids());
        assert_eq!(store.find_by_id(&EventId::new("a")).unwrap().title, "first");
    }
}
