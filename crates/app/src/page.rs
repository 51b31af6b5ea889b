//! Events page: the single writer for everything the page shows.
//!
//! [`EventsPage::update`] consumes user actions and request completions one at
//! a time. It mutates the [`EventStore`], the [`Overlay`], the loading flag and
//! the creation draft, and returns the remote call to perform next, if any.
//! Executing that [`Command`] is left to the caller (see
//! [`EventService`](crate::services::event_service::EventService)).
//!
//! Every command carries a [`RequestSeq`]. Completions are matched against the
//! requests still expected:
//! - a fetch completion is applied only if it answers the latest fetch issued;
//! - create completions are applied in the order they arrive;
//! - after [`Action::Unmount`] nothing is expected any more.

use std::collections::BTreeMap;
use std::fmt;

use eventbook_domain::draft::{DraftField, EventDraft, EventInput};
use eventbook_domain::error::EventBookError;
use eventbook_domain::event::Event;
use eventbook_domain::id::{EventId, UserId};
use eventbook_domain::overlay::Overlay;
use eventbook_domain::session::Session;
use eventbook_domain::user::UserRef;

use crate::store::EventStore;

/// Monotonic tag attached to each remote request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestSeq(u64);

impl fmt::Display for RequestSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// When the loading flag is cleared after the initial fetch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadingPolicy {
    /// Cleared once the fetch settles, whatever the outcome.
    #[default]
    ClearOnSettle,
    /// Cleared on success only; a failed fetch leaves the spinner up.
    ClearOnSuccessOnly,
}

/// Whose identity is recorded as creator of a freshly created event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CreatorPolicy {
    /// The acting session's user id, without email.
    #[default]
    Session,
    /// The creator object returned by the server.
    Server,
}

/// Behaviour switches for [`EventsPage`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageConfig {
    pub loading: LoadingPolicy,
    pub creator: CreatorPolicy,
}

/// Inputs to the reducer.
#[derive(Debug)]
pub enum Action {
    /// The page appeared; fetch the event list.
    Mount,
    /// The page went away; late completions must be dropped.
    Unmount,
    /// Open the creation form.
    StartCreate,
    /// Type into a field of the creation form.
    Edit(DraftField, String),
    /// Submit the creation form.
    ConfirmCreate,
    /// Close whichever overlay is open.
    Cancel,
    /// Open the detail overlay for an event of the list.
    Select(EventId),
    /// Confirm the detail overlay's "book" button.
    Book,
    /// A fetch issued by [`Command::FetchEvents`] finished.
    FetchSettled {
        seq: RequestSeq,
        result: Result<Vec<Event>, EventBookError>,
    },
    /// A creation issued by [`Command::CreateEvent`] finished.
    CreateSettled {
        seq: RequestSeq,
        result: Result<Event, EventBookError>,
    },
}

/// Remote call requested by the reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    FetchEvents {
        seq: RequestSeq,
    },
    CreateEvent {
        seq: RequestSeq,
        session: Session,
        input: EventInput,
    },
}

impl Command {
    #[must_use]
    pub fn seq(&self) -> RequestSeq {
        match self {
            Self::FetchEvents { seq } | Self::CreateEvent { seq, .. } => *seq,
        }
    }
}

/// A row of the rendered event list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ListItem<'a> {
    pub event: &'a Event,
    /// Whether the acting user published the event.
    pub owned: bool,
}

/// State of the events page.
#[derive(Debug, Default)]
pub struct EventsPage {
    config: PageConfig,
    store: EventStore,
    overlay: Overlay,
    draft: EventDraft,
    is_loading: bool,
    mounted: bool,
    /// Set by [`Action::Unmount`] until the next [`Action::Mount`].
    unmounted: bool,
    next_seq: u64,
    latest_fetch: Option<RequestSeq>,
    pending_creates: BTreeMap<RequestSeq, Option<UserId>>,
}

impl EventsPage {
    #[must_use]
    pub fn new(config: PageConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Apply one action and return the remote call it triggers, if any.
    ///
    /// `session` is the authentication snapshot at the time of the action.
    pub fn update(&mut self, action: Action, session: &Session) -> Option<Command> {
        match action {
            Action::Mount => Some(self.mount()),
            Action::Unmount => {
                self.unmount();
                None
            }
            Action::StartCreate => {
                if self.overlay.start_create() {
                    self.draft = EventDraft::default();
                }
                None
            }
            Action::Edit(field, value) => {
                if self.overlay.is_creating() {
                    self.draft.set(field, value);
                }
                None
            }
            Action::ConfirmCreate => self.confirm_create(session),
            Action::Cancel => {
                self.overlay.cancel();
                self.draft = EventDraft::default();
                None
            }
            Action::Select(id) => {
                self.select(&id);
                None
            }
            Action::Book => {
                if let Some(event) = self.overlay.book() {
                    tracing::debug!(event_id = %event.id, "booking is not available yet");
                }
                None
            }
            Action::FetchSettled { seq, result } => {
                self.fetch_settled(seq, result);
                None
            }
            Action::CreateSettled { seq, result } => {
                self.create_settled(seq, result);
                None
            }
        }
    }

    fn next_seq(&mut self) -> RequestSeq {
        self.next_seq += 1;
        RequestSeq(self.next_seq)
    }

    fn mount(&mut self) -> Command {
        self.mounted = true;
        self.unmounted = false;
        self.is_loading = true;
        let seq = self.next_seq();
        self.latest_fetch = Some(seq);
        tracing::debug!(%seq, "fetching events");
        Command::FetchEvents { seq }
    }

    fn unmount(&mut self) {
        self.mounted = false;
        self.unmounted = true;
        self.latest_fetch = None;
        if !self.pending_creates.is_empty() {
            tracing::debug!(
                pending = self.pending_creates.len(),
                "unmounting with creations in flight"
            );
        }
        self.pending_creates.clear();
    }

    fn confirm_create(&mut self, session: &Session) -> Option<Command> {
        if !self.overlay.confirm_create() {
            return None;
        }
        let draft = std::mem::take(&mut self.draft);
        if self.unmounted {
            tracing::debug!("page is unmounted, discarding event draft");
            return None;
        }
        let input = match draft.into_input() {
            Ok(input) => input,
            Err(err) => {
                tracing::debug!(%err, "discarding invalid event draft");
                return None;
            }
        };
        let seq = self.next_seq();
        self.pending_creates.insert(seq, session.user_id.clone());
        tracing::debug!(%seq, title = %input.title, "creating event");
        Some(Command::CreateEvent {
            seq,
            session: session.clone(),
            input,
        })
    }

    fn select(&mut self, id: &EventId) {
        if !matches!(self.overlay, Overlay::Idle) {
            return;
        }
        match self.store.find_by_id(id) {
            Some(event) => {
                self.overlay.view(event.clone());
            }
            None => tracing::debug!(event_id = %id, "selected event is not in the list"),
        }
    }

    fn fetch_settled(&mut self, seq: RequestSeq, result: Result<Vec<Event>, EventBookError>) {
        if self.latest_fetch != Some(seq) {
            tracing::debug!(%seq, "dropping stale fetch result");
            return;
        }
        self.latest_fetch = None;
        match result {
            Ok(events) => {
                tracing::debug!(%seq, count = events.len(), "events loaded");
                self.store.load(events);
                self.is_loading = false;
            }
            Err(err) => {
                tracing::warn!(%seq, error = ?err, "failed to fetch events");
                if self.config.loading == LoadingPolicy::ClearOnSettle {
                    self.is_loading = false;
                }
            }
        }
    }

    fn create_settled(&mut self, seq: RequestSeq, result: Result<Event, EventBookError>) {
        let Some(acting_user) = self.pending_creates.remove(&seq) else {
            tracing::debug!(%seq, "dropping unexpected create result");
            return;
        };
        match result {
            Ok(created) => {
                let creator = match (self.config.creator, acting_user) {
                    (CreatorPolicy::Session, Some(user_id)) => UserRef::by_id(user_id),
                    (CreatorPolicy::Session, None) | (CreatorPolicy::Server, _) => {
                        created.creator
                    }
                };
                tracing::debug!(%seq, event_id = %created.id, "event created");
                let had_duplicates = self.store.has_duplicate_ids();
                let event_id = created.id.clone();
                self.store.append(Event {
                    id: created.id,
                    title: created.title,
                    description: created.description,
                    date: created.date,
                    price: created.price,
                    creator,
                });
                if !had_duplicates && self.store.has_duplicate_ids() {
                    tracing::warn!(%seq, %event_id, "created event reuses an id already listed");
                }
            }
            Err(err) => {
                tracing::warn!(%seq, error = ?err, "failed to create event");
            }
        }
    }

    #[must_use]
    pub fn store(&self) -> &EventStore {
        &self.store
    }

    #[must_use]
    pub fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Form values, only while the creation overlay is open.
    #[must_use]
    pub fn draft(&self) -> Option<&EventDraft> {
        self.overlay.is_creating().then_some(&self.draft)
    }

    /// Number of creations still awaiting an answer.
    #[must_use]
    pub fn pending_creates(&self) -> usize {
        self.pending_creates.len()
    }

    /// Whether the "create event" control is rendered for `session`.
    #[must_use]
    pub fn can_create(session: &Session) -> bool {
        session.is_authenticated()
    }

    /// Rows of the event list as seen by `session`.
    pub fn list_items<'a>(&'a self, session: &'a Session) -> impl Iterator<Item = ListItem<'a>> {
        self.store.iter().map(move |event| ListItem {
            event,
            owned: session
                .user_id
                .as_ref()
                .is_some_and(|user| event.is_created_by(user)),
        })
    }
}
