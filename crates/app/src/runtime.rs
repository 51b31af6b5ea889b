//! Page runtime: keeps several remote calls in flight while the page stays
//! the single writer of its own state.
//!
//! Commands are spawned as tokio tasks; their completions are collected in a
//! [`JoinSet`] and fed back into [`EventsPage::update`] one by one, in the
//! order they finish. Ordering conflicts (stale fetches, late answers after
//! unmount) are then resolved by the page's sequence bookkeeping.

use std::sync::Arc;

use tokio::task::JoinSet;

use eventbook_domain::session::Session;

use crate::page::{Action, Command, EventsPage};
use crate::ports::EventGateway;
use crate::services::event_service::EventService;

/// Owns an [`EventsPage`] and the tasks executing its commands.
pub struct PageRuntime<G> {
    service: Arc<EventService<G>>,
    page: EventsPage,
    in_flight: JoinSet<Action>,
}

impl<G> PageRuntime<G>
where
    G: EventGateway + Send + Sync + 'static,
{
    /// Create a runtime around `page`, sharing `service` with its tasks.
    pub fn new(service: Arc<EventService<G>>, page: EventsPage) -> Self {
        Self {
            service,
            page,
            in_flight: JoinSet::new(),
        }
    }

    /// Apply an action immediately; a triggered remote call starts in the
    /// background. Must be called from within a tokio runtime.
    pub fn send(&mut self, action: Action, session: &Session) {
        if let Some(command) = self.page.update(action, session) {
            self.spawn(command);
        }
    }

    fn spawn(&mut self, command: Command) {
        let service = Arc::clone(&self.service);
        self.in_flight
            .spawn(async move { service.execute(command).await });
    }

    /// Wait for the next request to finish and apply its completion.
    ///
    /// Returns `false` when no request is in flight.
    pub async fn next_completion(&mut self, session: &Session) -> bool {
        let Some(joined) = self.in_flight.join_next().await else {
            return false;
        };
        match joined {
            Ok(completion) => self.send(completion, session),
            Err(err) => tracing::error!(%err, "request task did not complete"),
        }
        true
    }

    /// Apply completions until nothing is in flight.
    pub async fn settle(&mut self, session: &Session) {
        while self.next_completion(session).await {}
    }

    /// Requests started but not yet applied.
    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }

    #[must_use]
    pub fn page(&self) -> &EventsPage {
        &self.page
    }

    /// Apply [`Action::Unmount`]. Requests still running are not cancelled:
    /// they reach the server, and the page drops their completions.
    pub fn unmount(&mut self, session: &Session) {
        self.page.update(Action::Unmount, session);
    }
}

impl<G> Drop for PageRuntime<G> {
    fn drop(&mut self) {
        // A dropped JoinSet aborts its tasks; let them run to completion instead.
        self.in_flight.detach_all();
    }
}
