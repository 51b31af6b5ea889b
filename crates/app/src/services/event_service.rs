//! Event service: runs the events page's remote calls against a gateway.

use eventbook_domain::session::Session;

use crate::page::{Action, Command, EventsPage};
use crate::ports::EventGateway;

/// Executes [`Command`]s produced by [`EventsPage::update`].
pub struct EventService<G> {
    gateway: G,
}

impl<G: EventGateway> EventService<G> {
    /// Create a new service backed by the given gateway.
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    /// Access the underlying gateway.
    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Perform the remote call and turn its outcome into the completion
    /// action the page expects.
    ///
    /// Failures are not returned: they travel inside the completion and the
    /// page decides what to do with them.
    #[tracing::instrument(skip(self, command), fields(seq = %command.seq()))]
    pub async fn execute(&self, command: Command) -> Action {
        match command {
            Command::FetchEvents { seq } => Action::FetchSettled {
                seq,
                result: self.gateway.fetch_events().await,
            },
            Command::CreateEvent {
                seq,
                session,
                input,
            } => Action::CreateSettled {
                seq,
                result: self.gateway.create_event(&session, &input).await,
            },
        }
    }

    /// Apply `action`, then run every remote call it triggers to completion
    /// before returning.
    ///
    /// Suited to callers that handle one interaction at a time; use
    /// [`PageRuntime`](crate::runtime::PageRuntime) to keep several requests
    /// in flight.
    pub async fn dispatch(&self, page: &mut EventsPage, session: &Session, action: Action) {
        let mut next = page.update(action, session);
        while let Some(command) = next {
            let completion = self.execute(command).await;
            next = page.update(completion, session);
        }
    }
}
