//! Event gateway port: the remote API holding the events.

use std::future::Future;

use eventbook_domain::draft::EventInput;
use eventbook_domain::error::EventBookError;
use eventbook_domain::event::Event;
use eventbook_domain::session::Session;

/// Remote source of truth for [`Event`]s.
///
/// Implementations report every failure (non-success status, transport error,
/// unreadable payload) as [`EventBookError::RequestFailed`].
pub trait EventGateway {
    /// Fetch every known event, in server order.
    fn fetch_events(&self) -> impl Future<Output = Result<Vec<Event>, EventBookError>> + Send;

    /// Create an event on behalf of the session's user and return the
    /// record the server stored.
    fn create_event(
        &self,
        session: &Session,
        input: &EventInput,
    ) -> impl Future<Output = Result<Event, EventBookError>> + Send;
}

impl<T: EventGateway + Send + Sync> EventGateway for std::sync::Arc<T> {
    fn fetch_events(&self) -> impl Future<Output = Result<Vec<Event>, EventBookError>> + Send {
        (**self).fetch_events()
    }

    fn create_event(
        &self,
        session: &Session,
        input: &EventInput,
    ) -> impl Future<Output = Result<Event, EventBookError>> + Send {
        (**self).create_event(session, input)
    }
}
