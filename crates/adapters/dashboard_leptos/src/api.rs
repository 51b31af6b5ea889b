//! GraphQL client wrapping `gloo-net` for calls to `/graphql`.

use eventbook_domain::draft::EventInput;
use eventbook_domain::error::EventBookError;
use eventbook_domain::event::Event;
use eventbook_domain::session::Session;
use eventbook_graphql_wire::WireError;
use eventbook_graphql_wire::documents::{CREATE_EVENT_MUTATION, EVENTS_QUERY};
use eventbook_graphql_wire::wire::{
    CreateEventData, CreateEventVariables, EventsData, GraphqlRequest, GraphqlResponse,
};
use gloo_net::http::{Request, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

const ENDPOINT: &str = "/graphql";

/// Error returned by API client methods.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Http(String),
    #[error("unexpected HTTP status {0}")]
    Status(u16),
    #[error(transparent)]
    Wire(#[from] WireError),
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        Self::Http(err.to_string())
    }
}

impl From<ApiError> for EventBookError {
    fn from(err: ApiError) -> Self {
        EventBookError::request_failed(err)
    }
}

/// Only 200 and 201 count as success.
fn check_response(resp: Response) -> Result<Response, ApiError> {
    match resp.status() {
        200 | 201 => Ok(resp),
        status => Err(ApiError::Status(status)),
    }
}

async fn post<V: Serialize, T: DeserializeOwned>(
    query: &str,
    variables: Option<V>,
    session: Option<&Session>,
) -> Result<T, ApiError> {
    let mut builder = Request::post(ENDPOINT);
    if let Some(bearer) = session.and_then(Session::bearer) {
        builder = builder.header("Authorization", &bearer);
    }
    let resp = check_response(
        builder
            .json(&GraphqlRequest { query, variables })?
            .send()
            .await?,
    )?;
    let envelope: GraphqlResponse<T> = resp.json().await?;
    envelope.into_data().map_err(ApiError::from)
}

/// Fetch every event, in server order.
pub async fn fetch_events() -> Result<Vec<Event>, EventBookError> {
    let data: EventsData = post(EVENTS_QUERY, None::<()>, None).await?;
    Ok(data.events)
}

/// Create an event on behalf of `session`.
pub async fn create_event(session: &Session, input: &EventInput) -> Result<Event, EventBookError> {
    let data: CreateEventData = post(
        CREATE_EVENT_MUTATION,
        Some(CreateEventVariables { event_input: input }),
        Some(session),
    )
    .await?;
    let event = data
        .create_event
        .into_event(session.user_id.as_ref())
        .map_err(ApiError::from)?;
    Ok(event)
}
