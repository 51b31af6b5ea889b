//! reqwest-backed implementation of the event gateway port.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::AUTHORIZATION;
use serde::Serialize;
use serde::de::DeserializeOwned;

use eventbook_app::ports::EventGateway;
use eventbook_domain::draft::EventInput;
use eventbook_domain::error::EventBookError;
use eventbook_domain::event::Event;
use eventbook_domain::session::Session;

use eventbook_graphql_wire::documents::{CREATE_EVENT_MUTATION, EVENTS_QUERY};
use eventbook_graphql_wire::wire::{
    CreateEventData, CreateEventVariables, EventsData, GraphqlRequest, GraphqlResponse,
};

use crate::config::GraphqlConfig;
use crate::error::GatewayError;

/// Gateway talking to a single GraphQL endpoint.
#[derive(Debug, Clone)]
pub struct GraphqlGateway {
    client: reqwest::Client,
    endpoint: String,
}

impl GraphqlGateway {
    /// Build a gateway from its configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Client`] if the HTTP client cannot be built.
    pub fn new(config: &GraphqlConfig) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(GatewayError::Client)?;
        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn post<V, T>(
        &self,
        query: &str,
        variables: Option<V>,
        bearer: Option<String>,
    ) -> Result<T, GatewayError>
    where
        V: Serialize,
        T: DeserializeOwned,
    {
        let mut request = self
            .client
            .post(&self.endpoint)
            .json(&GraphqlRequest { query, variables });
        if let Some(bearer) = bearer {
            request = request.header(AUTHORIZATION, bearer);
        }

        let response = request.send().await.map_err(GatewayError::Transport)?;
        let status = response.status();
        tracing::debug!(endpoint = %self.endpoint, %status, "GraphQL response received");
        if status != StatusCode::OK && status != StatusCode::CREATED {
            return Err(GatewayError::Status(status.as_u16()));
        }

        let body = response.bytes().await.map_err(GatewayError::Transport)?;
        let envelope: GraphqlResponse<T> =
            serde_json::from_slice(&body).map_err(GatewayError::Decode)?;
        envelope.into_data().map_err(GatewayError::from)
    }
}

impl EventGateway for GraphqlGateway {
    async fn fetch_events(&self) -> Result<Vec<Event>, EventBookError> {
        let data: EventsData = self.post(EVENTS_QUERY, None::<()>, None).await?;
        Ok(data.events)
    }

    async fn create_event(
        &self,
        session: &Session,
        input: &EventInput,
    ) -> Result<Event, EventBookError> {
        let variables = CreateEventVariables { event_input: input };
        let data: CreateEventData = self
            .post(CREATE_EVENT_MUTATION, Some(variables), session.bearer())
            .await?;
        data.create_event
            .into_event(session.user_id.as_ref())
            .map_err(|err| GatewayError::from(err).into())
    }
}
