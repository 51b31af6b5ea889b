//! GraphQL adapter error types.

use eventbook_domain::error::EventBookError;
use eventbook_graphql_wire::WireError;

/// Errors specific to the GraphQL gateway.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The HTTP client could not be built.
    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),

    /// The request could not be sent or the body could not be read.
    #[error("transport error")]
    Transport(#[source] reqwest::Error),

    /// The server answered with something other than 200 or 201.
    #[error("unexpected HTTP status {0}")]
    Status(u16),

    /// The body was not the expected JSON envelope.
    #[error("failed to decode GraphQL response")]
    Decode(#[source] serde_json::Error),

    /// The server reported GraphQL errors.
    #[error("GraphQL error: {0}")]
    Graphql(String),

    /// The envelope carried neither `data` nor `errors`.
    #[error("GraphQL response has no data")]
    MissingData,
}

impl From<WireError> for GatewayError {
    fn from(err: WireError) -> Self {
        match err {
            WireError::Graphql(message) => Self::Graphql(message),
            WireError::MissingData => Self::MissingData,
        }
    }
}

impl From<GatewayError> for EventBookError {
    fn from(err: GatewayError) -> Self {
        Self::request_failed(err)
    }
}
