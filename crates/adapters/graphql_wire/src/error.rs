//! Errors found while unpacking a GraphQL response.

/// The response decoded but did not carry what was asked for.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WireError {
    /// The server reported GraphQL errors; the first message is kept.
    #[error("GraphQL error: {0}")]
    Graphql(String),

    /// The envelope carried neither `data` nor `errors`, or a required field
    /// could not be filled in.
    #[error("GraphQL response has no data")]
    MissingData,
}
