//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`EventBookError`] via `From` at the port boundary.

use std::error::Error as StdError;

/// Top-level error for every operation crossing a port boundary.
#[derive(Debug, thiserror::Error)]
pub enum EventBookError {
    /// A domain invariant was violated.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// A lookup did not match anything.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// A remote call failed (non-success status, transport, or bad payload).
    #[error("request failed")]
    RequestFailed(#[source] Box<dyn StdError + Send + Sync>),
}

impl EventBookError {
    /// Wrap any error as a [`EventBookError::RequestFailed`].
    pub fn request_failed<E>(err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::RequestFailed(Box::new(err))
    }
}

/// Invariant violations on domain values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("identifier must not be empty")]
    EmptyId,
    #[error("creator must be set")]
    MissingCreator,
    #[error("title must not be empty")]
    EmptyTitle,
    #[error("description must not be empty")]
    EmptyDescription,
    #[error("date must not be empty")]
    EmptyDate,
    #[error("price must be a number, got {0:?}")]
    InvalidPrice(String),
    #[error("price must be strictly positive")]
    NonPositivePrice,
}

/// Raised when a lookup by identifier finds nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_convert_validation_error_with_from() {
        let err: EventBookError = ValidationError::EmptyTitle.into();
        assert!(matches!(
            err,
            EventBookError::Validation(ValidationError::EmptyTitle)
        ));
    }

    #[test]
    fn should_display_not_found_with_entity_and_id() {
        let err: EventBookError = NotFoundError {
            entity: "Event",
            id: "e1".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "Event e1 not found");
    }

    #[test]
    fn should_keep_source_when_request_failed() {
        let io = std::io::Error::other("connection reset");
        let err = EventBookError::request_failed(io);
        assert_eq!(err.to_string(), "request failed");
        assert_eq!(
            err.source().map(ToString::to_string).as_deref(),
            Some("connection reset")
        );
    }
}
