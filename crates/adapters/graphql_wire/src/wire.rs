//! JSON shapes exchanged with the GraphQL endpoint.

use serde::{Deserialize, Serialize};

use eventbook_domain::draft::EventInput;
use eventbook_domain::event::Event;
use eventbook_domain::id::{EventId, UserId};
use eventbook_domain::user::UserRef;

use crate::error::WireError;

/// Request body: document plus optional variables.
#[derive(Debug, Serialize)]
pub struct GraphqlRequest<'a, V> {
    pub query: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<V>,
}

/// Response envelope.
#[derive(Debug, Deserialize)]
pub struct GraphqlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphqlErrorMessage>,
}

#[derive(Debug, Deserialize)]
pub struct GraphqlErrorMessage {
    pub message: String,
}

impl<T> GraphqlResponse<T> {
    /// Extract `data`.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::Graphql`] with the first reported error, or
    /// [`WireError::MissingData`] when `data` is absent.
    pub fn into_data(self) -> Result<T, WireError> {
        if let Some(first) = self.errors.into_iter().next() {
            return Err(WireError::Graphql(first.message));
        }
        self.data.ok_or(WireError::MissingData)
    }
}

#[derive(Debug, Deserialize)]
pub struct EventsData {
    pub events: Vec<Event>,
}

#[derive(Debug, Serialize)]
pub struct CreateEventVariables<'a> {
    #[serde(rename = "eventInput")]
    pub event_input: &'a EventInput,
}

#[derive(Debug, Deserialize)]
pub struct CreateEventData {
    #[serde(rename = "createEvent")]
    pub create_event: CreatedEvent,
}

/// `createEvent` payload. Some backends leave the creator out.
#[derive(Debug, Deserialize)]
pub struct CreatedEvent {
    #[serde(rename = "_id")]
    pub id: EventId,
    pub title: String,
    pub description: String,
    pub date: String,
    pub price: f64,
    #[serde(default)]
    pub creator: Option<UserRef>,
}

impl CreatedEvent {
    /// Build the stored event, crediting `acting_user` when the creator is missing.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::MissingData`] when neither is known.
    pub fn into_event(self, acting_user: Option<&UserId>) -> Result<Event, WireError> {
        let creator = self
            .creator
            .or_else(|| acting_user.cloned().map(UserRef::by_id))
            .ok_or(WireError::MissingData)?;
        Ok(Event {
            id: self.id,
            title: self.title,
            description: self.description,
            date: self.date,
            price: self.price,
            creator,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_omit_absent_variables() {
        let request = GraphqlRequest::<()> {
            query: "{ events { _id } }",
            variables: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json, serde_json::json!({"query": "{ events { _id } }"}));
    }

    #[test]
    fn should_nest_event_input_under_variables() {
        let input = EventInput {
            title: "Say \"hi\"".to_string(),
            description: "line\nbreak".to_string(),
            price: 4.5,
            date: "2024-01-01T10:00".to_string(),
        };
        let request = GraphqlRequest {
            query: "mutation",
            variables: Some(CreateEventVariables {
                event_input: &input,
            }),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["variables"]["eventInput"]["title"], "Say \"hi\"");
        assert_eq!(json["variables"]["eventInput"]["description"], "line\nbreak");
        assert_eq!(json["query"], "mutation");
    }

    #[test]
    fn should_surface_first_graphql_error() {
        let envelope: GraphqlResponse<EventsData> = serde_json::from_str(
            r#"{"data": null, "errors": [{"message": "Unauthenticated!"}, {"message": "other"}]}"#,
        )
        .unwrap();
        let err = envelope.into_data().unwrap_err();
        assert!(matches!(err, WireError::Graphql(ref msg) if msg == "Unauthenticated!"));
    }

    #[test]
    fn should_report_missing_data() {
        let envelope: GraphqlResponse<EventsData> = serde_json::from_str("{}").unwrap();
        assert!(matches!(
            envelope.into_data(),
            Err(WireError::MissingData)
        ));
    }

    #[test]
    fn should_credit_acting_user_when_creator_is_missing() {
        let created: CreatedEvent = serde_json::from_str(
            r#"{"_id": "e1", "title": "Talk", "description": "A talk",
                "date": "2024-01-01T10:00", "price": 10}"#,
        )
        .unwrap();
        let event = created.into_event(Some(&UserId::new("u1"))).unwrap();
        assert_eq!(event.creator, UserRef::by_id(UserId::new("u1")));
    }

    #[test]
    fn should_report_missing_creator_without_acting_user() {
        let created: CreatedEvent = serde_json::from_str(
            r#"{"_id": "e1", "title": "Talk", "description": "A talk",
                "date": "2024-01-01T10:00", "price": 10}"#,
        )
        .unwrap();
        assert!(matches!(
            created.into_event(None),
            Err(WireError::MissingData)
        ));
    }

    #[test]
    fn should_decode_events_payload() {
        let envelope: GraphqlResponse<EventsData> = serde_json::from_str(
            r#"{"data": {"events": [{
                "_id": "e1", "title": "Talk", "description": "A talk",
                "date": "2024-01-01T10:00:00.000Z", "price": 10,
                "creator": {"_id": "u1", "email": "a@example.com"}
            }]}}"#,
        )
        .unwrap();
        let events = envelope.into_data().unwrap().events;
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id.as_str(), "e1");
    }
}
