//! Event: a bookable happening published by a user.
//!
//! Events are created by the backend in response to a creation request and
//! are never mutated afterwards. The field names follow the GraphQL schema
//! (`_id`, `creator { _id email }`).

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::id::{EventId, UserId};
use crate::time::date_label;
use crate::user::UserRef;

/// A published event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "_id")]
    pub id: EventId,
    pub title: String,
    pub description: String,
    /// Date as sent by the backend, kept verbatim.
    pub date: String,
    pub price: f64,
    pub creator: UserRef,
}

impl Event {
    /// Create a builder for constructing an [`Event`].
    #[must_use]
    pub fn builder() -> EventBuilder {
        EventBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found: blank title, description
    /// or date, or a price that is not strictly positive.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if self.description.trim().is_empty() {
            return Err(ValidationError::EmptyDescription);
        }
        if self.date.trim().is_empty() {
            return Err(ValidationError::EmptyDate);
        }
        if !self.price.is_finite() || self.price <= 0.0 {
            return Err(ValidationError::NonPositivePrice);
        }
        Ok(())
    }

    /// Whether `user` published this event.
    #[must_use]
    pub fn is_created_by(&self, user: &UserId) -> bool {
        &self.creator.id == user
    }

    /// Price rendered with a leading dollar sign (`$10`, `$12.5`).
    #[must_use]
    pub fn price_label(&self) -> String {
        format!("${}", self.price)
    }

    /// Short date label (`1/1/2024`) shown in the detail overlay.
    #[must_use]
    pub fn date_label(&self) -> String {
        date_label(&self.date)
    }
}

/// Step-by-step builder for [`Event`].
#[derive(Debug, Default)]
pub struct EventBuilder {
    id: Option<EventId>,
    title: Option<String>,
    description: Option<String>,
    date: Option<String>,
    price: Option<f64>,
    creator: Option<UserRef>,
}

impl EventBuilder {
    #[must_use]
    pub fn id(mut self, id: impl Into<EventId>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    #[must_use]
    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    #[must_use]
    pub fn creator(mut self, creator: UserRef) -> Self {
        self.creator = Some(creator);
        self
    }

    /// Consume the builder, validate, and return an [`Event`].
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyId`] when no id was given,
    /// [`ValidationError::MissingCreator`] when no creator was given, or any
    /// error raised by [`Event::validate`].
    pub fn build(self) -> Result<Event, ValidationError> {
        let id = self.id.ok_or(ValidationError::EmptyId)?;
        let creator = self.creator.ok_or(ValidationError::MissingCreator)?;
        let event = Event {
            id,
            title: self.title.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            date: self.date.unwrap_or_default(),
            price: self.price.unwrap_or_default(),
            creator,
        };
        event.validate()?;
        Ok(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn talk() -> EventBuilder {
        Event::builder()
            .id("e1")
            .title("Talk")
            .description("A talk")
            .date("2024-01-01T10:00")
            .price(10.0)
            .creator(UserRef::by_id(UserId::new("u1")))
    }

    #[test]
    fn should_build_valid_event_when_all_fields_provided() {
        let event = talk().build().unwrap();
        assert_eq!(event.id.as_str(), "e1");
        assert_eq!(event.title, "Talk");
        assert!(event.is_created_by(&UserId::new("u1")));
    }

    #[test]
    fn should_reject_blank_title() {
        let result = talk().title("   ").build();
        assert_eq!(result, Err(ValidationError::EmptyTitle));
    }

    #[test]
    fn should_reject_zero_price() {
        let result = talk().price(0.0).build();
        assert_eq!(result, Err(ValidationError::NonPositivePrice));
    }

    #[test]
    fn should_reject_nan_price() {
        let result = talk().price(f64::NAN).build();
        assert_eq!(result, Err(ValidationError::NonPositivePrice));
    }

    #[test]
    fn should_require_id() {
        let result = Event::builder().title("Talk").build();
        assert_eq!(result, Err(ValidationError::EmptyId));
    }

    #[test]
    fn should_report_missing_creator() {
        let result = Event::builder()
            .id("e1")
            .title("Talk")
            .description("A talk")
            .date("2024-01-01T10:00")
            .price(10.0)
            .build();
        assert_eq!(result, Err(ValidationError::MissingCreator));
    }

    #[test]
    fn should_deserialize_backend_shape() {
        let json = r#"{
            "_id": "e7",
            "title": "Jam",
            "description": "Open jam session",
            "date": "2024-05-04T19:00:00.000Z",
            "price": 12.5,
            "creator": {"_id": "u9", "email": "host@example.com"}
        }"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.id.as_str(), "e7");
        assert!((event.price - 12.5).abs() < f64::EPSILON);
        assert_eq!(event.creator.email.as_deref(), Some("host@example.com"));
    }

    #[test]
    fn should_format_price_and_date_labels() {
        let event = talk().price(12.5).build().unwrap();
        assert_eq!(event.price_label(), "$12.5");
        assert_eq!(event.date_label(), "1/1/2024");

        let whole = talk().build().unwrap();
        assert_eq!(whole.price_label(), "$10");
    }
}
