//! Draft: values staged by the creation form before submission.

use serde::Serialize;

use crate::error::ValidationError;

/// A field of the creation form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Title,
    Price,
    Date,
    Description,
}

/// Raw text typed into the creation form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventDraft {
    pub title: String,
    pub price: String,
    pub date: String,
    pub description: String,
}

impl EventDraft {
    /// Replace the value of a single field.
    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        let value = value.into();
        match field {
            DraftField::Title => self.title = value,
            DraftField::Price => self.price = value,
            DraftField::Date => self.date = value,
            DraftField::Description => self.description = value,
        }
    }

    /// Validate the draft and turn it into a creation request.
    ///
    /// Blank title, date or description, and a price that is empty (read as
    /// zero), negative, or zero are rejected. Values are submitted untrimmed.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] encountered.
    pub fn into_input(self) -> Result<EventInput, ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        let price = parse_price(&self.price)?;
        if self.date.trim().is_empty() {
            return Err(ValidationError::EmptyDate);
        }
        if self.description.trim().is_empty() {
            return Err(ValidationError::EmptyDescription);
        }
        Ok(EventInput {
            title: self.title,
            description: self.description,
            price,
            date: self.date,
        })
    }
}

fn parse_price(raw: &str) -> Result<f64, ValidationError> {
    let trimmed = raw.trim();
    let price = if trimmed.is_empty() {
        0.0
    } else {
        trimmed
            .parse::<f64>()
            .map_err(|_| ValidationError::InvalidPrice(raw.to_string()))?
    };
    if !price.is_finite() || price <= 0.0 {
        return Err(ValidationError::NonPositivePrice);
    }
    Ok(price)
}

/// Validated payload for the `createEvent` mutation (`EventInput` in GraphQL).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventInput {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub date: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> EventDraft {
        let mut draft = EventDraft::default();
        draft.set(DraftField::Title, "Talk");
        draft.set(DraftField::Price, "10");
        draft.set(DraftField::Date, "2024-01-01T10:00");
        draft.set(DraftField::Description, "A talk");
        draft
    }

    #[test]
    fn should_produce_input_when_all_fields_valid() {
        let input = filled().into_input().unwrap();
        assert_eq!(input.title, "Talk");
        assert!((input.price - 10.0).abs() < f64::EPSILON);
        assert_eq!(input.date, "2024-01-01T10:00");
        assert_eq!(input.description, "A talk");
    }

    #[test]
    fn should_reject_negative_price() {
        let mut draft = filled();
        draft.set(DraftField::Price, "-5");
        assert_eq!(draft.into_input(), Err(ValidationError::NonPositivePrice));
    }

    #[test]
    fn should_read_empty_price_as_zero() {
        let mut draft = filled();
        draft.set(DraftField::Price, "");
        assert_eq!(draft.into_input(), Err(ValidationError::NonPositivePrice));
    }

    #[test]
    fn should_reject_non_numeric_price() {
        let mut draft = filled();
        draft.set(DraftField::Price, "ten");
        assert_eq!(
            draft.into_input(),
            Err(ValidationError::InvalidPrice("ten".to_string()))
        );
    }

    #[test]
    fn should_reject_nan_price() {
        let mut draft = filled();
        draft.set(DraftField::Price, "NaN");
        assert_eq!(draft.into_input(), Err(ValidationError::NonPositivePrice));
    }

    #[test]
    fn should_reject_whitespace_only_fields() {
        let mut draft = filled();
        draft.set(DraftField::Description, " \n ");
        assert_eq!(draft.into_input(), Err(ValidationError::EmptyDescription));

        let mut draft = filled();
        draft.set(DraftField::Date, "  ");
        assert_eq!(draft.into_input(), Err(ValidationError::EmptyDate));
    }

    #[test]
    fn should_keep_values_untrimmed() {
        let mut draft = filled();
        draft.set(DraftField::Title, "  Talk ");
        let input = draft.into_input().unwrap();
        assert_eq!(input.title, "  Talk ");
    }

    #[test]
    fn should_serialize_graphql_field_names() {
        let json = serde_json::to_value(filled().into_input().unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "title": "Talk",
                "description": "A talk",
                "price": 10.0,
                "date": "2024-01-01T10:00",
            })
        );
    }
}
