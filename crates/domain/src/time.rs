//! Date parsing and display helpers.
//!
//! Event dates travel as text: either the `YYYY-MM-DDTHH:MM` value produced by
//! a `datetime-local` input, or the RFC 3339 rendering the backend stores.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const LOCAL_INPUT_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S%.f"];

/// Parse an event date into a naive (wall clock) date-time.
///
/// Returns `None` when the text matches none of the known formats.
#[must_use]
pub fn parse_event_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.naive_utc());
    }
    for format in LOCAL_INPUT_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(ts);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// Short `M/D/YYYY` label for an event date, falling back to the raw text.
#[must_use]
pub fn date_label(raw: &str) -> String {
    parse_event_date(raw).map_or_else(
        || raw.to_string(),
        |ts| ts.date().format("%-m/%-d/%Y").to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_datetime_local_input() {
        let ts = parse_event_date("2024-01-01T10:00").unwrap();
        assert_eq!(ts.to_string(), "2024-01-01 10:00:00");
    }

    #[test]
    fn should_parse_rfc3339_from_backend() {
        let ts = parse_event_date("2024-03-05T18:30:00.000Z").unwrap();
        assert_eq!(ts.to_string(), "2024-03-05 18:30:00");
    }

    #[test]
    fn should_parse_plain_date() {
        let ts = parse_event_date("2024-12-24").unwrap();
        assert_eq!(ts.to_string(), "2024-12-24 00:00:00");
    }

    #[test]
    fn should_return_none_for_garbage() {
        assert!(parse_event_date("next tuesday").is_none());
    }

    #[test]
    fn should_render_short_label() {
        assert_eq!(date_label("2024-01-01T10:00"), "1/1/2024");
        assert_eq!(date_label("2024-11-23T08:15:00Z"), "11/23/2024");
    }

    #[test]
    fn should_fall_back_to_raw_text_when_unparseable() {
        assert_eq!(date_label("soon"), "soon");
    }
}
