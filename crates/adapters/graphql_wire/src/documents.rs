//! GraphQL documents sent to the backend.

/// Every event with its creator.
pub const EVENTS_QUERY: &str = "
query Events {
  events {
    _id
    title
    description
    date
    price
    creator {
      _id
      email
    }
  }
}
";

/// Create one event from the `$eventInput` variable.
pub const CREATE_EVENT_MUTATION: &str = "
mutation CreateEvent($eventInput: EventInput!) {
  createEvent(eventInput: $eventInput) {
    _id
    title
    description
    date
    price
    creator {
      _id
      email
    }
  }
}
";
