//! # eventbook-graphql-wire
//!
//! GraphQL documents and JSON shapes shared by every eventbook client.
//!
//! ## Responsibilities
//! - Hold the query and mutation documents sent to the backend
//! - Describe the request envelope `{ "query": ..., "variables": ... }` and
//!   the response envelope `{ "data": ..., "errors": [...] }`
//! - Turn the `createEvent` answer into a domain [`Event`](eventbook_domain::event::Event)
//!
//! ## Dependency rule
//! Depends on `eventbook-domain` and `serde` only. No HTTP client, so it
//! builds for native and wasm targets alike.

pub mod documents;
pub mod error;
pub mod wire;

pub use error::WireError;
