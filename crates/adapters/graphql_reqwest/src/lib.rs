//! # eventbook-adapter-graphql-reqwest
//!
//! GraphQL adapter built on [reqwest](https://docs.rs/reqwest).
//!
//! ## Responsibilities
//! - Implement the [`EventGateway`](eventbook_app::ports::EventGateway) port
//! - Send every request as `POST <endpoint>` with a JSON body
//!   `{ "query": ..., "variables": ... }`
//! - Keep user input out of the query documents: mutation values travel as
//!   GraphQL variables
//! - Attach the session's bearer token to mutations
//! - Treat anything but `200`/`201`, a transport failure, an undecodable body
//!   or a GraphQL `errors` array as a failed request
//!
//! ## Dependency rule
//! Depends on `eventbook-app` (for the port trait), `eventbook-domain` and
//! `eventbook-graphql-wire` (for the documents and wire shapes). Never leaks
//! reqwest types into the domain.

mod client;
pub mod config;
pub mod error;

pub use client::GraphqlGateway;
pub use config::GraphqlConfig;
pub use error::GatewayError;
