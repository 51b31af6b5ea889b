//! # eventbook-app
//!
//! Application layer: the events page state, use-cases and **port
//! definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** that adapters implement (driven/outbound port):
//!   - `EventGateway`: fetch the event list, create an event
//! - Hold the client-side **event store** (ordered, append-only between loads)
//! - Define the **events page reducer**: the single writer for the store,
//!   the overlay, the loading flag and the creation draft
//! - Provide the **event service** that executes the reducer's commands
//!   against a gateway, and a **runtime** that funnels concurrent request
//!   completions back into the reducer in arrival order
//!
//! ## Dependency rule
//! Depends on `eventbook-domain` only (plus `tokio` for channels and tasks).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod page;
pub mod ports;
pub mod runtime;
pub mod services;
pub mod store;
