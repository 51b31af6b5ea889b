//! # eventbook-domain
//!
//! Pure domain model for the eventbook client.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, date helpers
//! - Define **Events** (bookable things with a title, price and date)
//! - Define **Users** and the creator reference carried by each event
//! - Define the **Session** snapshot handed over by the authentication provider
//! - Define the **Draft** staged by the creation form and its validation
//! - Define the **Overlay** state machine (idle / creating / viewing)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod draft;
pub mod event;
pub mod overlay;
pub mod session;
pub mod user;
