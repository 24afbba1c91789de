//! Client for a car-listing marketplace.
//!
//! The backend owns persistence, alert matching and authentication; this crate holds the
//! domain types, the REST and lookup clients, persisted client state, the listing filter
//! and form models, a reducer-style store and text views for the terminal front end.

pub mod application;
pub mod domain;
pub mod infra;
pub mod ui;
