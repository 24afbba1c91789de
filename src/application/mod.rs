//! Application layer (use-cases, policies).
//!
//! Filtering, pagination and form validation for the views, without depending on the
//! store, the terminal or the network.

pub mod filter;
pub mod forms;
pub mod pagination;
