//! Networking: wire types, error taxonomy, and the REST client.

pub mod api;
pub mod error;
pub mod types;
