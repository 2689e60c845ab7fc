//! Routed pages. Each one reads shared handles from context.

pub mod cart;
pub mod home;
pub mod login;
pub mod my_store;
pub mod store_registration;
