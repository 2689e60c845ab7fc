//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, location,
//! clock, embedded page data) and pure formatting rules from page and
//! component logic to improve reuse and testability.

pub mod auth;
pub mod clock;
pub mod dom;
pub mod cnpj;
pub mod format;
pub mod mask;
pub mod nav;
pub mod page_data;
pub mod upload;
