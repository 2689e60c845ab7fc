//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`cart`, `session`, `notifications`, etc.) so
//! individual components depend on small plain models that are testable off
//! the browser. Components hold them in `RwSignal`s provided via context.

pub mod carousel;
pub mod cart;
pub mod dashboard;
pub mod favorites;
pub mod notifications;
pub mod session;
pub mod ui;
pub mod wizard;
