//! Request handlers for the single form route.

pub mod fallback;
pub mod health;
pub mod submission;
