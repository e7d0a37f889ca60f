//! Domain logic for card contributions.
//!
//! Everything here is pure: decoding request bodies into a field mapping,
//! building the typed submission record, and applying the submission rules.
//! No HTTP or database dependencies.

pub mod card;
pub mod decode;
pub mod error;
pub mod fields;
pub mod submission;
pub mod types;
pub mod validation;
