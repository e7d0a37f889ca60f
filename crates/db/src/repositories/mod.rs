//! Repositories for tables owned by the service.

mod submission_repo;

pub use submission_repo::{PgSubmissionStore, SubmissionRepo, SubmissionStore};
