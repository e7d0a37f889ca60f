/// Identifiers assigned by the database to stored submissions (BIGSERIAL).
pub type DbId = i64;
