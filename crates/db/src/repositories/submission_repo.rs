//! Repository for the `form` table.

use async_trait::async_trait;
use cardform_core::submission::NewSubmission;
use cardform_core::types::DbId;
use sqlx::PgPool;

/// Inserts card submissions into the `form` table.
pub struct SubmissionRepo;

impl SubmissionRepo {
    /// Insert one submission, returning the assigned id if the database
    /// reported one.
    ///
    /// A single statement: the row is either fully written or not at all.
    pub async fn create(pool: &PgPool, input: &NewSubmission) -> Result<Option<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "INSERT INTO form \
                (tipo_carta, carta_negra, carta_blanca, contexto, ip_address, user_agent) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING id",
        )
        .bind(input.card_type.as_str())
        .bind(&input.black_text)
        .bind(&input.white_text)
        .bind(&input.context)
        .bind(&input.client_ip)
        .bind(&input.client_agent)
        .fetch_optional(pool)
        .await
    }
}

/// Destination for validated submissions.
///
/// The HTTP layer only sees this trait, so handlers can run against an
/// in-memory store in tests.
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    async fn insert(&self, submission: &NewSubmission) -> Result<Option<DbId>, sqlx::Error>;
}

/// [`SubmissionStore`] backed by PostgreSQL.
#[derive(Clone)]
pub struct PgSubmissionStore {
    pool: PgPool,
}

impl PgSubmissionStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubmissionStore for PgSubmissionStore {
    async fn insert(&self, submission: &NewSubmission) -> Result<Option<DbId>, sqlx::Error> {
        let id = SubmissionRepo::create(&self.pool, submission).await?;
        tracing::debug!(submission_id = ?id, card_type = %submission.card_type, "Inserted submission row");
        Ok(id)
    }
}
