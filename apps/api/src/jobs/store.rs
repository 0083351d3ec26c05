use sqlx::PgPool;

use crate::models::job::JobRow;

/// Returns every job posting in id order. Match ranking relies on this order for ties.
pub async fn list_jobs(pool: &PgPool) -> Result<Vec<JobRow>, sqlx::Error> {
    sqlx::query_as::<_, JobRow>("SELECT * FROM jobs ORDER BY id")
        .fetch_all(pool)
        .await
}
