use sqlx::PgPool;
use tracing::info;

use crate::models::resume::ResumeRow;

/// Inserts a freshly uploaded résumé without feedback.
pub async fn insert_resume(
    pool: &PgPool,
    filename: &str,
    content: &str,
) -> Result<ResumeRow, sqlx::Error> {
    let row = sqlx::query_as::<_, ResumeRow>(
        "INSERT INTO resumes (filename, content) VALUES ($1, $2) RETURNING *",
    )
    .bind(filename)
    .bind(content)
    .fetch_one(pool)
    .await?;

    info!("Stored resume {} ({} chars)", row.id, row.content.len());
    Ok(row)
}

pub async fn get_resume(pool: &PgPool, resume_id: i32) -> Result<Option<ResumeRow>, sqlx::Error> {
    sqlx::query_as::<_, ResumeRow>("SELECT * FROM resumes WHERE id = $1")
        .bind(resume_id)
        .fetch_optional(pool)
        .await
}

/// Overwrites `ai_feedback`. Returns `None` if the row no longer exists.
pub async fn update_feedback(
    pool: &PgPool,
    resume_id: i32,
    feedback: &str,
) -> Result<Option<ResumeRow>, sqlx::Error> {
    sqlx::query_as::<_, ResumeRow>(
        "UPDATE resumes SET ai_feedback = $1 WHERE id = $2 RETURNING *",
    )
    .bind(feedback)
    .bind(resume_id)
    .fetch_optional(pool)
    .await
}
