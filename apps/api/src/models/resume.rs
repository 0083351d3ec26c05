use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResumeRow {
    pub id: i32,
    pub filename: String,
    /// Raw text extracted from the uploaded PDF.
    pub content: String,
    pub uploaded_at: DateTime<Utc>,
    pub ai_feedback: Option<String>,
}
