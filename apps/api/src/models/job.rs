use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A job posting. `skills_required` is one comma-separated or free-text string.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobRow {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub location: String,
    pub skills_required: String,
}
