use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// Job status enum. Any status can be set by any update call; there are no
// transition restrictions.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum JobStatus {
    Completed,
    Running,
    Incomplete,
}

#[derive(Debug, Serialize, Deserialize, Clone, FromRow)]
pub struct Job {
    pub filename: String,
    pub description: String,
    pub status: JobStatus,
    pub progress: i64,
}
