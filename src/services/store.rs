use sqlx::SqlitePool;

use crate::models::{Job, JobStatus, User};

/// Column lists shared across queries to avoid repetition.
const USER_COLUMNS: &str = "username, email, name, password_hash";
const JOB_COLUMNS: &str = "filename, description, status, progress";

/// Persistence service backed by a SQLite connection pool. Each method checks
/// out a pooled connection for its own duration, so the connection is released
/// on every exit path.
#[derive(Clone)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn get_user(&self, username: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE username = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(username)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE email = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn list_users(&self) -> Result<Vec<User>, sqlx::Error> {
        let query = format!("SELECT {USER_COLUMNS} FROM users");
        sqlx::query_as::<_, User>(&query).fetch_all(&self.pool).await
    }

    pub async fn save_user(&self, user: &User) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO users (username, email, name, password_hash) VALUES ($1, $2, $3, $4)",
        )
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.name)
        .bind(&user.password_hash)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Delete a user by username, returning the number of rows removed.
    pub async fn delete_user(&self, username: &str) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM users WHERE username = $1")
            .bind(username)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    pub async fn get_job(&self, filename: &str) -> Result<Option<Job>, sqlx::Error> {
        let query = format!("SELECT {JOB_COLUMNS} FROM jobs WHERE filename = $1");
        sqlx::query_as::<_, Job>(&query)
            .bind(filename)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn list_jobs(&self) -> Result<Vec<Job>, sqlx::Error> {
        let query = format!("SELECT {JOB_COLUMNS} FROM jobs");
        sqlx::query_as::<_, Job>(&query).fetch_all(&self.pool).await
    }

    pub async fn save_job(&self, job: &Job) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO jobs (filename, description, status, progress) VALUES ($1, $2, $3, $4)",
        )
        .bind(&job.filename)
        .bind(&job.description)
        .bind(job.status)
        .bind(job.progress)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Overwrite status and progress for the given filename. Only these two
    /// fields are mutable; filename and description never change.
    ///
    /// Returns `None` if no job with that filename exists.
    pub async fn update_job(
        &self,
        filename: &str,
        status: JobStatus,
        progress: i64,
    ) -> Result<Option<Job>, sqlx::Error> {
        let query = format!(
            "UPDATE jobs SET status = $2, progress = $3 WHERE filename = $1 RETURNING {JOB_COLUMNS}"
        );
        sqlx::query_as::<_, Job>(&query)
            .bind(filename)
            .bind(status)
            .bind(progress)
            .fetch_optional(&self.pool)
            .await
    }

    /// Delete a job by filename, returning the number of rows removed.
    pub async fn delete_job(&self, filename: &str) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM jobs WHERE filename = $1")
            .bind(filename)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
