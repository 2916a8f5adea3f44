use serde::Deserialize;

use super::job::JobStatus;

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub name: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateJobRequest {
    pub filename: String,
    pub description: String,
    pub status: JobStatus,
    #[serde(default)]
    pub progress: i64,
}

#[derive(Debug, Deserialize)]
pub struct UpdateJobRequest {
    pub status: JobStatus,
    pub progress: i64,
}
