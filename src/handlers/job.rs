use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::{CreateJobRequest, Job, UpdateJobRequest};
use crate::services::Store;

pub async fn list_jobs(
    State((store, _)): State<(Store, Config)>,
) -> AppResult<Response> {
    let jobs = store.list_jobs().await?;
    Ok(Json(jobs).into_response())
}

pub async fn create_job(
    State((store, _)): State<(Store, Config)>,
    Json(create): Json<CreateJobRequest>,
) -> AppResult<Response> {
    tracing::debug!("Creating job for file: {}", create.filename);

    // Pre-check the primary key so a duplicate filename is a clean API error
    // rather than a storage constraint violation
    if store.get_job(&create.filename).await?.is_some() {
        tracing::debug!("Filename already registered: {}", create.filename);
        return Err(AppError::Duplicate("Filename already registered".into()));
    }

    let job = Job {
        filename: create.filename,
        description: create.description,
        status: create.status,
        progress: create.progress,
    };

    store.save_job(&job).await?;

    tracing::info!("Created job: {}", job.filename);
    Ok((StatusCode::CREATED, Json(job)).into_response())
}

pub async fn update_job(
    Path(filename): Path<String>,
    State((store, _)): State<(Store, Config)>,
    Json(update): Json<UpdateJobRequest>,
) -> AppResult<Response> {
    let job = store
        .update_job(&filename, update.status, update.progress)
        .await?
        .ok_or_else(|| {
            tracing::debug!("Job not found: {}", filename);
            AppError::NotFound("Job not found".into())
        })?;

    tracing::info!(
        "Updated job {}: status {:?}, progress {}",
        job.filename,
        job.status,
        job.progress
    );
    Ok(Json(job).into_response())
}

pub async fn delete_job(
    Path(filename): Path<String>,
    State((store, _)): State<(Store, Config)>,
) -> AppResult<Response> {
    if store.delete_job(&filename).await? == 0 {
        tracing::debug!("Job not found: {}", filename);
        return Err(AppError::NotFound("Job not found".into()));
    }

    tracing::info!("Deleted job: {}", filename);
    Ok(StatusCode::NO_CONTENT.into_response())
}
