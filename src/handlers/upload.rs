use axum::{
    extract::{multipart::Field, Multipart, State},
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use std::io::Write;
use std::path::Path as FilePath;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::services::Store;

pub async fn upload_file(
    State((_, config)): State<(Store, Config)>,
    mut multipart: Multipart,
) -> AppResult<Response> {
    tracing::debug!("Processing file upload");

    let mut saved: Option<(String, String)> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        tracing::error!("Failed to get next field from multipart form: {}", e);
        AppError::Upload(format!("Failed to process form field: {}", e))
    })? {
        // The file part is the field carrying a filename; anything else is ignored
        if field.file_name().is_some() {
            saved = Some(handle_file_upload(field, &config.upload.dir).await?);
        } else {
            tracing::warn!("Unexpected form field: {}", field.name().unwrap_or(""));
        }
    }

    let (filename, location) =
        saved.ok_or_else(|| AppError::Upload("No file uploaded".into()))?;

    tracing::info!("Saved uploaded file: {}", location);
    Ok(Json(json!({
        "info": format!("file '{}' saved at '{}'", filename, location)
    }))
    .into_response())
}

// Helper function to handle the file part of the upload.
// Saves the uploaded bytes and returns the filename and storage path.
async fn handle_file_upload(mut field: Field<'_>, upload_dir: &str) -> AppResult<(String, String)> {
    let filename = field
        .file_name()
        .ok_or_else(|| AppError::Upload("Missing filename in upload".into()))?
        .to_string();

    if !FilePath::new(upload_dir).exists() {
        std::fs::create_dir_all(upload_dir).map_err(|e| {
            tracing::error!("Failed to create upload directory {}: {}", upload_dir, e);
            AppError::File(e)
        })?;
    }

    // The client-supplied filename is used verbatim; a same-named upload
    // silently overwrites the previous file
    let location = format!("{}/{}", upload_dir, filename);
    save_uploaded_file(&mut field, &location).await?;

    tracing::debug!("Successfully handled file upload: {} -> {}", filename, location);
    Ok((filename, location))
}

// Helper function to save uploaded file chunks.
// Writes file data to disk using a buffered writer.
async fn save_uploaded_file(field: &mut Field<'_>, location: &str) -> AppResult<()> {
    tracing::debug!("Starting to save uploaded file to: {}", location);

    let file = std::fs::File::create(location).map_err(|e| {
        tracing::error!("Failed to create file {}: {}", location, e);
        AppError::File(e)
    })?;
    let mut writer = std::io::BufWriter::new(file);

    while let Some(chunk) = field.chunk().await.map_err(|e| {
        tracing::error!("Error reading upload chunk for {}: {}", location, e);
        AppError::Upload(format!("Failed to read upload: {}", e))
    })? {
        writer.write_all(&chunk).map_err(|e| {
            tracing::error!("Error writing chunk to {}: {}", location, e);
            AppError::File(e)
        })?;
    }

    writer.flush().map_err(|e| {
        tracing::error!("Error flushing file {}: {}", location, e);
        AppError::File(e)
    })?;

    tracing::debug!("Successfully saved uploaded file to: {}", location);
    Ok(())
}
