use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use bcrypt::{hash, verify, DEFAULT_COST};
use serde_json::json;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::{LoginRequest, SignupRequest, User};
use crate::services::Store;

pub async fn signup(
    State((store, _)): State<(Store, Config)>,
    Json(signup): Json<SignupRequest>,
) -> AppResult<Response> {
    tracing::debug!("Signup attempt for user: {}", signup.username);

    // Check both natural keys up front so duplicates surface as clean API
    // errors instead of storage constraint violations
    if store.get_user(&signup.username).await?.is_some() {
        tracing::debug!("Username already registered: {}", signup.username);
        return Err(AppError::Duplicate("Username already registered".into()));
    }
    if store.get_user_by_email(&signup.email).await?.is_some() {
        tracing::debug!("Email already registered: {}", signup.email);
        return Err(AppError::Duplicate("Email already registered".into()));
    }

    let password_hash = hash(signup.password.as_bytes(), DEFAULT_COST)?;
    let user = User {
        username: signup.username,
        email: signup.email,
        name: signup.name,
        password_hash,
    };

    store.save_user(&user).await?;

    tracing::info!("Registered user: {}", user.username);
    Ok((StatusCode::CREATED, Json(user)).into_response())
}

pub async fn list_users(
    State((store, _)): State<(Store, Config)>,
) -> AppResult<Response> {
    let users = store.list_users().await?;
    Ok(Json(users).into_response())
}

pub async fn login(
    State((store, _)): State<(Store, Config)>,
    Json(login): Json<LoginRequest>,
) -> AppResult<Response> {
    tracing::debug!("Login attempt for user: {}", login.username);

    // An unknown username and a wrong password answer identically
    let user = store
        .get_user(&login.username)
        .await?
        .ok_or_else(|| AppError::Unauthorized("Incorrect username or password".into()))?;

    if !verify(&login.password, &user.password_hash)? {
        tracing::debug!("Invalid password for user: {}", login.username);
        return Err(AppError::Unauthorized(
            "Incorrect username or password".into(),
        ));
    }

    tracing::info!("Login successful for user: {}", login.username);
    Ok(Json(json!({ "msg": "Login successful" })).into_response())
}

pub async fn delete_user(
    Path(username): Path<String>,
    State((store, _)): State<(Store, Config)>,
) -> AppResult<Response> {
    if store.delete_user(&username).await? == 0 {
        tracing::debug!("User not found: {}", username);
        return Err(AppError::NotFound("User not found".into()));
    }

    tracing::info!("Deleted user: {}", username);
    Ok(StatusCode::NO_CONTENT.into_response())
}
