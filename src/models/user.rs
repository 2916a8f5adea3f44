use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, Clone, FromRow)]
pub struct User {
    pub username: String,
    pub email: String,
    pub name: String,
    // We store hashed passwords, not plain text; the hash never leaves the server.
    #[serde(skip_serializing)]
    pub password_hash: String,
}
