mod auth;
mod job;
mod upload;

pub use auth::{delete_user, list_users, login, signup};
pub use job::{create_job, delete_job, list_jobs, update_job};
pub use upload::upload_file;
