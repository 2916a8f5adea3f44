mod forms;
mod job;
mod user;

pub use forms::{CreateJobRequest, LoginRequest, SignupRequest, UpdateJobRequest};
pub use job::{Job, JobStatus};
pub use user::User;
