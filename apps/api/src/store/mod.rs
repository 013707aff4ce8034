//! Persistence seam for jobs and applications.
//!
//! `AppState` holds an `Arc<dyn JobBoardStore>`. Production wires in
//! `PgStore`; handler tests use the in-memory double.

#[cfg(test)]
pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::application::{Application, JoinedApplication, NewApplication};
use crate::models::job::{Job, NewJob};

#[async_trait]
pub trait JobBoardStore: Send + Sync {
    /// Cheap round trip used by the supervisor to track readiness.
    async fn ping(&self) -> Result<(), AppError>;

    /// One-time schema setup after the first successful connection.
    async fn prepare(&self) -> Result<(), AppError>;

    /// All jobs, newest first.
    async fn list_jobs(&self) -> Result<Vec<Job>, AppError>;

    async fn insert_job(&self, job: NewJob) -> Result<Job, AppError>;

    /// Deletes every job and inserts `jobs` in their place. Applications are
    /// left alone, so their references may dangle afterwards.
    async fn replace_jobs(&self, jobs: Vec<NewJob>) -> Result<Vec<Job>, AppError>;

    /// Stored as given; the job reference is not checked.
    async fn insert_application(&self, application: NewApplication)
        -> Result<Application, AppError>;

    /// All applications, newest first, each with its job's current title
    /// when that job still exists.
    async fn list_applications_with_jobs(&self) -> Result<Vec<JoinedApplication>, AppError>;
}
