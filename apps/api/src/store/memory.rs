//! In-memory `JobBoardStore` for handler and supervisor tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use super::JobBoardStore;
use crate::errors::AppError;
use crate::jobs::seed::seeded_at;
use crate::models::application::{Application, JoinedApplication, NewApplication};
use crate::models::job::{Job, NewJob};

#[derive(Default)]
pub struct MemoryStore {
    jobs: Mutex<Vec<Job>>,
    applications: Mutex<Vec<Application>>,
    failing_pings: AtomicUsize,
    pings: AtomicUsize,
    prepared: AtomicUsize,
}

impl MemoryStore {
    /// A store whose first `n` pings fail with a pool timeout.
    pub fn failing_pings(n: usize) -> Self {
        Self {
            failing_pings: AtomicUsize::new(n),
            ..Self::default()
        }
    }

    pub fn fail_next_pings(&self, n: usize) {
        self.failing_pings.store(n, Ordering::SeqCst);
    }

    pub fn ping_count(&self) -> usize {
        self.pings.load(Ordering::SeqCst)
    }

    pub fn prepare_count(&self) -> usize {
        self.prepared.load(Ordering::SeqCst)
    }

    pub fn delete_job(&self, id: Uuid) {
        self.jobs.lock().unwrap().retain(|j| j.id != id);
    }

    fn build_job(job: NewJob) -> Job {
        Job {
            id: Uuid::new_v4(),
            title: job.title,
            company: job.company,
            location: job.location,
            employment_type: job.employment_type,
            experience: job.experience,
            salary: job.salary,
            skills: job.skills,
            description: job.description,
            created_at: Utc::now(),
        }
    }
}

#[async_trait]
impl JobBoardStore for MemoryStore {
    async fn ping(&self) -> Result<(), AppError> {
        self.pings.fetch_add(1, Ordering::SeqCst);
        let failing = self
            .failing_pings
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if failing {
            return Err(AppError::Store(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }

    async fn prepare(&self) -> Result<(), AppError> {
        self.prepared.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn list_jobs(&self) -> Result<Vec<Job>, AppError> {
        // Newest insert first among equal timestamps.
        let mut jobs: Vec<Job> = self.jobs.lock().unwrap().iter().rev().cloned().collect();
        jobs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(jobs)
    }

    async fn insert_job(&self, job: NewJob) -> Result<Job, AppError> {
        let job = Self::build_job(job);
        self.jobs.lock().unwrap().push(job.clone());
        Ok(job)
    }

    async fn replace_jobs(&self, jobs: Vec<NewJob>) -> Result<Vec<Job>, AppError> {
        let base = Utc::now();
        let inserted: Vec<Job> = jobs
            .into_iter()
            .enumerate()
            .map(|(index, job)| Job {
                created_at: seeded_at(base, index),
                ..Self::build_job(job)
            })
            .collect();
        *self.jobs.lock().unwrap() = inserted.clone();
        Ok(inserted)
    }

    async fn insert_application(
        &self,
        application: NewApplication,
    ) -> Result<Application, AppError> {
        let application = Application {
            id: Uuid::new_v4(),
            job_id: application.job_id,
            name: application.name,
            job_title: application.job_title,
            email: application.email,
            experience: application.experience,
            phone: application.phone,
            notice_period: application.notice_period,
            expected_ctc: application.expected_ctc,
            resume_path: application.resume_path,
            cover_letter: application.cover_letter,
            created_at: Utc::now(),
        };
        self.applications.lock().unwrap().push(application.clone());
        Ok(application)
    }

    async fn list_applications_with_jobs(&self) -> Result<Vec<JoinedApplication>, AppError> {
        let jobs = self.jobs.lock().unwrap();
        let applications = self.applications.lock().unwrap();
        Ok(applications
            .iter()
            .rev()
            .map(|a| JoinedApplication {
                application: a.clone(),
                resolved_title: jobs
                    .iter()
                    .find(|j| j.id == a.job_id)
                    .map(|j| j.title.clone()),
            })
            .collect())
    }
}
