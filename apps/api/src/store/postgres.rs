use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use super::JobBoardStore;
use crate::errors::AppError;
use crate::jobs::seed::seeded_at;
use crate::models::application::{Application, JoinedApplication, NewApplication};
use crate::models::job::{Job, NewJob};

const INSERT_JOB: &str = r#"
    INSERT INTO jobs
        (id, title, company, location, employment_type, experience, salary, skills, description)
    VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
    RETURNING *
"#;

const INSERT_SEED_JOB: &str = r#"
    INSERT INTO jobs
        (id, title, company, location, employment_type, experience, salary, skills, description,
         created_at)
    VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
    RETURNING *
"#;

/// PostgreSQL-backed store. One table per collection, see `migrations/`.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JobBoardStore for PgStore {
    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn prepare(&self) -> Result<(), AppError> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(anyhow::Error::from)?;
        info!("Store schema is up to date");
        Ok(())
    }

    async fn list_jobs(&self) -> Result<Vec<Job>, AppError> {
        Ok(
            sqlx::query_as::<_, Job>("SELECT * FROM jobs ORDER BY created_at DESC, id")
                .fetch_all(&self.pool)
                .await?,
        )
    }

    async fn insert_job(&self, job: NewJob) -> Result<Job, AppError> {
        Ok(bind_job(sqlx::query_as::<_, Job>(INSERT_JOB), job)
            .fetch_one(&self.pool)
            .await?)
    }

    async fn replace_jobs(&self, jobs: Vec<NewJob>) -> Result<Vec<Job>, AppError> {
        let mut tx = self.pool.begin().await?;

        let removed = sqlx::query("DELETE FROM jobs").execute(&mut *tx).await?;
        info!("Cleared {} existing jobs", removed.rows_affected());

        // now() is fixed for the whole transaction, so order comes from explicit stamps.
        let base = Utc::now();
        let mut inserted = Vec::with_capacity(jobs.len());
        for (index, job) in jobs.into_iter().enumerate() {
            let row = bind_job(sqlx::query_as::<_, Job>(INSERT_SEED_JOB), job)
                .bind(seeded_at(base, index))
                .fetch_one(&mut *tx)
                .await?;
            inserted.push(row);
        }

        tx.commit().await?;
        Ok(inserted)
    }

    async fn insert_application(
        &self,
        application: NewApplication,
    ) -> Result<Application, AppError> {
        Ok(sqlx::query_as::<_, Application>(
            r#"
            INSERT INTO applications
                (id, job_id, name, job_title, email, experience, phone,
                 notice_period, expected_ctc, resume_path, cover_letter)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(application.job_id)
        .bind(application.name)
        .bind(application.job_title)
        .bind(application.email)
        .bind(application.experience)
        .bind(application.phone)
        .bind(application.notice_period)
        .bind(application.expected_ctc)
        .bind(application.resume_path)
        .bind(application.cover_letter)
        .fetch_one(&self.pool)
        .await?)
    }

    async fn list_applications_with_jobs(&self) -> Result<Vec<JoinedApplication>, AppError> {
        Ok(sqlx::query_as::<_, JoinedApplication>(
            r#"
            SELECT a.*, j.title AS resolved_title
            FROM applications a
            LEFT JOIN jobs j ON j.id = a.job_id
            ORDER BY a.created_at DESC, a.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?)
    }
}

fn bind_job<'q>(
    query: sqlx::query::QueryAs<'q, sqlx::Postgres, Job, sqlx::postgres::PgArguments>,
    job: NewJob,
) -> sqlx::query::QueryAs<'q, sqlx::Postgres, Job, sqlx::postgres::PgArguments> {
    query
        .bind(Uuid::new_v4())
        .bind(job.title)
        .bind(job.company)
        .bind(job.location)
        .bind(job.employment_type)
        .bind(job.experience)
        .bind(job.salary)
        .bind(job.skills)
        .bind(job.description)
}
