use sqlx::{Pool, Postgres};
use tracing::debug;
use uuid::Uuid;

use crate::db::models::{deleted_job_title, Job, JobDeletion, JobFields};

const JOB_COLUMNS: &str = "id, title, department, location, job_type, salary, description, \
                           requirements, created_at, updated_at";

/// Repository for job posting database operations
pub struct JobRepository;

impl JobRepository {
    pub async fn list(pool: &Pool<Postgres>) -> Result<Vec<Job>, sqlx::Error> {
        let sql = format!("SELECT {} FROM jobs ORDER BY created_at DESC", JOB_COLUMNS);
        sqlx::query_as::<_, Job>(&sql).fetch_all(pool).await
    }

    pub async fn find(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<Job>, sqlx::Error> {
        let sql = format!("SELECT {} FROM jobs WHERE id = $1", JOB_COLUMNS);
        sqlx::query_as::<_, Job>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Create a new job in the database and return the full job record
    pub async fn create(pool: &Pool<Postgres>, job: &JobFields) -> Result<Job, sqlx::Error> {
        debug!("Creating job: title={}", job.title);

        let sql = format!(
            r#"
            INSERT INTO jobs (title, department, location, job_type, salary, description, requirements)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {}
            "#,
            JOB_COLUMNS
        );
        let row = sqlx::query_as::<_, Job>(&sql)
            .bind(&job.title)
            .bind(&job.department)
            .bind(&job.location)
            .bind(&job.job_type)
            .bind(&job.salary)
            .bind(&job.description)
            .bind(&job.requirements)
            .fetch_one(pool)
            .await?;

        debug!("Job created with id={}", row.id);
        Ok(row)
    }

    pub async fn update(
        pool: &Pool<Postgres>,
        id: Uuid,
        job: &JobFields,
    ) -> Result<Option<Job>, sqlx::Error> {
        let sql = format!(
            r#"
            UPDATE jobs
            SET title = $2, department = $3, location = $4, job_type = $5,
                salary = $6, description = $7, requirements = $8, updated_at = now()
            WHERE id = $1
            RETURNING {}
            "#,
            JOB_COLUMNS
        );
        sqlx::query_as::<_, Job>(&sql)
            .bind(id)
            .bind(&job.title)
            .bind(&job.department)
            .bind(&job.location)
            .bind(&job.job_type)
            .bind(&job.salary)
            .bind(&job.description)
            .bind(&job.requirements)
            .fetch_optional(pool)
            .await
    }

    /// Delete a job, detaching its applications in the same transaction
    ///
    /// Applications keep their data; their `job_id` is cleared and their
    /// `job_title` is marked as deleted.
    pub async fn delete_preserving_applications(
        pool: &Pool<Postgres>,
        id: Uuid,
    ) -> Result<Option<JobDeletion>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let sql = format!("SELECT {} FROM jobs WHERE id = $1 FOR UPDATE", JOB_COLUMNS);
        let Some(job) = sqlx::query_as::<_, Job>(&sql)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            tx.rollback().await?;
            return Ok(None);
        };

        let preserved = sqlx::query(
            "UPDATE job_applications SET job_id = NULL, job_title = $2 WHERE job_id = $1",
        )
        .bind(id)
        .bind(deleted_job_title(&job.title))
        .execute(&mut *tx)
        .await?
        .rows_affected();

        sqlx::query("DELETE FROM jobs WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        debug!("Job {} deleted, {} applications preserved", id, preserved);
        Ok(Some(JobDeletion {
            job,
            preserved_applications: preserved,
        }))
    }
}
