use sqlx::{Pool, Postgres};
use tracing::debug;
use uuid::Uuid;

use crate::db::models::{
    GeneralApplication, GeneralApplicationStatus, JobApplication, JobApplicationStatus,
    NewGeneralApplication, NewJobApplication,
};

const JOB_APPLICATION_COLUMNS: &str = "id, job_id, job_title, first_name, last_name, email, phone, \
     cover_letter, experience, linkedin_url, portfolio_url, cv_url, status, created_at";

const GENERAL_APPLICATION_COLUMNS: &str = "id, first_name, last_name, email, phone, \
     \"current_role\", experience, interested_roles, availability_date, linkedin_url, \
     portfolio_url, additional_info, cv_url, status, created_at";

/// Repository for applications tied to a job posting
pub struct JobApplicationRepository;

impl JobApplicationRepository {
    pub async fn list(pool: &Pool<Postgres>) -> Result<Vec<JobApplication>, sqlx::Error> {
        let sql = format!(
            "SELECT {} FROM job_applications ORDER BY created_at DESC",
            JOB_APPLICATION_COLUMNS
        );
        sqlx::query_as::<_, JobApplication>(&sql).fetch_all(pool).await
    }

    pub async fn find(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<JobApplication>, sqlx::Error> {
        let sql = format!(
            "SELECT {} FROM job_applications WHERE id = $1",
            JOB_APPLICATION_COLUMNS
        );
        sqlx::query_as::<_, JobApplication>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new application with status `pending`, copying the title of
    /// the referenced job
    ///
    /// Returns `None` when the job does not exist. The job row is key-share
    /// locked, so a concurrent deletion either completes first or waits.
    pub async fn create(
        pool: &Pool<Postgres>,
        application: &NewJobApplication,
    ) -> Result<Option<JobApplication>, sqlx::Error> {
        debug!("Creating job application for job={}", application.job_id);

        let sql = format!(
            r#"
            INSERT INTO job_applications
                (job_id, job_title, first_name, last_name, email, phone, cover_letter,
                 experience, linkedin_url, portfolio_url, cv_url, status)
            SELECT id, title, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11
            FROM jobs
            WHERE id = $1
            FOR KEY SHARE
            RETURNING {}
            "#,
            JOB_APPLICATION_COLUMNS
        );
        sqlx::query_as::<_, JobApplication>(&sql)
            .bind(application.job_id)
            .bind(&application.first_name)
            .bind(&application.last_name)
            .bind(&application.email)
            .bind(&application.phone)
            .bind(&application.cover_letter)
            .bind(&application.experience)
            .bind(&application.linkedin_url)
            .bind(&application.portfolio_url)
            .bind(&application.cv_url)
            .bind(JobApplicationStatus::Pending)
            .fetch_optional(pool)
            .await
    }

    pub async fn update_status(
        pool: &Pool<Postgres>,
        id: Uuid,
        status: JobApplicationStatus,
    ) -> Result<Option<JobApplication>, sqlx::Error> {
        let sql = format!(
            "UPDATE job_applications SET status = $2 WHERE id = $1 RETURNING {}",
            JOB_APPLICATION_COLUMNS
        );
        sqlx::query_as::<_, JobApplication>(&sql)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &Pool<Postgres>, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM job_applications WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Repository for open (not job specific) applications
pub struct GeneralApplicationRepository;

impl GeneralApplicationRepository {
    pub async fn list(pool: &Pool<Postgres>) -> Result<Vec<GeneralApplication>, sqlx::Error> {
        let sql = format!(
            "SELECT {} FROM general_applications ORDER BY created_at DESC",
            GENERAL_APPLICATION_COLUMNS
        );
        sqlx::query_as::<_, GeneralApplication>(&sql).fetch_all(pool).await
    }

    pub async fn create(
        pool: &Pool<Postgres>,
        application: &NewGeneralApplication,
    ) -> Result<GeneralApplication, sqlx::Error> {
        debug!("Creating general application for {}", application.email);

        let sql = format!(
            r#"
            INSERT INTO general_applications
                (first_name, last_name, email, phone, "current_role", experience,
                 interested_roles, availability_date, linkedin_url, portfolio_url,
                 additional_info, cv_url, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING {}
            "#,
            GENERAL_APPLICATION_COLUMNS
        );
        sqlx::query_as::<_, GeneralApplication>(&sql)
            .bind(&application.first_name)
            .bind(&application.last_name)
            .bind(&application.email)
            .bind(&application.phone)
            .bind(&application.current_role)
            .bind(&application.experience)
            .bind(&application.interested_roles)
            .bind(&application.availability_date)
            .bind(&application.linkedin_url)
            .bind(&application.portfolio_url)
            .bind(&application.additional_info)
            .bind(&application.cv_url)
            .bind(GeneralApplicationStatus::Pending)
            .fetch_one(pool)
            .await
    }

    pub async fn update_status(
        pool: &Pool<Postgres>,
        id: Uuid,
        status: GeneralApplicationStatus,
    ) -> Result<Option<GeneralApplication>, sqlx::Error> {
        let sql = format!(
            "UPDATE general_applications SET status = $2 WHERE id = $1 RETURNING {}",
            GENERAL_APPLICATION_COLUMNS
        );
        sqlx::query_as::<_, GeneralApplication>(&sql)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &Pool<Postgres>, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM general_applications WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
