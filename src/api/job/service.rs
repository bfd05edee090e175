use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use super::dto::JobDeletedResponse;
use super::models::JobRequest;
use crate::api::error::ApiError;
use crate::db::models::{Job, JobFields};
use crate::db::ContentStore;

/// Job service containing the careers business logic
pub struct JobService {
    store: Arc<dyn ContentStore>,
}

impl JobService {
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Result<Vec<Job>, ApiError> {
        Ok(self.store.list_jobs().await?)
    }

    pub async fn get(&self, id: Uuid) -> Result<Job, ApiError> {
        self.store
            .get_job(id)
            .await?
            .ok_or_else(|| ApiError::not_found("Job", id))
    }

    pub async fn create(&self, request: &JobRequest) -> Result<Job, ApiError> {
        info!("Service: Creating job with title={}", request.title);
        let job = self.store.create_job(&Self::fields(request)).await?;
        info!("Service: Job created successfully with id={}", job.id);
        Ok(job)
    }

    pub async fn update(&self, id: Uuid, request: &JobRequest) -> Result<Job, ApiError> {
        let job = self
            .store
            .update_job(id, &Self::fields(request))
            .await?
            .ok_or_else(|| ApiError::not_found("Job", id))?;
        info!("Service: Job updated id={}", job.id);
        Ok(job)
    }

    /// Delete a job posting
    ///
    /// # Business Logic
    /// - Applications referencing the job are kept
    /// - Their job reference is cleared and their job title marked as deleted
    /// - Both changes and the removal happen as one storage operation
    pub async fn delete(&self, id: Uuid) -> Result<JobDeletedResponse, ApiError> {
        info!("Service: Deleting job id={}", id);

        let deletion = self
            .store
            .delete_job(id)
            .await?
            .ok_or_else(|| ApiError::not_found("Job", id))?;

        info!(
            "Service: Job '{}' deleted, {} applications preserved",
            deletion.job.title, deletion.preserved_applications
        );

        Ok(JobDeletedResponse {
            success: true,
            message: "Job deleted successfully. Applications have been preserved and marked as 'Job Deleted'.".to_string(),
            preserved_applications: deletion.preserved_applications,
        })
    }

    fn fields(request: &JobRequest) -> JobFields {
        JobFields {
            title: request.title.trim().to_string(),
            department: request.department.clone(),
            location: request.location.clone(),
            job_type: request.job_type.clone(),
            salary: request.salary.clone().filter(|s| !s.trim().is_empty()),
            description: request.description.clone(),
            requirements: request
                .requirements
                .iter()
                .map(|r| r.trim())
                .filter(|r| !r.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }
}
