use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use super::models::{ApplicationSubmitted, GeneralApplicationRequest, JobApplicationRequest};
use crate::api::error::ApiError;
use crate::db::models::{
    GeneralApplication, GeneralApplicationStatus, JobApplication, JobApplicationStatus,
    NewGeneralApplication, NewJobApplication,
};
use crate::db::ContentStore;

fn optional(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Intake and review of job and general applications
pub struct ApplicationService {
    store: Arc<dyn ContentStore>,
}

impl ApplicationService {
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        Self { store }
    }

    /// Record an application against an existing job; the stored job title
    /// comes from the posting itself
    pub async fn submit_job_application(
        &self,
        request: &JobApplicationRequest,
    ) -> Result<ApplicationSubmitted, ApiError> {
        let job_id = request
            .job_id
            .ok_or_else(|| ApiError::BadRequest("Missing required fields".to_string()))?;

        let application = self
            .store
            .create_job_application(&NewJobApplication {
                job_id,
                first_name: request.first_name.trim().to_string(),
                last_name: request.last_name.trim().to_string(),
                email: request.email.trim().to_string(),
                phone: request.phone.trim().to_string(),
                cover_letter: request.cover_letter.clone(),
                experience: optional(&request.experience),
                linkedin_url: optional(&request.linkedin_url),
                portfolio_url: optional(&request.portfolio_url),
                cv_url: request.cv_url.clone(),
            })
            .await?
            .ok_or_else(|| ApiError::not_found("Job", job_id))?;

        info!(
            "Service: Job application {} received for job {}",
            application.id, job_id
        );
        Ok(ApplicationSubmitted {
            success: true,
            message: "Application submitted successfully".to_string(),
            application_id: application.id,
        })
    }

    pub async fn list_job_applications(&self) -> Result<Vec<JobApplication>, ApiError> {
        Ok(self.store.list_job_applications().await?)
    }

    pub async fn get_job_application(&self, id: Uuid) -> Result<JobApplication, ApiError> {
        self.store
            .get_job_application(id)
            .await?
            .ok_or_else(|| ApiError::not_found("Job application", id))
    }

    pub async fn set_job_application_status(
        &self,
        id: Uuid,
        status: JobApplicationStatus,
    ) -> Result<JobApplication, ApiError> {
        let application = self
            .store
            .update_job_application_status(id, status)
            .await?
            .ok_or_else(|| ApiError::not_found("Job application", id))?;
        info!("Service: Job application {} marked {:?}", id, status);
        Ok(application)
    }

    pub async fn delete_job_application(&self, id: Uuid) -> Result<(), ApiError> {
        if !self.store.delete_job_application(id).await? {
            return Err(ApiError::not_found("Job application", id));
        }
        info!("Service: Job application {} deleted", id);
        Ok(())
    }

    pub async fn submit_general_application(
        &self,
        request: &GeneralApplicationRequest,
    ) -> Result<ApplicationSubmitted, ApiError> {
        let application = self
            .store
            .create_general_application(&NewGeneralApplication {
                first_name: request.first_name.trim().to_string(),
                last_name: request.last_name.trim().to_string(),
                email: request.email.trim().to_string(),
                phone: request.phone.trim().to_string(),
                current_role: optional(&request.current_role),
                experience: optional(&request.experience),
                interested_roles: optional(&request.interested_roles),
                availability_date: optional(&request.availability_date),
                linkedin_url: optional(&request.linkedin_url),
                portfolio_url: optional(&request.portfolio_url),
                additional_info: optional(&request.additional_info),
                cv_url: request.cv_url.clone(),
            })
            .await?;

        info!("Service: General application {} received", application.id);
        Ok(ApplicationSubmitted {
            success: true,
            message: "Resume submitted successfully".to_string(),
            application_id: application.id,
        })
    }

    pub async fn list_general_applications(&self) -> Result<Vec<GeneralApplication>, ApiError> {
        Ok(self.store.list_general_applications().await?)
    }

    pub async fn set_general_application_status(
        &self,
        id: Uuid,
        status: GeneralApplicationStatus,
    ) -> Result<GeneralApplication, ApiError> {
        let application = self
            .store
            .update_general_application_status(id, status)
            .await?
            .ok_or_else(|| ApiError::not_found("General application", id))?;
        info!("Service: General application {} marked {:?}", id, status);
        Ok(application)
    }

    pub async fn delete_general_application(&self, id: Uuid) -> Result<(), ApiError> {
        if !self.store.delete_general_application(id).await? {
            return Err(ApiError::not_found("General application", id));
        }
        info!("Service: General application {} deleted", id);
        Ok(())
    }
}
