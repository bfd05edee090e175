use actix_web::{
    HttpResponse, delete, get, patch, post,
    web::{Data, Path, ServiceConfig, scope},
};
use actix_web_validator::Json;
use uuid::Uuid;

use super::models::{
    GeneralApplicationRequest, GeneralApplicationStatusUpdate, JobApplicationRequest,
    JobApplicationStatusUpdate,
};
use super::service::ApplicationService;
use crate::api::auth::AdminSession;
use crate::api::error::ApiError;

#[post("")]
async fn submit_job_application(
    service: Data<ApplicationService>,
    application: Json<JobApplicationRequest>,
) -> Result<HttpResponse, ApiError> {
    let submitted = service.submit_job_application(&application).await?;
    Ok(HttpResponse::Created().json(submitted))
}

#[get("")]
async fn list_job_applications(
    _admin: AdminSession,
    service: Data<ApplicationService>,
) -> Result<HttpResponse, ApiError> {
    Ok(HttpResponse::Ok().json(service.list_job_applications().await?))
}

#[get("/{id}")]
async fn get_job_application(
    _admin: AdminSession,
    service: Data<ApplicationService>,
    id: Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    Ok(HttpResponse::Ok().json(service.get_job_application(id.into_inner()).await?))
}

#[patch("/{id}")]
async fn update_job_application_status(
    _admin: AdminSession,
    service: Data<ApplicationService>,
    id: Path<Uuid>,
    update: Json<JobApplicationStatusUpdate>,
) -> Result<HttpResponse, ApiError> {
    let application = service
        .set_job_application_status(id.into_inner(), update.status)
        .await?;
    Ok(HttpResponse::Ok().json(application))
}

#[delete("/{id}")]
async fn delete_job_application(
    _admin: AdminSession,
    service: Data<ApplicationService>,
    id: Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    service.delete_job_application(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "message": "Application deleted successfully"
    })))
}

#[post("")]
async fn submit_general_application(
    service: Data<ApplicationService>,
    application: Json<GeneralApplicationRequest>,
) -> Result<HttpResponse, ApiError> {
    let submitted = service.submit_general_application(&application).await?;
    Ok(HttpResponse::Created().json(submitted))
}

#[get("")]
async fn list_general_applications(
    _admin: AdminSession,
    service: Data<ApplicationService>,
) -> Result<HttpResponse, ApiError> {
    Ok(HttpResponse::Ok().json(service.list_general_applications().await?))
}

#[patch("/{id}")]
async fn update_general_application_status(
    _admin: AdminSession,
    service: Data<ApplicationService>,
    id: Path<Uuid>,
    update: Json<GeneralApplicationStatusUpdate>,
) -> Result<HttpResponse, ApiError> {
    let application = service
        .set_general_application_status(id.into_inner(), update.status)
        .await?;
    Ok(HttpResponse::Ok().json(application))
}

#[delete("/{id}")]
async fn delete_general_application(
    _admin: AdminSession,
    service: Data<ApplicationService>,
    id: Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    service.delete_general_application(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "success": true })))
}

/// `/api/job-applications` and `/api/general-applications`
pub fn application_config(config: &mut ServiceConfig) {
    config
        .service(
            scope("/job-applications")
                .service(submit_job_application)
                .service(list_job_applications)
                .service(get_job_application)
                .service(update_job_application_status)
                .service(delete_job_application),
        )
        .service(
            scope("/general-applications")
                .service(submit_general_application)
                .service(list_general_applications)
                .service(update_general_application_status)
                .service(delete_general_application),
        );
}
