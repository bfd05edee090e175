use actix_web::{
    HttpResponse, delete, get, post, put,
    web::{Data, Path, ServiceConfig, scope},
};
use actix_web_validator::Json;
use uuid::Uuid;

use super::models::JobRequest;
use super::service::JobService;
use crate::api::auth::AdminSession;
use crate::api::error::ApiError;

#[get("")]
async fn list_open_jobs(service: Data<JobService>) -> Result<HttpResponse, ApiError> {
    Ok(HttpResponse::Ok().json(service.list().await?))
}

#[get("/{id}")]
async fn get_job(service: Data<JobService>, id: Path<Uuid>) -> Result<HttpResponse, ApiError> {
    Ok(HttpResponse::Ok().json(service.get(id.into_inner()).await?))
}

#[get("")]
async fn list_jobs(
    _admin: AdminSession,
    service: Data<JobService>,
) -> Result<HttpResponse, ApiError> {
    Ok(HttpResponse::Ok().json(service.list().await?))
}

#[post("")]
async fn create_job(
    _admin: AdminSession,
    service: Data<JobService>,
    job: Json<JobRequest>,
) -> Result<HttpResponse, ApiError> {
    let job = service.create(&job).await?;
    Ok(HttpResponse::Created().json(job))
}

#[put("/{id}")]
async fn update_job(
    _admin: AdminSession,
    service: Data<JobService>,
    id: Path<Uuid>,
    job: Json<JobRequest>,
) -> Result<HttpResponse, ApiError> {
    let job = service.update(id.into_inner(), &job).await?;
    Ok(HttpResponse::Ok().json(job))
}

#[delete("/{id}")]
async fn delete_job(
    _admin: AdminSession,
    service: Data<JobService>,
    id: Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let response = service.delete(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}

/// `/api/jobs`
pub fn public_job_config(config: &mut ServiceConfig) {
    config.service(scope("/jobs").service(list_open_jobs).service(get_job));
}

/// `/api/admin/jobs`
pub fn admin_job_config(config: &mut ServiceConfig) {
    config.service(
        scope("/jobs")
            .service(list_jobs)
            .service(create_job)
            .service(update_job)
            .service(delete_job),
    );
}
