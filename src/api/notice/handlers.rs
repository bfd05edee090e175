use actix_web::{
    HttpResponse, delete, get, post,
    web::{Data, Path, ServiceConfig, scope},
};
use actix_web_validator::Json;
use tracing::info;
use uuid::Uuid;

use super::models::NoticeRequest;
use crate::api::auth::AdminSession;
use crate::api::error::ApiError;
use crate::db::models::NewNotice;
use crate::db::ContentStore;

/// Notices for visitors, newest first; the site pops up the first one
#[get("")]
async fn list_public_notices(store: Data<dyn ContentStore>) -> Result<HttpResponse, ApiError> {
    Ok(HttpResponse::Ok().json(store.list_notices().await?))
}

#[get("")]
async fn list_notices(
    _admin: AdminSession,
    store: Data<dyn ContentStore>,
) -> Result<HttpResponse, ApiError> {
    Ok(HttpResponse::Ok().json(store.list_notices().await?))
}

#[post("")]
async fn create_notice(
    _admin: AdminSession,
    store: Data<dyn ContentStore>,
    notice: Json<NoticeRequest>,
) -> Result<HttpResponse, ApiError> {
    let notice = store.create_notice(&NewNotice::from(&*notice)).await?;
    info!("Notice created id={}", notice.id);
    Ok(HttpResponse::Created().json(notice))
}

#[delete("/{id}")]
async fn delete_notice(
    _admin: AdminSession,
    store: Data<dyn ContentStore>,
    id: Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let id = id.into_inner();
    if !store.delete_notice(id).await? {
        return Err(ApiError::not_found("Notice", id));
    }
    info!("Notice deleted id={}", id);
    Ok(HttpResponse::Ok().json(serde_json::json!({ "success": true })))
}

/// `/api/notices`
pub fn public_notice_config(config: &mut ServiceConfig) {
    config.service(scope("/notices").service(list_public_notices));
}

/// `/api/admin/notices`
pub fn admin_notice_config(config: &mut ServiceConfig) {
    config.service(
        scope("/notices")
            .service(list_notices)
            .service(create_notice)
            .service(delete_notice),
    );
}
