use actix_web::{
    HttpResponse, delete, get, patch, post,
    web::{Data, Path, ServiceConfig, scope},
};
use actix_web_validator::Json;
use tracing::info;
use uuid::Uuid;

use super::models::{ContactRequest, ReadFlagUpdate};
use crate::api::auth::AdminSession;
use crate::api::error::ApiError;
use crate::db::models::NewContactMessage;
use crate::db::ContentStore;

#[post("/contact")]
async fn submit_contact(
    store: Data<dyn ContentStore>,
    contact: Json<ContactRequest>,
) -> Result<HttpResponse, ApiError> {
    let message = store
        .create_message(&NewContactMessage::from(&*contact))
        .await?;
    info!("Contact message received id={}", message.id);
    Ok(HttpResponse::Created().json(serde_json::json!({
        "success": true,
        "message": message
    })))
}

#[get("")]
async fn list_messages(
    _admin: AdminSession,
    store: Data<dyn ContentStore>,
) -> Result<HttpResponse, ApiError> {
    Ok(HttpResponse::Ok().json(store.list_messages().await?))
}

#[patch("/{id}")]
async fn mark_message(
    _admin: AdminSession,
    store: Data<dyn ContentStore>,
    id: Path<Uuid>,
    update: Json<ReadFlagUpdate>,
) -> Result<HttpResponse, ApiError> {
    let id = id.into_inner();
    let message = store
        .set_message_read(id, update.read)
        .await?
        .ok_or_else(|| ApiError::not_found("Message", id))?;
    Ok(HttpResponse::Ok().json(message))
}

#[delete("/{id}")]
async fn delete_message(
    _admin: AdminSession,
    store: Data<dyn ContentStore>,
    id: Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let id = id.into_inner();
    if !store.delete_message(id).await? {
        return Err(ApiError::not_found("Message", id));
    }
    Ok(HttpResponse::Ok().json(serde_json::json!({ "success": true })))
}

/// `/api/contact`
pub fn public_message_config(config: &mut ServiceConfig) {
    config.service(submit_contact);
}

/// `/api/admin/messages`
pub fn admin_message_config(config: &mut ServiceConfig) {
    config.service(
        scope("/messages")
            .service(list_messages)
            .service(mark_message)
            .service(delete_message),
    );
}
