use actix_web::{
    HttpResponse, delete, get, post, put,
    web::{Data, Path, ServiceConfig, scope},
};
use actix_web_validator::Json;
use tracing::info;
use uuid::Uuid;

use super::models::{GalleryItemRequest, GalleryTextUpdate};
use crate::api::auth::AdminSession;
use crate::api::error::ApiError;
use crate::db::models::NewGalleryItem;
use crate::db::ContentStore;

#[get("")]
async fn list_public_gallery(store: Data<dyn ContentStore>) -> Result<HttpResponse, ApiError> {
    Ok(HttpResponse::Ok().json(store.list_gallery_items().await?))
}

#[get("")]
async fn list_gallery(
    _admin: AdminSession,
    store: Data<dyn ContentStore>,
) -> Result<HttpResponse, ApiError> {
    Ok(HttpResponse::Ok().json(store.list_gallery_items().await?))
}

#[post("")]
async fn add_gallery_item(
    _admin: AdminSession,
    store: Data<dyn ContentStore>,
    item: Json<GalleryItemRequest>,
) -> Result<HttpResponse, ApiError> {
    let item = store
        .create_gallery_item(&NewGalleryItem::from(&*item))
        .await?;
    info!("Gallery item added id={} type={:?}", item.id, item.file_type);
    Ok(HttpResponse::Created().json(item))
}

#[put("/{id}")]
async fn update_gallery_item(
    _admin: AdminSession,
    store: Data<dyn ContentStore>,
    id: Path<Uuid>,
    update: Json<GalleryTextUpdate>,
) -> Result<HttpResponse, ApiError> {
    let id = id.into_inner();
    let item = store
        .update_gallery_item(id, &update.alt, &update.caption)
        .await?
        .ok_or_else(|| ApiError::not_found("Gallery item", id))?;
    Ok(HttpResponse::Ok().json(item))
}

#[delete("/{id}")]
async fn delete_gallery_item(
    _admin: AdminSession,
    store: Data<dyn ContentStore>,
    id: Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let id = id.into_inner();
    if !store.delete_gallery_item(id).await? {
        return Err(ApiError::not_found("Gallery item", id));
    }
    info!("Gallery item deleted id={}", id);
    Ok(HttpResponse::Ok().json(serde_json::json!({ "success": true })))
}

/// `/api/gallery`
pub fn public_gallery_config(config: &mut ServiceConfig) {
    config.service(scope("/gallery").service(list_public_gallery));
}

/// `/api/admin/gallery`
pub fn admin_gallery_config(config: &mut ServiceConfig) {
    config.service(
        scope("/gallery")
            .service(list_gallery)
            .service(add_gallery_item)
            .service(update_gallery_item)
            .service(delete_gallery_item),
    );
}
