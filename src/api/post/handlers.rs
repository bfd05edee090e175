use actix_web::{
    HttpResponse, delete, get, post, put,
    web::{Data, Path, ServiceConfig, scope},
};
use actix_web_validator::{Json, Query};
use uuid::Uuid;

use super::models::{PostListQuery, PostRequest};
use super::service::PostService;
use crate::api::auth::AdminSession;
use crate::api::error::ApiError;

#[get("")]
async fn list_public_posts(
    service: Data<PostService>,
    query: Query<PostListQuery>,
) -> Result<HttpResponse, ApiError> {
    let posts = service.list(query.limit).await?;
    Ok(HttpResponse::Ok().json(posts))
}

#[get("/{slug}")]
async fn get_post_by_slug(
    service: Data<PostService>,
    slug: Path<String>,
) -> Result<HttpResponse, ApiError> {
    let post = service.get_by_slug(&slug).await?;
    Ok(HttpResponse::Ok().json(post))
}

#[get("")]
async fn list_posts(
    _admin: AdminSession,
    service: Data<PostService>,
) -> Result<HttpResponse, ApiError> {
    Ok(HttpResponse::Ok().json(service.list(None).await?))
}

#[get("/{id}")]
async fn get_post(
    _admin: AdminSession,
    service: Data<PostService>,
    id: Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    Ok(HttpResponse::Ok().json(service.get(id.into_inner()).await?))
}

#[post("")]
async fn create_post(
    _admin: AdminSession,
    service: Data<PostService>,
    post: Json<PostRequest>,
) -> Result<HttpResponse, ApiError> {
    let post = service.create(&post).await?;
    Ok(HttpResponse::Created().json(post))
}

#[put("/{id}")]
async fn update_post(
    _admin: AdminSession,
    service: Data<PostService>,
    id: Path<Uuid>,
    post: Json<PostRequest>,
) -> Result<HttpResponse, ApiError> {
    let post = service.update(id.into_inner(), &post).await?;
    Ok(HttpResponse::Ok().json(post))
}

#[delete("/{id}")]
async fn delete_post(
    _admin: AdminSession,
    service: Data<PostService>,
    id: Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    service.delete(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "success": true })))
}

/// `/api/posts`
pub fn public_post_config(config: &mut ServiceConfig) {
    config.service(
        scope("/posts")
            .service(list_public_posts)
            .service(get_post_by_slug),
    );
}

/// `/api/admin/posts`
pub fn admin_post_config(config: &mut ServiceConfig) {
    config.service(
        scope("/posts")
            .service(list_posts)
            .service(get_post)
            .service(create_post)
            .service(update_post)
            .service(delete_post),
    );
}
