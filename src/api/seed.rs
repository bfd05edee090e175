use actix_web::{
    HttpResponse, post,
    web::{Data, ServiceConfig},
};

use crate::api::auth::AdminSession;
use crate::api::error::ApiError;
use crate::db::ContentStore;
use crate::seed::seed_sample_data;

#[post("/seed")]
async fn seed(
    _admin: AdminSession,
    store: Data<dyn ContentStore>,
) -> Result<HttpResponse, ApiError> {
    let outcome = seed_sample_data(store.get_ref()).await?;
    Ok(HttpResponse::Ok().json(outcome))
}

/// `/api/admin/seed`
pub fn seed_config(config: &mut ServiceConfig) {
    config.service(seed);
}
