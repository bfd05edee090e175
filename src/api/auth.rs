use std::future::{ready, Ready};

use actix_web::cookie::{time::Duration, Cookie, SameSite};
use actix_web::{
    dev::Payload,
    post,
    web::{Data, ServiceConfig},
    FromRequest, HttpRequest, HttpResponse,
};
use actix_web_validator::Json;
use serde::Deserialize;
use tracing::{info, warn};
use validator::Validate;

use crate::api::error::ApiError;

pub const SESSION_COOKIE: &str = "admin-session";
const SESSION_VALUE: &str = "authenticated";

/// Credentials and cookie policy for the admin dashboard
#[derive(Clone, Debug)]
pub struct AdminSettings {
    pub username: String,
    pub password: String,
    pub cookie_secure: bool,
}

/// Extractor that only succeeds when the request carries the admin cookie.
///
/// This is a flag, not an authentication scheme: anyone able to set the
/// cookie is treated as the administrator.
#[derive(Debug)]
pub struct AdminSession;

impl FromRequest for AdminSession {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let authenticated = req
            .cookie(SESSION_COOKIE)
            .is_some_and(|cookie| cookie.value() == SESSION_VALUE);

        if authenticated {
            ready(Ok(AdminSession))
        } else {
            warn!("Admin session missing for {}", req.path());
            ready(Err(ApiError::Unauthorized))
        }
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

fn session_cookie(secure: bool) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, SESSION_VALUE)
        .path("/")
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .max_age(Duration::hours(24))
        .finish()
}

#[post("/login")]
async fn login(
    settings: Data<AdminSettings>,
    credentials: Json<LoginRequest>,
) -> Result<HttpResponse, ApiError> {
    if credentials.username != settings.username || credentials.password != settings.password {
        warn!("Failed admin login for user={}", credentials.username);
        return Err(ApiError::InvalidCredentials);
    }

    info!("Admin logged in: {}", credentials.username);
    Ok(HttpResponse::Ok()
        .cookie(session_cookie(settings.cookie_secure))
        .json(serde_json::json!({ "success": true })))
}

#[post("/logout")]
async fn logout(settings: Data<AdminSettings>) -> HttpResponse {
    let mut cookie = session_cookie(settings.cookie_secure);
    cookie.make_removal();
    HttpResponse::Ok()
        .cookie(cookie)
        .json(serde_json::json!({ "success": true }))
}

/// Login/logout, mounted inside the `/api/admin` scope
pub fn auth_config(config: &mut ServiceConfig) {
    config.service(login).service(logout);
}
