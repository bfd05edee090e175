use actix_web::web::{ServiceConfig, scope};

pub mod application;
pub mod auth;
pub mod error;
pub mod gallery;
pub mod health;
pub mod job;
pub mod message;
pub mod notice;
pub mod post;
pub mod seed;
pub mod state;
pub mod upload;
pub mod validation;

#[cfg(test)]
mod tests;

/// Mount every route: probes at the root, the site API under `/api` and the
/// dashboard API under `/api/admin`
pub fn routes(config: &mut ServiceConfig) {
    config.configure(health::health_config).service(
        scope("/api")
            .service(
                scope("/admin")
                    .configure(auth::auth_config)
                    .configure(post::handlers::admin_post_config)
                    .configure(job::handlers::admin_job_config)
                    .configure(notice::handlers::admin_notice_config)
                    .configure(gallery::handlers::admin_gallery_config)
                    .configure(message::handlers::admin_message_config)
                    .configure(upload::handlers::admin_upload_config)
                    .configure(seed::seed_config),
            )
            .configure(post::handlers::public_post_config)
            .configure(job::handlers::public_job_config)
            .configure(application::handlers::application_config)
            .configure(notice::handlers::public_notice_config)
            .configure(gallery::handlers::public_gallery_config)
            .configure(message::handlers::public_message_config)
            .configure(upload::handlers::public_upload_config),
    );
}
