use std::sync::Arc;

use actix_web::web::{Data, ServiceConfig};

use crate::api::application::ApplicationService;
use crate::api::auth::AdminSettings;
use crate::api::job::JobService;
use crate::api::post::PostService;
use crate::db::ContentStore;
use crate::storage::UploadStore;

/// Shared handles injected into every worker's `App`
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ContentStore>,
    pub uploads: Arc<dyn UploadStore>,
    pub admin: AdminSettings,
}

impl AppState {
    pub fn new(
        store: Arc<dyn ContentStore>,
        uploads: Arc<dyn UploadStore>,
        admin: AdminSettings,
    ) -> Self {
        Self {
            store,
            uploads,
            admin,
        }
    }

    /// Register the store, upload backend, services and admin settings
    pub fn register(&self, config: &mut ServiceConfig) {
        config
            .app_data(Data::from(self.store.clone()))
            .app_data(Data::from(self.uploads.clone()))
            .app_data(Data::new(PostService::new(self.store.clone())))
            .app_data(Data::new(JobService::new(self.store.clone())))
            .app_data(Data::new(ApplicationService::new(self.store.clone())))
            .app_data(Data::new(self.admin.clone()));
    }
}
