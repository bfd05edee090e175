use serde::Serialize;

/// Response for a job deletion
#[derive(Serialize)]
pub struct JobDeletedResponse {
    pub success: bool,
    pub message: String,
    /// Applications kept and marked as belonging to a deleted job
    pub preserved_applications: u64,
}
