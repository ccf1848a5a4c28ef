use std::sync::Arc;

use crate::application::services::{PromptService, UploadService};

#[derive(Clone)]
pub struct AppState {
    pub upload_service: Arc<UploadService>,
    pub prompt_service: Arc<PromptService>,
}
