mod error;
mod health;
mod presigned_url;
mod process_prompt;

pub use error::{ErrorResponse, error_response};
pub use health::health_handler;
pub use presigned_url::{PresignedUrlRequest, PresignedUrlResponse, presigned_url_handler};
pub use process_prompt::{ProcessPromptRequest, ProcessPromptResponse, process_prompt_handler};
