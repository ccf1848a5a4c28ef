mod file_materializer;
mod index_synchronizer;
mod intent_classifier;
mod prompt_service;
mod response_synthesizer;
mod upload_service;

pub use file_materializer::{FileMaterializer, MaterializeError, MaterializedFile};
pub use index_synchronizer::{IndexSummary, IndexSyncError, IndexSynchronizer};
pub use intent_classifier::{IntentClassifier, classification_prompt};
pub use prompt_service::{PromptError, PromptOutcome, PromptRequest, PromptService};
pub use response_synthesizer::{
    ResponseSynthesizer, SYSTEM_MESSAGE, SynthesisError, build_prompt, strip_code_fences,
};
pub use upload_service::{PresignedUpload, UploadError, UploadService};
