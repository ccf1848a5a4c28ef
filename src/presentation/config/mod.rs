mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    GeminiSettings, LoggingSettings, OpenAiSettings, PipelineSettings, ServerSettings, Settings,
    StorageProviderSetting, StorageSettings, VectorIndexProvider, VectorIndexSettings,
};
