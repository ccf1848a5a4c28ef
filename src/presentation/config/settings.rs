use std::time::Duration;

use config::{Config, ConfigError, File};
use serde::Deserialize;

use super::Environment;
use crate::infrastructure::llm::{GEMINI_BASE_URL, OPENAI_BASE_URL};
use crate::infrastructure::observability::TracingConfig;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(skip)]
    pub environment: Environment,
    pub server: ServerSettings,
    pub storage: StorageSettings,
    pub openai: OpenAiSettings,
    pub gemini: GeminiSettings,
    pub vector_index: VectorIndexSettings,
    pub pipeline: PipelineSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageProviderSetting {
    S3,
    Local,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    pub provider: StorageProviderSetting,
    pub bucket: Option<String>,
    pub region: String,
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
    /// S3-compatible endpoint override, e.g. MinIO or LocalStack.
    pub endpoint: Option<String>,
    pub local_path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OpenAiSettings {
    pub api_key: String,
    pub base_url: String,
    pub embedding_model: String,
    pub chat_model: String,
    pub classifier_model: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeminiSettings {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VectorIndexProvider {
    Pinecone,
    Memory,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VectorIndexSettings {
    pub provider: VectorIndexProvider,
    pub api_key: Option<String>,
    pub index_name: Option<String>,
    pub index_host: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PipelineSettings {
    pub chunk_size: usize,
    pub top_k: usize,
    pub upload_url_ttl_secs: u64,
    pub download_url_ttl_secs: u64,
}

impl PipelineSettings {
    pub fn upload_url_ttl(&self) -> Duration {
        Duration::from_secs(self.upload_url_ttl_secs)
    }

    pub fn download_url_ttl(&self) -> Duration {
        Duration::from_secs(self.download_url_ttl_secs)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub json: bool,
    pub filter: String,
}

impl Settings {
    /// Layers built-in defaults, `appsettings.<env>` and `APP__`-prefixed
    /// variables (`APP__PIPELINE__TOP_K=5`), after loading `.env`.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment: Environment = std::env::var("APP_ENVIRONMENT")
            .unwrap_or_else(|_| "local".into())
            .try_into()
            .map_err(ConfigError::Message)?;

        let configuration = Self::defaults(Config::builder())?
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str())).required(false),
            )
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let mut settings: Settings = configuration.try_deserialize()?;
        settings.environment = environment;
        Ok(settings)
    }

    fn defaults(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        builder
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("storage.provider", "local")?
            .set_default("storage.region", "us-east-1")?
            .set_default("storage.local_path", "./data")?
            .set_default("openai.api_key", "")?
            .set_default("openai.base_url", OPENAI_BASE_URL)?
            .set_default("openai.embedding_model", "text-embedding-3-small")?
            .set_default("openai.chat_model", "gpt-4o-mini")?
            .set_default("openai.classifier_model", "gpt-4o-mini")?
            .set_default("gemini.api_key", "")?
            .set_default("gemini.base_url", GEMINI_BASE_URL)?
            .set_default("gemini.model", "gemini-2.0-flash")?
            .set_default("vector_index.provider", "memory")?
            .set_default("pipeline.chunk_size", 1500)?
            .set_default("pipeline.top_k", 3)?
            .set_default("pipeline.upload_url_ttl_secs", 300)?
            .set_default("pipeline.download_url_ttl_secs", 600)?
            .set_default("logging.json", false)?
            .set_default("logging.filter", "info,docforge=debug,tower_http=debug")
    }

    pub fn tracing_config(&self) -> TracingConfig {
        TracingConfig {
            environment: self.environment.to_string(),
            json_format: self.logging.json,
            default_filter: self.logging.filter.clone(),
        }
    }
}
