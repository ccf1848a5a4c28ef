use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use docforge::application::ports::{Embedder, FileLoader, FileRenderer, LlmClient, TextSplitter};
use docforge::application::services::{
    FileMaterializer, IndexSynchronizer, IntentClassifier, PromptService, ResponseSynthesizer,
    UploadService,
};
use docforge::infrastructure::llm::{GeminiClient, OpenAiClient, OpenAiEmbedder};
use docforge::infrastructure::observability::init_tracing;
use docforge::infrastructure::persistence::VectorIndexFactory;
use docforge::infrastructure::rendering::OfficeRenderer;
use docforge::infrastructure::storage::ObjectStorageFactory;
use docforge::infrastructure::text_processing::{CompositeFileLoader, FixedSizeSplitter};
use docforge::presentation::{AppState, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().context("Failed to load settings")?;

    init_tracing(&settings.tracing_config());

    let storage = ObjectStorageFactory::create(&settings.storage)
        .context("Failed to initialize object storage")?;
    let vector_index = VectorIndexFactory::create(&settings.vector_index)
        .await
        .context("Failed to initialize vector index")?;

    let embedder: Arc<dyn Embedder> = Arc::new(OpenAiEmbedder::new(
        settings.openai.base_url.clone(),
        settings.openai.api_key.clone(),
        settings.openai.embedding_model.clone(),
    ));
    let openai: Arc<dyn LlmClient> = Arc::new(OpenAiClient::new(
        settings.openai.base_url.clone(),
        settings.openai.api_key.clone(),
        settings.openai.chat_model.clone(),
    ));
    let classifier_llm: Arc<dyn LlmClient> = Arc::new(OpenAiClient::new(
        settings.openai.base_url.clone(),
        settings.openai.api_key.clone(),
        settings.openai.classifier_model.clone(),
    ));
    let gemini: Arc<dyn LlmClient> = Arc::new(GeminiClient::new(
        settings.gemini.base_url.clone(),
        settings.gemini.api_key.clone(),
        settings.gemini.model.clone(),
    ));

    let file_loader: Arc<dyn FileLoader> = Arc::new(CompositeFileLoader::with_default_adapters());
    let text_splitter: Arc<dyn TextSplitter> = Arc::new(
        FixedSizeSplitter::new(settings.pipeline.chunk_size).context("Invalid chunk size")?,
    );
    let renderer: Arc<dyn FileRenderer> = Arc::new(OfficeRenderer::new());

    let index_synchronizer = Arc::new(IndexSynchronizer::new(
        Arc::clone(&storage),
        file_loader,
        text_splitter,
        Arc::clone(&embedder),
        Arc::clone(&vector_index),
    ));
    let response_synthesizer = Arc::new(ResponseSynthesizer::new(
        embedder,
        vector_index,
        openai,
        gemini,
        settings.pipeline.top_k,
    ));
    let file_materializer = Arc::new(FileMaterializer::new(
        Arc::clone(&storage),
        renderer,
        settings.pipeline.download_url_ttl(),
    ));

    let prompt_service = Arc::new(PromptService::new(
        index_synchronizer,
        Arc::new(IntentClassifier::new(classifier_llm)),
        response_synthesizer,
        file_materializer,
    ));
    let upload_service = Arc::new(UploadService::new(
        storage,
        settings.pipeline.upload_url_ttl(),
    ));

    let router = create_router(AppState {
        upload_service,
        prompt_service,
    });

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server address")?;
    tracing::info!(
        %addr,
        environment = %settings.environment,
        storage = ?settings.storage.provider,
        vector_index = ?settings.vector_index.provider,
        "Listening"
    );

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
