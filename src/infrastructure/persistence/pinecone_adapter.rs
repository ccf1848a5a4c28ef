use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::application::ports::{SearchResult, VectorIndex, VectorIndexError};
use crate::domain::{ChunkId, Embedding, IndexedVector};

pub const PINECONE_CONTROL_PLANE_URL: &str = "https://api.pinecone.io";
const PINECONE_API_VERSION: &str = "2024-07";
const UPSERT_BATCH_SIZE: usize = 100;

/// Pinecone data-plane client bound to a single index host.
pub struct PineconeAdapter {
    client: Client,
    host: String,
}

#[derive(Serialize)]
struct UpsertRequest<'a> {
    vectors: Vec<VectorRecord<'a>>,
}

#[derive(Serialize)]
struct VectorRecord<'a> {
    id: &'a str,
    values: &'a [f32],
    metadata: RecordMetadata<'a>,
}

#[derive(Serialize)]
struct RecordMetadata<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct QueryRequest<'a> {
    vector: &'a [f32],
    top_k: usize,
    include_metadata: bool,
    include_values: bool,
}

#[derive(Deserialize)]
struct QueryResponse {
    #[serde(default)]
    matches: Vec<QueryMatch>,
}

#[derive(Deserialize)]
struct QueryMatch {
    id: String,
    #[serde(default)]
    score: f32,
    #[serde(default)]
    metadata: Option<serde_json::Map<String, serde_json::Value>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DeleteRequest {
    delete_all: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct IndexStats {
    #[serde(default)]
    total_vector_count: u64,
}

#[derive(Deserialize)]
struct IndexDescription {
    host: String,
}

impl PineconeAdapter {
    pub fn new(api_key: &str, host: &str) -> Result<Self, VectorIndexError> {
        let client = Client::builder()
            .default_headers(Self::headers(api_key)?)
            .build()
            .map_err(|e| VectorIndexError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            host: normalize_host(host),
        })
    }

    /// Looks up the index host through the control plane, then binds to it.
    pub async fn connect(
        api_key: &str,
        index_name: &str,
        control_plane_url: &str,
    ) -> Result<Self, VectorIndexError> {
        let client = Client::builder()
            .default_headers(Self::headers(api_key)?)
            .build()
            .map_err(|e| VectorIndexError::ConnectionFailed(e.to_string()))?;

        let response = client
            .get(format!(
                "{}/indexes/{}",
                control_plane_url.trim_end_matches('/'),
                index_name
            ))
            .send()
            .await
            .map_err(|e| VectorIndexError::ConnectionFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(VectorIndexError::ConnectionFailed(format!(
                "describe index {index_name}: HTTP {status}: {body}"
            )));
        }

        let description: IndexDescription = response
            .json()
            .await
            .map_err(|e| VectorIndexError::ConnectionFailed(e.to_string()))?;

        info!(index = index_name, host = %description.host, "pinecone_index_resolved");

        Ok(Self {
            client,
            host: normalize_host(&description.host),
        })
    }

    fn headers(api_key: &str) -> Result<HeaderMap, VectorIndexError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            "Api-Key",
            HeaderValue::from_str(api_key.trim())
                .map_err(|e| VectorIndexError::ConnectionFailed(format!("invalid api key: {e}")))?,
        );
        headers.insert(
            "X-Pinecone-API-Version",
            HeaderValue::from_static(PINECONE_API_VERSION),
        );
        Ok(headers)
    }

    async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, String>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let response = self
            .client
            .post(format!("{}{}", self.host, path))
            .json(body)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(format!("HTTP {}: {}", status, body));
        }

        response.json().await.map_err(|e| e.to_string())
    }
}

#[async_trait]
impl VectorIndex for PineconeAdapter {
    #[instrument(skip(self), fields(host = %self.host))]
    async fn record_count(&self) -> Result<u64, VectorIndexError> {
        let stats: IndexStats = self
            .post("/describe_index_stats", &serde_json::json!({}))
            .await
            .map_err(VectorIndexError::StatsFailed)?;
        Ok(stats.total_vector_count)
    }

    #[instrument(skip(self), fields(host = %self.host))]
    async fn delete_all(&self) -> Result<(), VectorIndexError> {
        let _: serde_json::Value = self
            .post("/vectors/delete", &DeleteRequest { delete_all: true })
            .await
            .map_err(VectorIndexError::DeleteFailed)?;

        info!("vectors_deleted");
        Ok(())
    }

    #[instrument(skip(self, vectors), fields(host = %self.host, count = vectors.len()))]
    async fn upsert(&self, vectors: &[IndexedVector]) -> Result<(), VectorIndexError> {
        for batch in vectors.chunks(UPSERT_BATCH_SIZE) {
            let request = UpsertRequest {
                vectors: batch
                    .iter()
                    .map(|v| VectorRecord {
                        id: v.id.as_str(),
                        values: &v.embedding.values,
                        metadata: RecordMetadata { text: &v.text },
                    })
                    .collect(),
            };

            let _: serde_json::Value = self
                .post("/vectors/upsert", &request)
                .await
                .map_err(VectorIndexError::UpsertFailed)?;
        }

        info!(count = vectors.len(), "vectors_upserted");
        Ok(())
    }

    #[instrument(skip(self, embedding), fields(host = %self.host, top_k = top_k))]
    async fn query(
        &self,
        embedding: &Embedding,
        top_k: usize,
    ) -> Result<Vec<SearchResult>, VectorIndexError> {
        let request = QueryRequest {
            vector: &embedding.values,
            top_k,
            include_metadata: true,
            include_values: false,
        };

        let response: QueryResponse = self
            .post("/query", &request)
            .await
            .map_err(VectorIndexError::QueryFailed)?;

        Ok(response
            .matches
            .into_iter()
            .map(|m| SearchResult {
                text: m
                    .metadata
                    .as_ref()
                    .and_then(|meta| meta.get("text"))
                    .and_then(|text| text.as_str())
                    .unwrap_or_default()
                    .to_string(),
                id: ChunkId::from_raw(m.id),
                score: m.score,
            })
            .collect())
    }
}

/// Control-plane hosts come without a scheme.
fn normalize_host(host: &str) -> String {
    let host = host.trim().trim_end_matches('/');
    if host.starts_with("http://") || host.starts_with("https://") {
        host.to_string()
    } else {
        format!("https://{host}")
    }
}
