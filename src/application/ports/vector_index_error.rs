#[derive(Debug, thiserror::Error)]
pub enum VectorIndexError {
    #[error("connection failed: {0}")]
    ConnectionFailed(String),
    #[error("stats request failed: {0}")]
    StatsFailed(String),
    #[error("upsert failed: {0}")]
    UpsertFailed(String),
    #[error("query failed: {0}")]
    QueryFailed(String),
    #[error("delete failed: {0}")]
    DeleteFailed(String),
}
