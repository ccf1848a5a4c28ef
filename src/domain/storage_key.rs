use std::fmt;

use serde::{Deserialize, Serialize};

pub const UPLOADS_PREFIX: &str = "uploads/";
pub const RESULTS_PREFIX: &str = "results/";

/// Object-storage key. Originals live under `uploads/`, generated files under `results/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StorageKey(String);

impl StorageKey {
    pub fn for_upload(file_name: &str, epoch_millis: i64) -> Self {
        Self(format!("{UPLOADS_PREFIX}{epoch_millis}-{file_name}"))
    }

    pub fn for_result(file_name: &str) -> Self {
        Self(format!("{RESULTS_PREFIX}{file_name}"))
    }

    pub fn from_raw(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_upload(&self) -> bool {
        self.0.starts_with(UPLOADS_PREFIX)
    }

    pub fn is_result(&self) -> bool {
        self.0.starts_with(RESULTS_PREFIX)
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
