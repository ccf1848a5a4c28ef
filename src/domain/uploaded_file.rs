use serde::{Deserialize, Serialize};

use super::storage_key::StorageKey;

/// A client upload referenced by a prompt request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedFile {
    pub key: StorageKey,
    pub name: String,
}

impl UploadedFile {
    pub fn new(key: StorageKey, name: impl Into<String>) -> Self {
        Self {
            key,
            name: name.into(),
        }
    }

    pub fn kind(&self) -> DocumentKind {
        DocumentKind::from_file_name(&self.name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    Pdf,
    Word,
    Unsupported,
}

impl DocumentKind {
    pub fn from_file_name(name: &str) -> Self {
        let lower = name.to_ascii_lowercase();
        if lower.ends_with(".pdf") {
            Self::Pdf
        } else if lower.ends_with(".docx") || lower.ends_with(".doc") {
            Self::Word
        } else {
            Self::Unsupported
        }
    }
}
