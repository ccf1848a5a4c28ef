use object_store::path::Path as StorePath;

use crate::domain::StorageKey;

pub(crate) fn to_store_path(key: &StorageKey) -> StorePath {
    StorePath::from(key.as_str())
}

/// Inverse of [`to_store_path`]. object_store percent-encodes characters such
/// as `[`, `#` and `%` inside each segment, so listed locations are decoded
/// back to the key the client was given.
pub(crate) fn to_storage_key(location: &StorePath) -> StorageKey {
    let key = location
        .parts()
        .map(|part| {
            let encoded = part.as_ref().to_string();
            urlencoding::decode(&encoded)
                .map(|decoded| decoded.into_owned())
                .unwrap_or(encoded)
        })
        .collect::<Vec<_>>()
        .join("/");
    StorageKey::from_raw(key)
}
