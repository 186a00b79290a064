//! Save and load of the collection file.
//!
//! The collection is persisted as pretty-printed JSON. A missing file on
//! load is not an error: it yields a fresh empty collection bound to that
//! path, so a first run starts clean.

use std::fs;
use std::path::Path;

use crate::internal::collection::DragonCollection;
use crate::internal::errors::StorageError;

pub fn load(path: &Path) -> Result<DragonCollection, StorageError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "collection file absent, starting empty");
            return Ok(DragonCollection::new(path));
        }
        Err(source) => {
            return Err(StorageError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let mut collection: DragonCollection =
        serde_json::from_str(&raw).map_err(|source| StorageError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;
    collection.set_output_file(path);
    collection.restore_id_counter();
    tracing::debug!(path = %path.display(), records = collection.len(), "collection loaded");
    Ok(collection)
}

pub fn save(path: &Path, collection: &DragonCollection) -> Result<(), StorageError> {
    let raw = serde_json::to_string_pretty(collection).map_err(|source| StorageError::Malformed {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, raw).map_err(|source| StorageError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), records = collection.len(), "collection saved");
    Ok(())
}
