//! JSON file I/O for the connection store
//!
//! The store file is one JSON object keyed by connection name, written
//! pretty-printed with 4-space indentation.

use crate::error::StoreError;
use crate::store::Connection;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

/// Connections keyed by name
pub type Connections = BTreeMap<String, Connection>;

/// Create `path` (and its parent directories) holding `{}` if it does not exist
pub fn ensure_store_file(path: &Path) -> Result<(), StoreError> {
    if path.exists() {
        return Ok(());
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            debug!("Failed to create store directory {:?}: {}", parent, e);
            StoreError::SaveFailed {
                path: path.to_string_lossy().to_string(),
            }
        })?;
    }

    write_connections(path, &Connections::new())
}

/// Read every connection from the store file
pub fn read_connections(path: &Path) -> Result<Connections, StoreError> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        debug!("Failed to read store file {:?}: {}", path, e);
        StoreError::LoadFailed {
            path: path.to_string_lossy().to_string(),
        }
    })?;

    serde_json::from_str(&contents).map_err(|e| StoreError::Corrupt {
        message: format!("{}: {}", path.to_string_lossy(), e),
    })
}

/// Replace the store file with `connections`
pub fn write_connections(path: &Path, connections: &Connections) -> Result<(), StoreError> {
    let save_failed = || StoreError::SaveFailed {
        path: path.to_string_lossy().to_string(),
    };

    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    connections.serialize(&mut serializer).map_err(|e| {
        debug!("Failed to serialize connections: {}", e);
        save_failed()
    })?;

    std::fs::write(path, buf).map_err(|e| {
        debug!("Failed to write store file {:?}: {}", path, e);
        save_failed()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_ensure_creates_nested_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config").join("connections.json");

        ensure_store_file(&path).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}");
        assert!(read_connections(&path).unwrap().is_empty());
    }

    #[test]
    fn test_ensure_keeps_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("connections.json");
        let record =
            r#"{"name": "a", "email": "", "secret": "", "totpUrl": "", "createdTime": ""}"#;
        std::fs::write(&path, format!(r#"{{"a": {}}}"#, record)).unwrap();

        ensure_store_file(&path).unwrap();

        assert_eq!(read_connections(&path).unwrap().len(), 1);
    }

    #[test]
    fn test_corrupt_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("connections.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(matches!(
            read_connections(&path),
            Err(StoreError::Corrupt { .. })
        ));
    }
}
