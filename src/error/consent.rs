use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConsentError {
    #[error("Failed to read consent store '{path}': {source}")]
    ReadStore {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write consent store '{path}': {source}")]
    WriteStore {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to create consent store directory '{path}': {source}")]
    CreateStoreDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Consent store '{path}' is not valid JSON: {source}")]
    ParseStore {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to serialize consent store: {source}")]
    SerializeStore {
        #[source]
        source: serde_json::Error,
    },
}
