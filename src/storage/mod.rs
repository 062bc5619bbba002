//! File storage collaborator: try the remote store first, fall back to the
//! local upload directory on any failure. The returned reference string (a
//! URL or a relative path) is persisted as-is; only a double failure
//! surfaces an error to the caller.

use std::path::PathBuf;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not store the file: {0}")]
    Local(#[from] std::io::Error),
}

#[derive(Clone)]
pub struct FileStore {
    remote_base: Option<String>,
    client: reqwest::Client,
    local_dir: PathBuf,
}

impl FileStore {
    pub fn new(remote_base: Option<String>, local_dir: impl Into<PathBuf>) -> Self {
        Self {
            remote_base,
            client: reqwest::Client::new(),
            local_dir: local_dir.into(),
        }
    }

    /// Build from `STORAGE_URL` (optional remote) and `UPLOAD_DIR`.
    pub fn from_env() -> Self {
        let remote_base = std::env::var("STORAGE_URL").ok();
        let local_dir =
            std::env::var("UPLOAD_DIR").unwrap_or_else(|_| "./uploads".to_string());
        Self::new(remote_base, local_dir)
    }

    /// Where the local fallback files live, for static serving.
    pub fn local_dir(&self) -> &PathBuf {
        &self.local_dir
    }

    /// Store the bytes and return a reference string.
    pub async fn store(
        &self,
        bytes: &[u8],
        key: &str,
        filename: &str,
    ) -> Result<String, StoreError> {
        let filename = sanitize_filename(filename);

        if let Some(base) = &self.remote_base {
            match self.store_remote(base, bytes, key, &filename).await {
                Ok(reference) => return Ok(reference),
                Err(err) => {
                    warn!("remote store failed, falling back to local: {err}");
                }
            }
        }

        self.store_local(bytes, key, &filename).await
    }

    async fn store_remote(
        &self,
        base: &str,
        bytes: &[u8],
        key: &str,
        filename: &str,
    ) -> Result<String, String> {
        let url = format!("{}/{key}/{filename}", base.trim_end_matches('/'));
        let response = self
            .client
            .put(&url)
            .body(bytes.to_vec())
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !response.status().is_success() {
            return Err(format!("HTTP {}", response.status()));
        }
        Ok(url)
    }

    async fn store_local(
        &self,
        bytes: &[u8],
        key: &str,
        filename: &str,
    ) -> Result<String, StoreError> {
        let dir = self.local_dir.join(key);
        tokio::fs::create_dir_all(&dir).await?;
        tokio::fs::write(dir.join(filename), bytes).await?;
        Ok(format!("uploads/{key}/{filename}"))
    }
}

/// Keep uploaded names path-safe: alphanumerics, dot, dash, underscore.
fn sanitize_filename(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();
    if cleaned.trim_matches('_').is_empty() {
        "file".to_string()
    } else {
        cleaned
    }
}
