// Dataset sources: fetch raw JSON text from an HTTP URL or a local file.

use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("failed to build HTTP client: {0}")]
    Client(reqwest::Error),

    #[error("request to {location} failed: {source}")]
    Http {
        location: String,
        source: reqwest::Error,
    },

    #[error("{location} responded with HTTP {status}")]
    Status { location: String, status: u16 },

    #[error("failed to read {location}: {source}")]
    Io {
        location: String,
        source: std::io::Error,
    },
}

// ---------------------------------------------------------------------------
// Trait seam
// ---------------------------------------------------------------------------

/// Anything that can turn a dataset location into its JSON text.
#[async_trait]
pub trait DatasetSource: Send + Sync {
    async fn fetch(&self, location: &str) -> Result<String, FetchError>;
}

/// Whether `location` names a remote resource rather than a file.
pub fn is_remote(location: &str) -> bool {
    let lower = location.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

// ---------------------------------------------------------------------------
// HTTP
// ---------------------------------------------------------------------------

/// GETs datasets over HTTP. Any non-2xx status is an error.
pub struct HttpSource {
    http: reqwest::Client,
}

impl HttpSource {
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self { http })
    }
}

#[async_trait]
impl DatasetSource for HttpSource {
    async fn fetch(&self, location: &str) -> Result<String, FetchError> {
        debug!(location, "fetching dataset over HTTP");
        let response = self
            .http
            .get(location)
            .send()
            .await
            .map_err(|e| FetchError::Http {
                location: location.to_string(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                location: location.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|e| FetchError::Http {
            location: location.to_string(),
            source: e,
        })
    }
}

// ---------------------------------------------------------------------------
// Files
// ---------------------------------------------------------------------------

/// Reads datasets from disk. Relative locations resolve against `base_dir`.
pub struct FileSource {
    base_dir: PathBuf,
}

impl FileSource {
    pub fn new(base_dir: &Path) -> Self {
        Self {
            base_dir: base_dir.to_path_buf(),
        }
    }
}

#[async_trait]
impl DatasetSource for FileSource {
    async fn fetch(&self, location: &str) -> Result<String, FetchError> {
        // Joining an absolute path replaces the base.
        let path = self.base_dir.join(location);
        debug!(path = %path.display(), "reading dataset file");
        tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| FetchError::Io {
                location: path.display().to_string(),
                source: e,
            })
    }
}

// ---------------------------------------------------------------------------
// Routing
// ---------------------------------------------------------------------------

/// Sends URLs to HTTP and everything else to the filesystem.
pub struct RoutedSource {
    http: HttpSource,
    files: FileSource,
}

impl RoutedSource {
    pub fn new(timeout: Duration, base_dir: &Path) -> Result<Self, FetchError> {
        Ok(Self {
            http: HttpSource::new(timeout)?,
            files: FileSource::new(base_dir),
        })
    }
}

#[async_trait]
impl DatasetSource for RoutedSource {
    async fn fetch(&self, location: &str) -> Result<String, FetchError> {
        if is_remote(location) {
            self.http.fetch(location.trim()).await
        } else {
            self.files.fetch(location).await
        }
    }
}
