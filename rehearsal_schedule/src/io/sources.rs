//! Fetchable schedule sources.
//!
//! A source only knows how to produce a text body; interpreting that body is
//! up to the loader, which pairs each source with a
//! [`ScheduleSourceType`](crate::io::loaders::ScheduleSourceType).

use async_trait::async_trait;
use std::path::{Path, PathBuf};

use crate::error::{LoadError, LoadResult};

/// Something a schedule body can be fetched from.
#[async_trait]
pub trait ScheduleSource: Send + Sync {
    /// Human-readable identification for logs and diagnostics.
    fn describe(&self) -> String;

    /// Fetch the raw body. Exactly one attempt; no retries.
    async fn fetch(&self) -> LoadResult<String>;
}

/// Build the source for a configured location.
///
/// Locations starting with `http://` or `https://` are fetched over HTTP;
/// anything else is read as a filesystem path.
pub fn source_for_location(location: &str) -> Box<dyn ScheduleSource> {
    if is_remote(location) {
        remote_source(location)
    } else {
        Box::new(FileSource::new(location))
    }
}

fn is_remote(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

#[cfg(feature = "http")]
fn remote_source(location: &str) -> Box<dyn ScheduleSource> {
    Box::new(HttpSource::new(location))
}

#[cfg(not(feature = "http"))]
fn remote_source(location: &str) -> Box<dyn ScheduleSource> {
    Box::new(StaticSource::failing(
        location,
        LoadError::Transport("HTTP support is disabled (build without the `http` feature)".into()),
    ))
}

/// Schedule document on the local filesystem.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl ScheduleSource for FileSource {
    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }

    async fn fetch(&self) -> LoadResult<String> {
        tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            LoadError::Transport(format!("Failed to read {}: {}", self.path.display(), e))
        })
    }
}

/// Schedule document served over HTTP(S).
#[cfg(feature = "http")]
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
}

#[cfg(feature = "http")]
impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

#[cfg(feature = "http")]
#[async_trait]
impl ScheduleSource for HttpSource {
    fn describe(&self) -> String {
        format!("url {}", self.url)
    }

    async fn fetch(&self) -> LoadResult<String> {
        // No explicit timeout: the platform defaults apply.
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| LoadError::Transport(format!("Failed to build HTTP client: {}", e)))?;

        let response = client
            .get(&self.url)
            .header(reqwest::header::CACHE_CONTROL, "no-store")
            .send()
            .await
            .map_err(|e| LoadError::Transport(format!("Failed to fetch {}: {}", self.url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Transport(format!(
                "Request to {} failed ({})",
                self.url, status
            )));
        }

        response.text().await.map_err(|e| {
            LoadError::Transport(format!("Failed to read body from {}: {}", self.url, e))
        })
    }
}

/// In-memory body, or a canned failure.
#[derive(Debug, Clone)]
pub struct StaticSource {
    label: String,
    body: LoadResult<String>,
}

impl StaticSource {
    pub fn new(label: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            body: Ok(body.into()),
        }
    }

    pub fn failing(label: impl Into<String>, error: LoadError) -> Self {
        Self {
            label: label.into(),
            body: Err(error),
        }
    }
}

#[async_trait]
impl ScheduleSource for StaticSource {
    fn describe(&self) -> String {
        format!("inline {}", self.label)
    }

    async fn fetch(&self) -> LoadResult<String> {
        self.body.clone()
    }
}
