use std::path::{Path, PathBuf};

use async_trait::async_trait;
use hanzi_core::LoadError;
use hanzi_core::dictionary::DatasetSource;

/// Resolved location of the dataset resource
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetLocation {
    Http(String),
    File(PathBuf),
}

impl DatasetLocation {
    /// Join the fixed file name onto the application origin
    pub fn resolve(origin: &str, file_name: &str) -> Self {
        let origin = origin.trim();

        if origin.starts_with("http://") || origin.starts_with("https://") {
            DatasetLocation::Http(format!("{}/{}", origin.trim_end_matches('/'), file_name))
        } else {
            DatasetLocation::File(Path::new(origin).join(file_name))
        }
    }

    pub fn into_source(self) -> Box<dyn DatasetSource> {
        match self {
            DatasetLocation::Http(url) => Box::new(HttpSource::new(url)),
            DatasetLocation::File(path) => Box::new(FileSource::new(path)),
        }
    }
}

#[derive(Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: String) -> Self {
        Self::with_client(reqwest::Client::new(), url)
    }

    pub fn with_client(client: reqwest::Client, url: String) -> Self {
        Self { client, url }
    }

    fn unreachable(&self, reason: String) -> LoadError {
        LoadError::ResourceUnreachable {
            location: self.url.clone(),
            reason,
        }
    }
}

#[async_trait]
impl DatasetSource for HttpSource {
    async fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| self.unreachable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(self.unreachable(format!("HTTP {}", response.status())));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| self.unreachable(format!("Failed to read body: {e}")))?;

        Ok(body.to_vec())
    }

    fn location(&self) -> String {
        self.url.clone()
    }
}

pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl DatasetSource for FileSource {
    async fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        tokio::fs::read(&self.path)
            .await
            .map_err(|e| LoadError::ResourceUnreachable {
                location: self.path.display().to_string(),
                reason: e.to_string(),
            })
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
