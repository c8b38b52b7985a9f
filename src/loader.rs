use log::{debug, info};
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

use crate::config::SiteConfig;
use crate::content::ContentDocument;

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug)]
pub enum LoadError {
    Io(std::io::Error),
    Http(String),
    Parse(serde_json::Error),
    Invalid(String),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "read failed: {}", e),
            LoadError::Http(msg) => write!(f, "fetch failed: {}", msg),
            LoadError::Parse(e) => write!(f, "malformed content document: {}", e),
            LoadError::Invalid(msg) => write!(f, "invalid content document: {}", msg),
        }
    }
}

impl std::error::Error for LoadError {}

/// Where the content document lives: a file under the site directory, or a
/// URL under a remote base.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentSource {
    File(PathBuf),
    Http(Url),
}

impl ContentSource {
    /// Resolve the configured relative location against the configured base.
    pub fn from_config(config: &SiteConfig) -> Result<Self, String> {
        match config.base_url.as_deref().filter(|b| !b.trim().is_empty()) {
            Some(base) => {
                let mut base = Url::parse(base).map_err(|e| format!("base_url: {}", e))?;
                // Url::join drops the last path segment unless it ends in '/'
                if !base.path().ends_with('/') {
                    let path = format!("{}/", base.path());
                    base.set_path(&path);
                }
                let url = base
                    .join(&config.content)
                    .map_err(|e| format!("content location: {}", e))?;
                Ok(ContentSource::Http(url))
            }
            None => Ok(ContentSource::File(config.site_dir.join(&config.content))),
        }
    }

    /// Single best-effort attempt; no retry on failure.
    pub async fn load(&self) -> Result<ContentDocument, LoadError> {
        let raw = match self {
            ContentSource::File(path) => {
                debug!("Reading content document from {}", path.display());
                rocket::tokio::fs::read_to_string(path)
                    .await
                    .map_err(LoadError::Io)?
            }
            ContentSource::Http(url) => {
                debug!("Fetching content document from {}", url);
                fetch(url).await?
            }
        };
        let doc = ContentDocument::from_json(&raw)?;
        info!("Loaded content document for {}", doc.personal.name);
        Ok(doc)
    }
}

impl std::fmt::Display for ContentSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentSource::File(path) => write!(f, "{}", path.display()),
            ContentSource::Http(url) => write!(f, "{}", url),
        }
    }
}

async fn fetch(url: &Url) -> Result<String, LoadError> {
    let client = reqwest::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()
        .map_err(|e| LoadError::Http(e.to_string()))?;
    let resp = client
        .get(url.clone())
        .send()
        .await
        .map_err(|e| LoadError::Http(e.to_string()))?;
    let status = resp.status();
    if !status.is_success() {
        return Err(LoadError::Http(format!("{} returned {}", url, status)));
    }
    resp.text().await.map_err(|e| LoadError::Http(e.to_string()))
}
