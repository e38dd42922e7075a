//! Fetching the published gallery and video documents.

use async_trait::async_trait;

use crate::error::LoadError;
use crate::models::design::GalleryDocument;
use crate::models::video::VideosDocument;

/// Anything that can hand back the body of a JSON document by URL.
///
/// `?Send` because the browser's fetch futures are tied to the UI thread.
#[async_trait(?Send)]
pub trait JsonSource {
    async fn fetch(&self, url: &str) -> Result<String, LoadError>;
}

/// Plain HTTPS GET through `reqwest` (the browser's `fetch` on wasm32).
#[derive(Debug, Clone, Default)]
pub struct HttpSource {
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        HttpSource { client }
    }
}

#[async_trait(?Send)]
impl JsonSource for HttpSource {
    async fn fetch(&self, url: &str) -> Result<String, LoadError> {
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| LoadError::Network(e.to_string()))?;
        let status = resp.status();
        if !status.is_success() {
            return Err(LoadError::Status(status.as_u16()));
        }
        resp.text()
            .await
            .map_err(|e| LoadError::Network(e.to_string()))
    }
}

pub async fn fetch_gallery<S: JsonSource + ?Sized>(
    source: &S,
    url: &str,
) -> Result<GalleryDocument, LoadError> {
    let body = source.fetch(url).await?;
    Ok(serde_json::from_str(&body)?)
}

pub async fn fetch_videos<S: JsonSource + ?Sized>(
    source: &S,
    url: &str,
) -> Result<VideosDocument, LoadError> {
    let body = source.fetch(url).await?;
    Ok(serde_json::from_str(&body)?)
}
