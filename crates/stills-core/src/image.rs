//! Fetch-and-cache primitive for profile images.
//!
//! Each URL is fetched at most once. Callers racing on the same URL wait for
//! the same fetch and all observe the same [`ImagePhase`].

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use tokio::sync::{Mutex, OnceCell};

/// Loading state of one image
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImagePhase {
    /// Not fetched yet, or the fetch is still running
    Loading,
    /// Encoded image bytes
    Image(Arc<[u8]>),
    /// The fetch failed; render a placeholder
    Failure(String),
}

impl ImagePhase {
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Source of image bytes
pub trait ImageFetcher {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<Vec<u8>, String>> + Send;
}

/// URL-keyed cache in front of an [`ImageFetcher`]
#[derive(Debug)]
pub struct ImageCache<F> {
    fetcher: F,
    entries: Mutex<HashMap<String, Arc<OnceCell<ImagePhase>>>>,
}

impl<F: ImageFetcher> ImageCache<F> {
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Current phase without starting a fetch.
    pub async fn phase(&self, url: &str) -> ImagePhase {
        let entries = self.entries.lock().await;
        entries
            .get(url)
            .and_then(|cell| cell.get().cloned())
            .unwrap_or(ImagePhase::Loading)
    }

    /// Fetch `url` unless it is cached, then return its final phase.
    pub async fn load(&self, url: &str) -> ImagePhase {
        let cell = {
            let mut entries = self.entries.lock().await;
            Arc::clone(entries.entry(url.to_string()).or_default())
        };

        cell.get_or_init(|| async {
            tracing::debug!("Fetching image {}", url);
            match self.fetcher.fetch(url).await {
                Ok(bytes) => ImagePhase::Image(bytes.into()),
                Err(error) => {
                    tracing::warn!("Failed to load image {}: {}", url, error);
                    ImagePhase::Failure(error)
                }
            }
        })
        .await
        .clone()
    }

    /// Forget a cached result so the next load fetches again.
    pub async fn evict(&self, url: &str) -> bool {
        self.entries.lock().await.remove(url).is_some()
    }

    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }
}
