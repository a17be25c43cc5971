//! HTTP image fetching for profile avatars.

use std::future::Future;
use std::time::Duration;

use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine as _;
use stills_core::image::{ImageCache, ImageFetcher};
use stills_core::util::{compact_text, is_http_url};

pub type DesktopImageCache = ImageCache<HttpImageFetcher>;

const FETCH_TIMEOUT: Duration = Duration::from_secs(15);

/// Fetches over HTTP, or fails every request when offline
#[derive(Debug, Clone)]
pub struct HttpImageFetcher {
    client: Option<reqwest::Client>,
}

impl HttpImageFetcher {
    /// Build the HTTP client, going offline when it cannot be built.
    pub fn new() -> Self {
        match reqwest::Client::builder().timeout(FETCH_TIMEOUT).build() {
            Ok(client) => Self {
                client: Some(client),
            },
            Err(e) => {
                tracing::error!("Failed to build HTTP client, images disabled: {}", e);
                Self::offline()
            }
        }
    }

    #[must_use]
    pub const fn offline() -> Self {
        Self { client: None }
    }
}

impl Default for HttpImageFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageFetcher for HttpImageFetcher {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<Vec<u8>, String>> + Send {
        let client = self.client.clone();
        let url = url.to_string();
        async move {
            if !is_http_url(&url) {
                return Err(format!("Not an http(s) URL: {url}"));
            }
            let Some(client) = client else {
                return Err("Image loading is unavailable".to_string());
            };

            let response = client
                .get(&url)
                .send()
                .await
                .map_err(|error| format!("Failed to request image: {error}"))?;
            if !response.status().is_success() {
                let status = response.status().as_u16();
                let body = response.text().await.unwrap_or_default();
                return Err(format!(
                    "Image request failed with HTTP {status}: {}",
                    compact_text(&body)
                ));
            }

            let bytes = response
                .bytes()
                .await
                .map_err(|error| format!("Failed to read image body: {error}"))?;
            Ok(bytes.to_vec())
        }
    }
}

fn sniff_mime_type(bytes: &[u8]) -> &'static str {
    match bytes {
        [0x89, b'P', b'N', b'G', ..] => "image/png",
        [0xFF, 0xD8, 0xFF, ..] => "image/jpeg",
        [b'G', b'I', b'F', b'8', ..] => "image/gif",
        [b'R', b'I', b'F', b'F', _, _, _, _, b'W', b'E', b'B', b'P', ..] => "image/webp",
        _ => "application/octet-stream",
    }
}

/// Encode fetched bytes as a `data:` URI the webview can render.
pub fn data_uri(bytes: &[u8]) -> String {
    let mime_type = sniff_mime_type(bytes);
    let encoded = BASE64_STANDARD.encode(bytes);
    format!("data:{mime_type};base64,{encoded}")
}
