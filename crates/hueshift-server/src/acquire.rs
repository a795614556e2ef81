//! Image acquisition: download the source image named by the request.
//!
//! Decoding happens later, on a blocking thread, together with the hue
//! transform. Both halves report through [`AcquireError`].

use std::time::Duration;

use hueshift_core::DecodeError;
use reqwest::StatusCode;
use thiserror::Error;

/// Why a source image could not be turned into pixels.
#[derive(Debug, Error)]
pub enum AcquireError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Remote server responded with status {0}")]
    Status(StatusCode),

    #[error("Image exceeds the {limit} byte limit")]
    TooLarge { limit: usize },

    #[error("Could not decode image: {0}")]
    Decode(#[from] DecodeError),
}

/// HTTP client for source images, with a per-download timeout and body cap.
#[derive(Debug, Clone)]
pub struct ImageFetcher {
    client: reqwest::Client,
    max_bytes: usize,
}

impl ImageFetcher {
    pub fn new(timeout: Duration, max_bytes: usize) -> Result<Self, AcquireError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("hueshift/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, max_bytes })
    }

    pub fn max_bytes(&self) -> usize {
        self.max_bytes
    }

    /// Download `url` and return the raw body.
    ///
    /// Non-success statuses and bodies larger than the configured cap are
    /// errors. The cap is enforced while streaming, so a lying or missing
    /// `Content-Length` cannot push past it.
    pub async fn fetch(&self, url: &str) -> Result<Vec<u8>, AcquireError> {
        let mut response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AcquireError::Status(status));
        }

        if let Some(len) = response.content_length() {
            if len > self.max_bytes as u64 {
                return Err(AcquireError::TooLarge {
                    limit: self.max_bytes,
                });
            }
        }

        let mut body = Vec::new();
        while let Some(chunk) = response.chunk().await? {
            if body.len() + chunk.len() > self.max_bytes {
                return Err(AcquireError::TooLarge {
                    limit: self.max_bytes,
                });
            }
            body.extend_from_slice(&chunk);
        }

        tracing::debug!(url = %url, bytes = body.len(), "Downloaded source image");
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fetcher() -> ImageFetcher {
        ImageFetcher::new(Duration::from_secs(5), 1024).unwrap()
    }

    #[test]
    fn test_max_bytes() {
        assert_eq!(fetcher().max_bytes(), 1024);
    }

    #[tokio::test]
    async fn test_fetch_invalid_url() {
        let result = fetcher().fetch("not a url").await;
        assert!(matches!(result, Err(AcquireError::Request(_))));
    }

    #[tokio::test]
    async fn test_fetch_connection_refused() {
        // Port 1 (tcpmux) is essentially never listening
        let result = fetcher().fetch("http://127.0.0.1:1/image.png").await;
        assert!(matches!(result, Err(AcquireError::Request(_))));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            AcquireError::Status(StatusCode::NOT_FOUND).to_string(),
            "Remote server responded with status 404 Not Found"
        );
        assert_eq!(
            AcquireError::TooLarge { limit: 10 }.to_string(),
            "Image exceeds the 10 byte limit"
        );
    }
}
