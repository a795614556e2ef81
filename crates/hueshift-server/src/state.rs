use std::sync::Arc;

use crate::acquire::ImageFetcher;
use crate::config::ServerConfig;

/// Shared, read-only state handed to every request.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub fetcher: ImageFetcher,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Result<Self, anyhow::Error> {
        let fetcher = ImageFetcher::new(config.fetch_timeout, config.max_image_bytes)?;
        Ok(Self {
            config: Arc::new(config),
            fetcher,
        })
    }
}
