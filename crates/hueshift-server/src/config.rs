//! Service configuration loaded from the environment.

use std::env;
use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{anyhow, Context};

/// Port the service listens on unless `HUESHIFT_PORT` says otherwise.
pub const DEFAULT_PORT: u16 = 32015;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;
const DEFAULT_MAX_IMAGE_BYTES: usize = 20 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Upper bound on a single source image download, connect to last byte.
    pub fetch_timeout: Duration,
    /// Largest source image body accepted, in bytes.
    pub max_image_bytes: usize,
    /// Honour the EXIF orientation tag when decoding JPEGs.
    pub apply_exif_orientation: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            fetch_timeout: Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
            max_image_bytes: DEFAULT_MAX_IMAGE_BYTES,
            apply_exif_orientation: false,
        }
    }
}

impl ServerConfig {
    /// Load configuration from the process environment (and `.env`, if present).
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HUESHIFT_HOST")
            .filter(|h| !h.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = parse_var(&lookup, "HUESHIFT_PORT", DEFAULT_PORT)?;
        let timeout_secs = parse_var(&lookup, "HUESHIFT_FETCH_TIMEOUT_SECS", DEFAULT_FETCH_TIMEOUT_SECS)?;
        let max_image_bytes = parse_var(&lookup, "HUESHIFT_MAX_IMAGE_BYTES", DEFAULT_MAX_IMAGE_BYTES)?;
        let apply_exif_orientation = match lookup("HUESHIFT_APPLY_EXIF_ORIENTATION") {
            Some(raw) => parse_bool(&raw).with_context(|| {
                format!("HUESHIFT_APPLY_EXIF_ORIENTATION must be a boolean, got {raw:?}")
            })?,
            None => false,
        };

        let config = Self {
            host,
            port,
            fetch_timeout: Duration::from_secs(timeout_secs),
            max_image_bytes,
            apply_exif_orientation,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.fetch_timeout.is_zero() {
            return Err(anyhow!("HUESHIFT_FETCH_TIMEOUT_SECS must be greater than zero"));
        }
        if self.max_image_bytes == 0 {
            return Err(anyhow!("HUESHIFT_MAX_IMAGE_BYTES must be greater than zero"));
        }
        Ok(())
    }

    /// `host:port` for the TCP listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<F, T>(lookup: &F, key: &str, default: T) -> Result<T, anyhow::Error>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| anyhow!("Invalid value for {key} ({raw:?}): {e}")),
        None => Ok(default),
    }
}

fn parse_bool(raw: &str) -> Result<bool, anyhow::Error> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(anyhow!("not a boolean: {other}")),
    }
}
