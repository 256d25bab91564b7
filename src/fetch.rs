use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::StatusCode;
use tracing::{info, warn};

/// Pause before every request. Fixed politeness delay toward the catalog host.
pub const REQUEST_DELAY: Duration = Duration::from_secs(3);

/// Sequential page fetcher. Every request waits `delay` first.
pub struct Fetcher {
    client: reqwest::Client,
    delay: Duration,
}

impl Fetcher {
    pub fn new() -> Result<Self> {
        Self::with_delay(REQUEST_DELAY)
    }

    pub fn with_delay(delay: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { client, delay })
    }

    /// GET a page body. Non-200 responses and transport errors are both
    /// reported as `None`; the caller decides whether that is fatal.
    pub async fn get(&self, url: &str) -> Option<String> {
        info!("Requesting {}", url);
        tokio::time::sleep(self.delay).await;

        let response = match self.client.get(url).send().await {
            Ok(r) => r,
            Err(e) => {
                warn!("Failed to fetch {}: {}", url, e);
                return None;
            }
        };

        let status = response.status();
        if status != StatusCode::OK {
            warn!("Failed to fetch {} with status code {}", url, status.as_u16());
            return None;
        }

        match response.text().await {
            Ok(body) => {
                info!("Received response for {}", url);
                Some(body)
            }
            Err(e) => {
                warn!("Failed to read body of {}: {}", url, e);
                None
            }
        }
    }
}
