use std::time::Duration;

use anyhow::Context;
use serde::de::DeserializeOwned;

use crate::domain::FetchError;

const USER_AGENT: &str = concat!("bookfinder/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Shared HTTP client for catalog requests.
pub fn build_client() -> anyhow::Result<reqwest::Client> {
    reqwest::ClientBuilder::new()
        .user_agent(USER_AGENT)
        .timeout(REQUEST_TIMEOUT)
        .build()
        .context("failed to configure HTTP client")
}

/// Send a GET request and decode a JSON body, mapping failures onto [`FetchError`].
pub async fn get_json<T>(client: &reqwest::Client, url: &str) -> Result<T, FetchError>
where
    T: DeserializeOwned,
{
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| FetchError::request(format!("{url}: {e}")))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Transport {
            status: status.as_u16(),
        });
    }

    let body = response
        .bytes()
        .await
        .map_err(|e| FetchError::request(format!("failed to read response body: {e}")))?;

    Ok(serde_json::from_slice(&body)?)
}
