//! HTTP access to the upstream tours API.

use std::time::Duration;

use anyhow::Context;
use serde::de::DeserializeOwned;

const DEFAULT_TOURS_API_URL: &str = "http://localhost:1337/api";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub fn get_tours_api_url() -> String {
    std::env::var("TOURS_API_URL").unwrap_or(DEFAULT_TOURS_API_URL.to_string())
}

pub fn get_tours_api_timeout() -> Duration {
    parse_timeout_secs(std::env::var("TOURS_API_TIMEOUT_SECS").ok())
}

fn parse_timeout_secs(value: Option<String>) -> Duration {
    let secs = value
        .and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|secs| *secs > 0)
        .unwrap_or(DEFAULT_TIMEOUT_SECS);
    Duration::from_secs(secs)
}

pub fn get_tours_api_client() -> anyhow::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(get_tours_api_timeout())
        .build()
        .context("Failed to build tours api client")
}

/// Joins the API root and a resource query with exactly one slash between them.
pub fn resource_url(base_url: &str, resource_query: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), resource_query.trim_start_matches('/'))
}

/// GETs `resource_query` from the configured tours API and decodes the JSON body.
pub async fn fetch_data<T: DeserializeOwned>(resource_query: &str) -> anyhow::Result<T> {
    fetch_data_from(&get_tours_api_url(), resource_query).await
}

pub async fn fetch_data_from<T: DeserializeOwned>(base_url: &str, resource_query: &str) -> anyhow::Result<T> {
    let url = resource_url(base_url, resource_query);
    tracing::info!("TOURS API GET: {}", url);
    let t0 = std::time::Instant::now();

    let client = get_tours_api_client()?;
    let response = client
        .get(&url)
        .send()
        .await
        .with_context(|| format!("Request to {} failed", url))?;
    let status = response.status();
    let response_txt = response.text().await.context("Failed to read tours api response")?;
    if status.is_client_error() || status.is_server_error() {
        tracing::error!("TOURS API ERROR: {} from {}", status, url);
        anyhow::bail!("Error: {}: {}", status, response_txt);
    }

    let dt_ms = t0.elapsed().as_millis();
    tracing::info!("TOURS API RESPONSE: len = {} (fetched in {}ms)", response_txt.len(), dt_ms);
    let parsed: T = serde_json::from_str(&response_txt)
        .with_context(|| format!("Malformed payload from {}", url))?;
    Ok(parsed)
}
