use crate::config::CatalogConfig;
use crate::error::{CatalogError, ServiceError};
use bytes::Bytes;
use log::{debug, warn};
use reqwest::{Client, Url};
use std::time::Duration;

pub(crate) fn build_client(
    config: &CatalogConfig,
    timeout: Duration,
) -> Result<Client, CatalogError> {
    let client = Client::builder()
        .timeout(timeout)
        .user_agent(config.user_agent.as_str())
        .build()?;

    Ok(client)
}

/// GET `url` and return the raw body.
///
/// Non-2xx statuses map to `BadServerResponse`; connection and body read
/// failures map to `Unknown`.
pub(crate) async fn get_bytes(client: &Client, url: Url) -> Result<Bytes, ServiceError> {
    debug!("GET {}", url);

    let response = client.get(url.clone()).send().await.map_err(|e| {
        warn!("Request to {} failed: {}", url, e);
        if e.is_builder() {
            ServiceError::InvalidUrl
        } else {
            ServiceError::Unknown
        }
    })?;

    let status = response.status();
    if !status.is_success() {
        warn!("Request to {} returned {}", url, status);
        return Err(ServiceError::BadServerResponse);
    }

    let body = response.bytes().await.map_err(|e| {
        warn!("Failed to read body from {}: {}", url, e);
        ServiceError::Unknown
    })?;

    debug!("Received {} bytes from {}", body.len(), url);
    Ok(body)
}
