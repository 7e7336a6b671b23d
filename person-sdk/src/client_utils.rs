use crate::errors::{ProviderError, ProviderResult};
use reqwest::Client;
use serde::de::DeserializeOwned;

/// Issue a GET request and parse the JSON response.
/// Returns an error on non-2xx status codes.
pub async fn get_json<R: DeserializeOwned>(client: &Client, url: &str) -> ProviderResult<R> {
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(ProviderError::Status(status, url.to_string()));
    }
    let body = response.text().await?;
    serde_json::from_str(&body).map_err(ProviderError::Parse)
}
