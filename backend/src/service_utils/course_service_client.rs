use std::sync::OnceLock;
use std::time::Duration;

use anyhow::Context;
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, warn};

const DEFAULT_SERVICE_URL: &str = "http://localhost:8080";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// HTTP client bound to one course-service origin.
#[derive(Debug, Clone)]
pub struct CourseServiceClient {
    base_url: String,
    http: reqwest::Client,
}

impl CourseServiceClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self { base_url, http })
    }

    /// Reads `COURSE_SERVICE_URL` and `COURSE_SERVICE_TIMEOUT_SECS`.
    pub fn from_env() -> anyhow::Result<Self> {
        let base_url = std::env::var("COURSE_SERVICE_URL").unwrap_or(DEFAULT_SERVICE_URL.to_string());
        let timeout_secs = match std::env::var("COURSE_SERVICE_TIMEOUT_SECS") {
            Ok(value) => value
                .parse::<u64>()
                .with_context(|| format!("COURSE_SERVICE_TIMEOUT_SECS is not a number: {value:?}"))?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };
        Self::new(base_url, Duration::from_secs(timeout_secs))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> anyhow::Result<T> {
        let url = self.url(path);
        debug!("GET {url} ({} params)", query.len());
        let response = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await
            .with_context(|| format!("GET {url} failed"))?;
        read_json(&url, response).await
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> anyhow::Result<T> {
        let url = self.url(path);
        debug!("POST {url}");
        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .with_context(|| format!("POST {url} failed"))?;
        read_json(&url, response).await
    }
}

async fn read_json<T: DeserializeOwned>(url: &str, response: reqwest::Response) -> anyhow::Result<T> {
    let status = response.status();
    let response_txt = response.text().await.with_context(|| format!("reading body of {url}"))?;
    if status.is_client_error() || status.is_server_error() {
        warn!("{url} answered {status}");
        anyhow::bail!("Error: {}: {}", status, response_txt);
    }
    debug!("{url} response: len = {}", response_txt.len());
    let parsed = serde_json::from_str::<T>(&response_txt)
        .with_context(|| format!("unexpected response shape from {url}"))?;
    Ok(parsed)
}

static SHARED_CLIENT: OnceLock<CourseServiceClient> = OnceLock::new();

/// Process-wide client configured from the environment.
pub fn get_course_service_client() -> anyhow::Result<&'static CourseServiceClient> {
    if let Some(client) = SHARED_CLIENT.get() {
        return Ok(client);
    }
    let client = CourseServiceClient::from_env()?;
    Ok(SHARED_CLIENT.get_or_init(|| client))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_are_joined_with_one_slash() {
        let client = CourseServiceClient::new("http://example.org:8080/", Duration::from_secs(1)).unwrap();
        assert_eq!(client.base_url(), "http://example.org:8080");
        assert_eq!(client.url("/modules"), "http://example.org:8080/modules");
        assert_eq!(client.url("map-topic"), "http://example.org:8080/map-topic");
    }
}
