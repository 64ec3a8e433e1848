mod error;

pub use error::{ApiError, Result};

use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ApiConfig;

/// Decoded reply together with the HTTP metadata it arrived with.
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub data: T,
}

// Shared JSON transport for the backend. Read-only once built.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    client: Client,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let url = Url::parse(&config.base_url)
            .map_err(|e| ApiError::Config(format!("{}: {}", config.base_url, e)))?;
        if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
            return Err(ApiError::Config(config.base_url.clone()));
        }

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POSTs `body` as JSON to `{base_url}{path}` and decodes the reply as `T`.
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<ApiResponse<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!("POST {}", url);

        let response = self.client.post(&url).json(body).send().await?;

        let status = response.status();
        let headers = response.headers().clone();
        let text = response.text().await?;
        debug!("POST {} -> {}", url, status);

        if !status.is_success() {
            return Err(ApiError::Status { status, body: text });
        }

        let data = serde_json::from_str(&text)
            .map_err(|source| ApiError::Decode { source, body: text })?;

        Ok(ApiResponse { status, headers, data })
    }
}
