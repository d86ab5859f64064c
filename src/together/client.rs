use crate::{
    config::TogetherConfig,
    error::{ImageGenError, Result},
    models::GenerationParameters,
    together::traits::ImageApi,
};
use async_trait::async_trait;
use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE},
    Client,
};
use serde_json::Value;

/// reqwest-backed client for Together's OpenAI-style images endpoint.
#[derive(Clone)]
pub struct TogetherClient {
    client: Client,
    base_url: String,
}

impl TogetherClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        log::debug!("Together client configured: base_url={}", base_url);

        Self {
            client: Client::new(),
            base_url,
        }
    }

    pub fn from_config(config: &TogetherConfig) -> Self {
        Self::new(config.base_url.clone())
    }

    pub fn endpoint(&self) -> String {
        format!("{}/images/generations", self.base_url)
    }

    fn build_headers(&self, api_key: &str) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        let bearer = HeaderValue::from_str(&format!("Bearer {}", api_key)).map_err(|_| {
            ImageGenError::ConfigError("API key contains characters not allowed in a header".into())
        })?;
        headers.insert(AUTHORIZATION, bearer);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(headers)
    }
}

#[async_trait]
impl ImageApi for TogetherClient {
    async fn create_images(&self, api_key: &str, params: &GenerationParameters) -> Result<Value> {
        let url = self.endpoint();
        log::debug!("Together image generation POST {}", url);

        let response = self
            .client
            .post(&url)
            .headers(self.build_headers(api_key)?)
            .json(params)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            log::error!("Together API returned {}: {}", status, error_text);
            return Err(ImageGenError::UpstreamError(format!(
                "generation service returned {}: {}",
                status, error_text
            )));
        }

        response.json::<Value>().await.map_err(|e| {
            ImageGenError::GenerationError(format!("Invalid response from API: {}", e))
        })
    }
}
