use crate::{error::Result, models::GenerationParameters};
use async_trait::async_trait;
use serde_json::Value;

/// Transport to a hosted text-to-image service.
///
/// Implementations return the provider's raw JSON so the gateway can decide
/// what counts as a malformed response.
#[async_trait]
pub trait ImageApi: Send + Sync {
    async fn create_images(&self, api_key: &str, params: &GenerationParameters) -> Result<Value>;
}
