use crate::error::{ImageGenError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body sent to the provider's `/images/generations` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationParameters {
    pub model: String,
    pub prompt: String,
    pub width: u32,
    pub height: u32,
    pub steps: u32,
    pub n: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u32>,
}

/// One image produced by the provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationResult {
    pub index: usize,
    pub url: Option<String>,
    /// Provider timing metadata, passed through untouched.
    pub timings: Option<Value>,
}

impl GenerationResult {
    /// Reads the `data` list out of a raw provider response.
    pub fn from_response(response: &Value) -> Result<Vec<GenerationResult>> {
        let data = response
            .get("data")
            .and_then(Value::as_array)
            .ok_or_else(|| ImageGenError::GenerationError("Invalid response from API".into()))?;

        Ok(data
            .iter()
            .enumerate()
            .map(|(index, item)| GenerationResult {
                index,
                url: item
                    .get("url")
                    .and_then(Value::as_str)
                    .filter(|url| !url.is_empty())
                    .map(String::from),
                timings: item.get("timings").cloned(),
            })
            .collect())
    }
}
