use crate::{
    error::{ImageGenError, Result},
    models::ContentType,
};
use serde::{Deserialize, Serialize};

pub const MISSING_FIELDS_MESSAGE: &str = "Missing prompt or type";
pub const INVALID_TYPE_MESSAGE: &str = "Invalid type. Must be \"logo\" or \"banner\"";

/// Raw JSON body of `POST /generate-image`. Both fields are optional so that
/// a missing field is reported as a validation error rather than a parse error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateImageBody {
    pub prompt: Option<String>,
    #[serde(rename = "type")]
    pub content_type: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateImageResponse {
    pub image_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// A validated generation request.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub prompt: String,
    pub content_type: ContentType,
}

impl GenerationRequest {
    pub fn from_body(body: GenerateImageBody) -> Result<Self> {
        let prompt = body.prompt.filter(|prompt| !prompt.is_empty());
        let tag = body.content_type.filter(|tag| !tag.is_empty());

        let (prompt, tag) = match (prompt, tag) {
            (Some(prompt), Some(tag)) => (prompt, tag),
            _ => return Err(ImageGenError::InvalidInput(MISSING_FIELDS_MESSAGE.into())),
        };

        let content_type = ContentType::parse(&tag)
            .ok_or_else(|| ImageGenError::InvalidInput(INVALID_TYPE_MESSAGE.into()))?;

        Ok(Self {
            prompt,
            content_type,
        })
    }
}
