//! Style guidance wrapped around the user's prompt before it is sent to the model.

use crate::models::ContentType;

const LOGO_GUIDANCE: &str = "Design a professional, minimalist, and memorable logo that represents the brand identity clearly. The logo should feature clean lines, modern aesthetics, and be scalable to various sizes without losing detail or recognition. Focus on creating a versatile design suitable for social media, digital platforms, and print. Ensure the design works well on light and dark backgrounds, and avoid clutter.";

const BANNER_GUIDANCE: &str = "Design a visually captivating, vibrant, and well-balanced channel banner. Incorporate relevant imagery, graphics, and themes that reflect the channel’s content or identity. Follow YouTube's dimensions (2560x1440 pixels) and safe area guidelines (1235x338 pixels). Only include text or logos if specified in the prompt; otherwise, focus on creating a visually compelling, non-text-based design. Ensure the banner remains visually appealing across devices.";

const CLOSING_GUIDANCE: &str = "Ensure the color schemes, typography, and visual elements are appropriate and aligned with the brand or channel’s theme.";

pub fn style_guidance(content_type: ContentType) -> &'static str {
    match content_type {
        ContentType::Logo => LOGO_GUIDANCE,
        ContentType::Banner => BANNER_GUIDANCE,
    }
}

/// Builds the enhanced prompt: type guidance, the user's concept verbatim, closing guidance.
pub fn enhance_prompt(base_prompt: &str, content_type: ContentType) -> String {
    format!(
        "{} The design should reflect the following concept: {}. {}",
        style_guidance(content_type),
        base_prompt,
        CLOSING_GUIDANCE
    )
}
