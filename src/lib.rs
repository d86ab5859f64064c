//! Logo and channel-banner generation on top of a hosted text-to-image API.
//!
//! The [`together::ImageGenerator`] gateway enhances a prompt with
//! type-specific style guidance, makes one call to the provider and returns
//! the first image URL. With the `server` feature the gateway is exposed over
//! HTTP together with a small browser form.

pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod prompt;
#[cfg(feature = "server")]
pub mod server;
pub mod together;

pub use config::{Config, TogetherConfig};
pub use error::{ImageGenError, Result};
pub use models::{
    ContentType, GenerateImageBody, GenerateImageResponse, GenerationParameters,
    GenerationRequest, GenerationResult,
};
pub use prompt::enhance_prompt;
pub use together::{ImageApi, ImageGenerator, TogetherClient};
