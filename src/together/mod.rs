pub mod client;
pub mod generator;
pub mod traits;

pub use client::TogetherClient;
pub use generator::{ImageGenerator, MAX_SEED};
pub use traits::ImageApi;
