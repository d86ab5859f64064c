pub mod api;
pub mod content;
pub mod image;

pub use api::*;
pub use content::*;
pub use image::*;
