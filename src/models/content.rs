use serde::{Deserialize, Serialize};
use std::fmt;

/// Output size of a logo, in pixels. Logos are square.
pub const LOGO_SIZE: u32 = 512;
/// Output size of a channel banner, in pixels. Both sides are multiples of 16
/// as FLUX requires, which keeps the ratio close to 16:9.
pub const BANNER_WIDTH: u32 = 1280;
pub const BANNER_HEIGHT: u32 = 736;
pub const BANNER_ASPECT: f64 = 16.0 / 9.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Logo,
    Banner,
}

impl ContentType {
    /// Accepts exactly the wire tags `"logo"` and `"banner"`.
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "logo" => Some(ContentType::Logo),
            "banner" => Some(ContentType::Banner),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Logo => "logo",
            ContentType::Banner => "banner",
        }
    }

    /// (width, height) requested from the provider.
    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            ContentType::Logo => (LOGO_SIZE, LOGO_SIZE),
            ContentType::Banner => (BANNER_WIDTH, BANNER_HEIGHT),
        }
    }

    pub fn all() -> [ContentType; 2] {
        [ContentType::Logo, ContentType::Banner]
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
