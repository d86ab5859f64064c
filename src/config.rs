use std::env;

pub const DEFAULT_BASE_URL: &str = "https://api.together.xyz/v1";
pub const DEFAULT_MODEL: &str = "black-forest-labs/FLUX.1.1-pro";
pub const DEFAULT_STEPS: u32 = 10;
pub const DEFAULT_SAMPLES: u32 = 1;
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;

/// Settings for the hosted text-to-image provider.
///
/// The credential is optional here on purpose: a missing key is reported when a
/// generation is attempted, not when the process starts.
#[derive(Debug, Clone)]
pub struct TogetherConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub steps: u32,
    pub samples: u32,
    pub use_seed: bool,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub together: TogetherConfig,
}

impl Default for TogetherConfig {
    fn default() -> Self {
        TogetherConfig {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            steps: DEFAULT_STEPS,
            samples: DEFAULT_SAMPLES,
            use_seed: true,
        }
    }
}

impl TogetherConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let defaults = Self::default();

        let api_key = env::var("TOGETHER_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());
        let base_url = env::var("TOGETHER_BASE_URL").unwrap_or(defaults.base_url);
        let model = env::var("IMAGE_MODEL").unwrap_or(defaults.model);
        let steps = env::var("IMAGE_STEPS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.steps);
        let samples = env::var("IMAGE_SAMPLES")
            .ok()
            .and_then(|s| s.parse().ok())
            .filter(|n: &u32| *n > 0)
            .unwrap_or(defaults.samples);
        let use_seed = env::var("IMAGE_USE_SEED")
            .ok()
            .map_or(defaults.use_seed, |val| parse_flag(&val));

        TogetherConfig {
            api_key,
            base_url,
            model,
            steps,
            samples,
            use_seed,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_steps(mut self, steps: u32) -> Self {
        self.steps = steps;
        self
    }

    pub fn with_samples(mut self, samples: u32) -> Self {
        self.samples = samples.max(1);
        self
    }

    pub fn with_seed(mut self, enabled: bool) -> Self {
        self.use_seed = enabled;
        self
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().map_or(false, |key| !key.is_empty())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: None,
            port: None,
            together: TogetherConfig::default(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let host = env::var("HOST").ok();
        let port = env::var("PORT").ok().and_then(|port| port.parse().ok());

        Config {
            host,
            port,
            together: TogetherConfig::from_env(),
        }
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn bind_host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    pub fn bind_port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
