use crate::{
    config::TogetherConfig,
    error::{ImageGenError, Result},
    logger,
    models::{ContentType, GenerationParameters, GenerationResult},
    prompt::enhance_prompt,
    together::{client::TogetherClient, traits::ImageApi},
};
use rand::Rng;
use std::sync::Arc;

/// Seeds are drawn from `0..MAX_SEED`.
pub const MAX_SEED: u32 = 10_000;

/// Turns a prompt and content type into an image URL with one provider call.
#[derive(Clone)]
pub struct ImageGenerator {
    api: Arc<dyn ImageApi>,
    config: TogetherConfig,
}

impl ImageGenerator {
    pub fn new(api: Arc<dyn ImageApi>, config: TogetherConfig) -> Self {
        Self { api, config }
    }

    pub fn from_config(config: TogetherConfig) -> Self {
        let api = Arc::new(TogetherClient::from_config(&config));
        Self::new(api, config)
    }

    pub fn build_parameters(&self, prompt: &str, content_type: ContentType) -> GenerationParameters {
        let (width, height) = content_type.dimensions();
        let seed = if self.config.use_seed {
            Some(rand::thread_rng().gen_range(0..MAX_SEED))
        } else {
            None
        };

        GenerationParameters {
            model: self.config.model.clone(),
            prompt: enhance_prompt(prompt, content_type),
            width,
            height,
            steps: self.config.steps,
            n: self.config.samples,
            seed,
        }
    }

    fn api_key(&self) -> Result<&str> {
        self.config
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                ImageGenError::ConfigError("API key not set in environment variables".into())
            })
    }

    /// Every result the provider returned, in order.
    pub async fn generate_images(
        &self,
        prompt: &str,
        content_type: ContentType,
    ) -> Result<Vec<GenerationResult>> {
        let api_key = self.api_key()?;
        let params = self.build_parameters(prompt, content_type);

        log::info!(
            "Generating {} with model {} ({}x{}, steps={}, n={}, seed={:?})",
            content_type,
            params.model,
            params.width,
            params.height,
            params.steps,
            params.n,
            params.seed
        );

        let response = {
            let _timer = logger::timer("image generation call");
            self.api.create_images(api_key, &params).await.map_err(|e| {
                log::error!("Error calling image generation API: {}", e);
                e
            })?
        };

        log::debug!("Full API response: {}", response);

        GenerationResult::from_response(&response)
    }

    /// URL of the first generated image. Additional samples are discarded.
    pub async fn generate(&self, prompt: &str, content_type: ContentType) -> Result<String> {
        let results = self.generate_images(prompt, content_type).await?;

        let first = results
            .into_iter()
            .next()
            .ok_or_else(|| ImageGenError::GenerationError("Failed to generate any images".into()))?;

        first
            .url
            .ok_or_else(|| ImageGenError::GenerationError("Failed to generate any images".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex,
    };

    struct MockApi {
        response: Mutex<Option<Result<Value>>>,
        calls: AtomicUsize,
        last_params: Mutex<Option<GenerationParameters>>,
    }

    impl MockApi {
        fn returning(response: Result<Value>) -> Arc<Self> {
            Arc::new(Self {
                response: Mutex::new(Some(response)),
                calls: AtomicUsize::new(0),
                last_params: Mutex::new(None),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        fn last_params(&self) -> GenerationParameters {
            self.last_params.lock().unwrap().clone().unwrap()
        }
    }

    #[async_trait]
    impl ImageApi for MockApi {
        async fn create_images(&self, api_key: &str, params: &GenerationParameters) -> Result<Value> {
            assert_eq!(api_key, "test-key");
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_params.lock().unwrap() = Some(params.clone());
            self.response
                .lock()
                .unwrap()
                .take()
                .unwrap_or_else(|| Ok(json!({"data": []})))
        }
    }

    fn generator(api: Arc<MockApi>, config: TogetherConfig) -> ImageGenerator {
        ImageGenerator::new(api, config)
    }

    fn configured() -> TogetherConfig {
        TogetherConfig::new().with_api_key("test-key")
    }

    #[tokio::test]
    async fn returns_first_url() {
        let api = MockApi::returning(Ok(json!({
            "data": [
                {"index": 0, "url": "https://api.example/img1.png", "timings": {"inference": 0.8}},
                {"index": 1, "url": "https://api.example/img2.png"}
            ]
        })));
        let url = generator(api.clone(), configured())
            .generate("a fox", ContentType::Logo)
            .await
            .unwrap();

        assert_eq!(url, "https://api.example/img1.png");
        assert_eq!(api.calls(), 1);
    }

    #[tokio::test]
    async fn missing_credential_fails_before_any_call() {
        let api = MockApi::returning(Ok(json!({"data": [{"url": "https://x"}]})));
        let err = generator(api.clone(), TogetherConfig::new())
            .generate("a fox", ContentType::Logo)
            .await
            .unwrap_err();

        assert!(matches!(err, ImageGenError::ConfigError(_)));
        assert_eq!(api.calls(), 0);
    }

    #[tokio::test]
    async fn empty_result_list_is_a_generation_error() {
        let api = MockApi::returning(Ok(json!({"data": []})));
        let err = generator(api, configured())
            .generate("a fox", ContentType::Banner)
            .await
            .unwrap_err();

        assert!(matches!(err, ImageGenError::GenerationError(_)));
    }

    #[tokio::test]
    async fn first_result_without_url_is_a_generation_error() {
        let api = MockApi::returning(Ok(json!({"data": [{"b64_json": "AAAA"}]})));
        let err = generator(api, configured())
            .generate("a fox", ContentType::Logo)
            .await
            .unwrap_err();

        assert!(matches!(err, ImageGenError::GenerationError(_)));
    }

    #[tokio::test]
    async fn malformed_response_is_a_generation_error() {
        let api = MockApi::returning(Ok(json!({"data": "nope"})));
        let err = generator(api, configured())
            .generate("a fox", ContentType::Logo)
            .await
            .unwrap_err();

        assert!(matches!(err, ImageGenError::GenerationError(_)));
    }

    #[tokio::test]
    async fn transport_failure_propagates_without_retry() {
        let api = MockApi::returning(Err(ImageGenError::UpstreamError(
            "connection refused".into(),
        )));
        let err = generator(api.clone(), configured())
            .generate("a fox", ContentType::Logo)
            .await
            .unwrap_err();

        assert!(matches!(err, ImageGenError::UpstreamError(_)));
        assert_eq!(api.calls(), 1);
    }

    #[tokio::test]
    async fn request_carries_policy_and_dimensions() {
        let api = MockApi::returning(Ok(json!({"data": [{"url": "https://api.example/b.png"}]})));
        generator(api.clone(), configured())
            .generate("a fox", ContentType::Banner)
            .await
            .unwrap();

        let params = api.last_params();
        assert_eq!(params.model, "black-forest-labs/FLUX.1.1-pro");
        assert_eq!((params.width, params.height), (1280, 736));
        assert_eq!(params.steps, 10);
        assert_eq!(params.n, 1);
        assert!(params.seed.map_or(false, |seed| seed < MAX_SEED));
        assert_eq!(params.prompt, enhance_prompt("a fox", ContentType::Banner));
    }

    #[tokio::test]
    async fn generate_images_exposes_every_sample() {
        let api = MockApi::returning(Ok(json!({
            "data": [{"url": "https://a"}, {"url": "https://b"}, {"url": "https://c"}]
        })));
        let results = generator(api, configured().with_samples(3))
            .generate_images("a fox", ContentType::Logo)
            .await
            .unwrap();

        let urls: Vec<_> = results.iter().filter_map(|r| r.url.as_deref()).collect();
        assert_eq!(urls, vec!["https://a", "https://b", "https://c"]);
    }

    #[test]
    fn seed_can_be_disabled() {
        let api = MockApi::returning(Ok(json!({"data": []})));
        let params = generator(api, configured().with_seed(false))
            .build_parameters("a fox", ContentType::Logo);
        assert_eq!(params.seed, None);
        assert_eq!(params.width, params.height);
    }
}
