//! actix-web surface: the form page and the `/generate-image` endpoint.

pub mod errors;
pub mod routes;

use crate::{config::Config, together::ImageGenerator};
use actix_web::{middleware, web, App, HttpServer};

pub use errors::json_error_handler;

pub struct AppState {
    pub generator: ImageGenerator,
}

impl AppState {
    pub fn new(generator: ImageGenerator) -> Self {
        Self { generator }
    }
}

pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type_required(false)
        .error_handler(json_error_handler)
}

/// Registers every route. Any method other than POST on `/generate-image` gets a 405.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(routes::index))
        .route("/health", web::get().to(routes::health))
        .service(
            web::resource("/generate-image")
                .route(web::post().to(routes::generate_image))
                .default_service(web::to(routes::method_not_allowed)),
        );
}

pub async fn run(config: Config) -> std::io::Result<()> {
    if !config.together.has_api_key() {
        log::warn!("TOGETHER_API_KEY is not set; generation requests will fail until it is");
    }

    let generator = ImageGenerator::from_config(config.together.clone());
    let state = web::Data::new(AppState::new(generator));
    let bind = (config.bind_host().to_string(), config.bind_port());

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .app_data(json_config())
            .configure(configure)
    })
    .bind(bind)?
    .run()
    .await
}
