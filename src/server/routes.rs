use crate::{
    error::ImageGenError,
    models::{ErrorResponse, GenerateImageBody, GenerateImageResponse, GenerationRequest},
    server::AppState,
};
use actix_web::{http::header::ContentType, web, HttpResponse};
use serde_json::json;
use uuid::Uuid;

const INDEX_HTML: &str = include_str!("../../static/index.html");

pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(INDEX_HTML)
}

pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}

pub async fn generate_image(
    body: web::Json<GenerateImageBody>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, ImageGenError> {
    let request_id = Uuid::new_v4();
    let body = body.into_inner();
    log::info!(
        "[req:{}] Received prompt: {:?}, type: {:?}",
        request_id,
        body.prompt.as_deref().unwrap_or_default(),
        body.content_type.as_deref().unwrap_or_default()
    );

    let request = GenerationRequest::from_body(body).map_err(|e| {
        log::warn!("[req:{}] Rejected request: {}", request_id, e);
        e
    })?;

    let image_url = data
        .generator
        .generate(&request.prompt, request.content_type)
        .await
        .map_err(|e| {
            log::error!("[req:{}] Error generating image: {}", request_id, e);
            e
        })?;

    if !image_url.starts_with("http") {
        log::error!("[req:{}] Invalid image URL received: {}", request_id, image_url);
        return Ok(HttpResponse::InternalServerError().json(ErrorResponse {
            error: "Failed to generate a valid image URL".to_string(),
        }));
    }

    log::info!("[req:{}] Image generated: {}", request_id, image_url);
    Ok(HttpResponse::Ok().json(GenerateImageResponse { image_url }))
}

pub async fn method_not_allowed() -> HttpResponse {
    log::info!("Rejected non-POST request to /generate-image");
    HttpResponse::MethodNotAllowed().json(ErrorResponse {
        error: "Method Not Allowed".to_string(),
    })
}
