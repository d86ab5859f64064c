use crate::{error::ImageGenError, models::ErrorResponse};
use actix_web::{error, http::StatusCode, HttpRequest, HttpResponse, ResponseError};

impl ResponseError for ImageGenError {
    fn status_code(&self) -> StatusCode {
        if self.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = if self.is_client_error() {
            self.to_string()
        } else {
            format!("Error generating image: {}", self)
        };

        HttpResponse::build(self.status_code()).json(ErrorResponse { error: message })
    }
}

/// Unparseable bodies get the same `{ "error": ... }` shape as every other failure.
pub fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> error::Error {
    log::error!("JSON payload error: {}", err);
    let response = HttpResponse::BadRequest().json(ErrorResponse {
        error: format!("Invalid JSON payload: {}", err),
    });
    error::InternalError::from_response(err, response).into()
}
