//! HTTP mapping for `ContadorError`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use contador_core::error::{ClientCode, ContadorError};

/// `ContadorError` rendered as an HTTP response with an `ErrorBody` payload.
#[derive(Debug)]
pub struct ApiError(pub ContadorError);

impl From<ContadorError> for ApiError {
    fn from(e: ContadorError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0.client_code() {
            ClientCode::BadRequest | ClientCode::UnsupportedVersion => StatusCode::BAD_REQUEST,
            ClientCode::NotFound => StatusCode::NOT_FOUND,
            ClientCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self.0.to_body())).into_response()
    }
}
