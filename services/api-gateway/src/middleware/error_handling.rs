use axum::{
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Json, Response},
};
use motolens_utils::{ErrorResponse, MotoLensError};

/// Handler error carrying a [`MotoLensError`] to the HTTP layer.
#[derive(Debug)]
pub struct ApiError(pub MotoLensError);

impl From<MotoLensError> for ApiError {
    fn from(error: MotoLensError) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status, Json(ErrorResponse::from(self.0))).into_response()
    }
}

pub async fn error_handling_middleware(
    request: Request<axum::body::Body>,
    next: Next,
) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    if response.status().is_server_error() {
        tracing::error!(%method, %uri, status = %response.status(), "Request failed");
    } else if response.status().is_client_error() {
        tracing::debug!(%method, %uri, status = %response.status(), "Request rejected");
    }

    response
}
