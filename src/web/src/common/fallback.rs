use crate::ApiError;
use axum::http::Uri;
use axum::response::IntoResponse;

pub async fn not_found_handler(uri: Uri) -> impl IntoResponse {
    ApiError::NotFound(format!("No route for {}", uri.path()))
}
