use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::model::api::GreetingDto;

/// OpenAPI tag of the root endpoint
pub static ROOT_TAG: &str = "Root";

/// Greet the caller, used as a liveness check
#[utoipa::path(
    get,
    path = "/",
    tag = ROOT_TAG,
    responses(
        (status = 200, description = "Service is up", body = GreetingDto),
    ),
)]
pub async fn hello() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(GreetingDto {
            message: "Hello ninjas!".to_string(),
        }),
    )
}
