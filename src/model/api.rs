use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The response when an error occurs with an API request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// The response of the API root
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GreetingDto {
    pub message: String,
}
