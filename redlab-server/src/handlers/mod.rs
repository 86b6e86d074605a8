mod posts;
mod token;

pub use posts::list_posts;
pub use token::issue_token;

use crate::models::HealthResponse;
use axum::Json;

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
