pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;

pub use config::Configuration;
pub use error::ServerError;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use services::{PostStore, RateLimiter, TokenIssuer};

#[derive(Clone)]
pub struct AppState {
    pub rate_limiter: Arc<RateLimiter>,
    pub token_issuer: Arc<TokenIssuer>,
    pub post_store: Arc<PostStore>,
}

impl AppState {
    pub fn new(configuration: &Configuration) -> Self {
        Self {
            rate_limiter: Arc::new(RateLimiter::new(
                configuration.rate_limit.limit,
                Duration::from_secs(configuration.rate_limit.window_seconds),
            )),
            token_issuer: Arc::new(TokenIssuer::new(configuration.auth.secret.clone())),
            post_store: Arc::new(PostStore::new()),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/api/token", post(handlers::issue_token))
        .route("/api/posts", get(handlers::list_posts))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
