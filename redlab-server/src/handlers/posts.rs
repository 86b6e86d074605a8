use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, Query, State},
    http::{
        header::{AUTHORIZATION, USER_AGENT},
        HeaderMap,
    },
    Json,
};

use crate::{
    error::ServerError,
    models::PostsParams,
    services::posts::{DEFAULT_LIMIT, DEFAULT_SUBREDDIT},
    AppState,
};

pub async fn list_posts(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    Query(params): Query<PostsParams>,
    headers: HeaderMap,
) -> Result<Json<serde_json::Value>, ServerError> {
    let client_key = addr.ip().to_string();
    let span = tracing::info_span!("list_posts", client = %client_key);
    let _enter = span.enter();

    // Throttling is decided before auth, so a hammering client sees 429
    // rather than 401 even without credentials.
    state
        .rate_limiter
        .check(&client_key)
        .map_err(|retry_after| ServerError::RateLimited { retry_after })?;

    let user_agent = headers
        .get(USER_AGENT)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("");
    let token = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or(ServerError::MissingToken)?;
    if !state.token_issuer.verify(user_agent, token) {
        tracing::warn!("Rejected posts request with invalid token");
        return Err(ServerError::InvalidToken);
    }

    let subreddit = params.subreddit.as_deref().unwrap_or(DEFAULT_SUBREDDIT);
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT);
    tracing::debug!(subreddit, limit, "Listing posts");

    Ok(Json(state.post_store.listing(subreddit, limit)))
}
