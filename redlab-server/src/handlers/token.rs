use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, State},
    http::{header::USER_AGENT, HeaderMap},
    Json,
};

use crate::{error::ServerError, models::TokenResponse, AppState};

pub async fn issue_token(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
) -> Result<Json<TokenResponse>, ServerError> {
    let client_key = addr.ip().to_string();
    let span = tracing::info_span!("issue_token", client = %client_key);
    let _enter = span.enter();

    state
        .rate_limiter
        .check(&client_key)
        .map_err(|retry_after| ServerError::RateLimited { retry_after })?;

    let user_agent = headers
        .get(USER_AGENT)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("");
    let token = state.token_issuer.issue(user_agent);
    tracing::info!(user_agent, "Issued token");

    Ok(Json(TokenResponse { token }))
}
