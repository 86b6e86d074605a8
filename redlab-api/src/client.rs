use std::time::Duration;

use reqwest::header::AUTHORIZATION;

use crate::error::ApiError;
use crate::models::{PostQuery, PostsResponse, Token, TokenResponse};
use crate::retry::{self, RetryPolicy};

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Client for the lab posts API.
///
/// Wraps the two-step flow the API requires: obtain a bearer token, then
/// fetch posts with it. Throttled responses are retried per the configured
/// [`RetryPolicy`].
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    retry_policy: RetryPolicy,
}

#[derive(Debug, Clone)]
pub struct ClientBuilder {
    base_url: String,
    user_agent: String,
    timeout: Duration,
    retry_policy: RetryPolicy,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: APP_USER_AGENT.to_string(),
            timeout: DEFAULT_TIMEOUT,
            retry_policy: RetryPolicy::default(),
        }
    }
}

impl ClientBuilder {
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// User agent sent with every request.
    ///
    /// Tokens are bound to the user agent server-side, so this must not
    /// change between the token and posts requests. The client sets it once
    /// at construction for exactly that reason.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn retry_policy(mut self, retry_policy: RetryPolicy) -> Self {
        self.retry_policy = retry_policy;
        self
    }

    pub fn build(self) -> Result<Client, ApiError> {
        let http = reqwest::Client::builder()
            .user_agent(&self.user_agent)
            .timeout(self.timeout)
            .build()?;
        Ok(Client {
            http,
            base_url: self.base_url.trim_end_matches('/').to_string(),
            retry_policy: self.retry_policy,
        })
    }
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Client for `base_url` with default settings.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        Self::builder().base_url(base_url).build()
    }

    /// POST `/api/token` and return the issued bearer token.
    ///
    /// Fails with [`ApiError::TokenAcquisition`] on any non-success status
    /// other than 429, which is retried first.
    pub async fn fetch_token(&self) -> Result<Token, ApiError> {
        let url = format!("{}/api/token", self.base_url);
        let response =
            retry::send_with_retry(|| self.http.post(&url), &self.retry_policy).await?;
        if !response.status().is_success() {
            tracing::debug!(status = %response.status(), "Token endpoint refused the request");
            return Err(ApiError::TokenAcquisition);
        }
        let body: TokenResponse = response.json().await?;
        Ok(Token::new(body.token))
    }

    /// GET `/api/posts` with the given bearer token and query.
    ///
    /// Fails with [`ApiError::PostsFetch`] on any non-success status other
    /// than 429, which is retried first.
    pub async fn fetch_posts(
        &self,
        token: &Token,
        query: &PostQuery,
    ) -> Result<PostsResponse, ApiError> {
        let url = format!("{}/api/posts", self.base_url);
        let response = retry::send_with_retry(
            || {
                self.http
                    .get(&url)
                    .query(query)
                    .header(AUTHORIZATION, format!("Bearer {}", token.as_str()))
            },
            &self.retry_policy,
        )
        .await?;
        if !response.status().is_success() {
            tracing::debug!(status = %response.status(), "Posts endpoint refused the request");
            return Err(ApiError::PostsFetch);
        }
        let body: serde_json::Value = response.json().await?;
        Ok(PostsResponse::new(body))
    }

    /// Run the full flow: fetch a token, then fetch posts with it.
    pub async fn fetch_flow(&self, query: &PostQuery) -> Result<PostsResponse, ApiError> {
        let token = self.fetch_token().await?;
        self.fetch_posts(&token, query).await
    }
}
