use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub subreddit: String,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Query parameters accepted by the posts endpoint.
#[derive(Debug, Deserialize)]
pub struct PostsParams {
    pub subreddit: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
