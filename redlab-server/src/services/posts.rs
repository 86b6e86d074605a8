use serde_json::{json, Value};

use crate::models::Post;

pub const DEFAULT_SUBREDDIT: &str = "technology";
pub const DEFAULT_LIMIT: usize = 25;
const MAX_LIMIT: usize = 100;

/// In-memory post catalog serving a fixed dataset.
pub struct PostStore {
    posts: Vec<Post>,
}

impl PostStore {
    pub fn new() -> Self {
        let posts = ["Tech A", "Tech B", "Tech C", "Tech D", "Tech E"]
            .iter()
            .enumerate()
            .map(|(index, title)| Post {
                id: format!("t{}", index + 1),
                title: (*title).to_string(),
                subreddit: "technology".to_string(),
            })
            .collect();
        Self { posts }
    }

    /// Listing envelope for `subreddit` with at most `limit` posts.
    ///
    /// `limit` is clamped into `1..=100`. The shape mirrors a reddit listing:
    /// `{"data": {"children": [{"data": <post>}, ...]}}`.
    pub fn listing(&self, subreddit: &str, limit: usize) -> Value {
        let limit = limit.clamp(1, MAX_LIMIT);
        let children: Vec<Value> = self
            .posts
            .iter()
            .filter(|post| post.subreddit == subreddit)
            .take(limit)
            .map(|post| json!({ "data": post }))
            .collect();
        json!({ "data": { "children": children } })
    }
}

impl Default for PostStore {
    fn default() -> Self {
        Self::new()
    }
}
