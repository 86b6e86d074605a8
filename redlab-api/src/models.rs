use serde::{Deserialize, Serialize};

pub const DEFAULT_SUBREDDIT: &str = "technology";
pub const DEFAULT_LIMIT: u32 = 5;

/// Opaque bearer credential returned by the token endpoint.
///
/// The server derives it from the request's user agent, so a token is only
/// valid for requests sent by the same client that obtained it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token(String);

impl Token {
    pub(crate) fn new(token: String) -> Self {
        Self(token)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Wire format of the token endpoint response.
#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    pub token: String,
}

/// Query parameters for the posts endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostQuery {
    pub subreddit: String,
    pub limit: u32,
}

impl PostQuery {
    pub fn new(subreddit: impl Into<String>, limit: u32) -> Self {
        Self {
            subreddit: subreddit.into(),
            limit,
        }
    }
}

impl Default for PostQuery {
    fn default() -> Self {
        Self::new(DEFAULT_SUBREDDIT, DEFAULT_LIMIT)
    }
}

/// Response body of the posts endpoint, kept as raw JSON.
///
/// The payload is treated as opaque: callers mostly want it rendered, not
/// traversed. [`PostsResponse::children`] exists for the one case where the
/// individual posts matter and the body happens to be a listing envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct PostsResponse(serde_json::Value);

impl PostsResponse {
    pub fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }

    pub fn into_value(self) -> serde_json::Value {
        self.0
    }

    /// Render the response as pretty-printed JSON with two-space indentation.
    pub fn pretty(&self) -> String {
        serde_json::to_string_pretty(&self.0).expect("JSON value serialization is infallible")
    }

    /// Extract the post objects from a listing-shaped body
    /// (`{"data": {"children": [{"data": ...}, ...]}}`).
    ///
    /// Returns `None` when the body has some other shape.
    pub fn children(&self) -> Option<Vec<&serde_json::Value>> {
        let children = self.0.get("data")?.get("children")?.as_array()?;
        Some(children.iter().filter_map(|child| child.get("data")).collect())
    }
}

impl From<serde_json::Value> for PostsResponse {
    fn from(value: serde_json::Value) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn post_query_defaults_to_technology_with_limit_5() {
        let query = PostQuery::default();
        assert_eq!(query.subreddit, "technology");
        assert_eq!(query.limit, 5);
    }

    #[test]
    fn pretty_uses_two_space_indentation() {
        let response = PostsResponse::new(json!({"data": [1, 2, 3]}));
        assert_eq!(
            response.pretty(),
            "{\n  \"data\": [\n    1,\n    2,\n    3\n  ]\n}"
        );
    }

    #[test]
    fn children_extracts_posts_from_listing_envelope() {
        let response = PostsResponse::new(json!({
            "data": {
                "children": [
                    {"data": {"id": "t1", "title": "Tech A"}},
                    {"data": {"id": "t2", "title": "Tech B"}},
                ]
            }
        }));
        let children = response.children().unwrap();
        assert_eq!(children.len(), 2);
        assert_eq!(children[0]["id"], "t1");
        assert_eq!(children[1]["title"], "Tech B");
    }

    #[test]
    fn children_is_none_for_non_listing_bodies() {
        assert!(PostsResponse::new(json!({"data": [1, 2, 3]})).children().is_none());
        assert!(PostsResponse::new(json!("plain string")).children().is_none());
        assert!(PostsResponse::new(json!({"data": {"children": 7}})).children().is_none());
    }

    #[test]
    fn children_skips_malformed_entries() {
        let response = PostsResponse::new(json!({
            "data": {
                "children": [
                    {"data": {"id": "t1"}},
                    {"kind": "t3"},
                ]
            }
        }));
        let children = response.children().unwrap();
        assert_eq!(children.len(), 1);
    }
}
