use redlab_api::{ApiError, Client, PostQuery, PostsResponse};

/// Output format for one-shot mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Pretty-printed response body, exactly what the TUI shows on success.
    Json,
    /// One compact JSON object per post, for line-based tooling.
    Jsonl,
}

/// Run one full flow and render the result for stdout.
pub async fn run_once(
    client: &Client,
    query: &PostQuery,
    format: OutputFormat,
) -> Result<String, ApiError> {
    let response = client.fetch_flow(query).await?;
    Ok(render_output(&response, format))
}

fn render_output(response: &PostsResponse, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => response.pretty(),
        OutputFormat::Jsonl => match response.children() {
            Some(children) => children
                .iter()
                .map(|child| child.to_string())
                .collect::<Vec<_>>()
                .join("\n"),
            // Not a listing; emit the whole body as a single line.
            None => response.as_value().to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn listing() -> PostsResponse {
        PostsResponse::new(json!({
            "data": {
                "children": [
                    {"data": {"id": "t1", "title": "Tech A", "subreddit": "technology"}},
                    {"data": {"id": "t2", "title": "Tech B", "subreddit": "technology"}},
                ]
            }
        }))
    }

    #[test]
    fn json_format_pretty_prints_the_whole_body() {
        let rendered = render_output(&PostsResponse::new(json!({"data": [1, 2, 3]})), OutputFormat::Json);
        assert_eq!(rendered, "{\n  \"data\": [\n    1,\n    2,\n    3\n  ]\n}");
    }

    #[test]
    fn jsonl_format_emits_one_compact_line_per_post() {
        let rendered = render_output(&listing(), OutputFormat::Jsonl);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 2);
        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["id"], "t1");
        assert!(!lines[0].contains('\n'));
    }

    #[test]
    fn jsonl_format_falls_back_to_the_raw_body_for_non_listings() {
        let rendered = render_output(&PostsResponse::new(json!({"data": [1, 2]})), OutputFormat::Jsonl);
        assert_eq!(rendered, "{\"data\":[1,2]}");
    }

    #[test]
    fn jsonl_format_renders_empty_listings_as_nothing() {
        let rendered = render_output(
            &PostsResponse::new(json!({"data": {"children": []}})),
            OutputFormat::Jsonl,
        );
        assert_eq!(rendered, "");
    }
}
