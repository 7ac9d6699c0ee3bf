use searxng_tool::plugins::{LlmTool, Plugin, SearxngPlugin, ToolRegistry, TOOL_NAME};
use searxng_tool::Settings;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn entries(text: &str) -> Vec<&str> {
    text.lines().filter(|l| l.contains(". **")).collect()
}

async fn plugin_with(template: ResponseTemplate, settings: Settings) -> (MockServer, SearxngPlugin) {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(template)
        .mount(&server)
        .await;

    let settings = Settings {
        searxng_url: server.uri(),
        ..settings
    };
    let plugin = SearxngPlugin::new(settings).unwrap();
    (server, plugin)
}

fn results_body(query: &str, n: usize, content: &str) -> serde_json::Value {
    let results: Vec<_> = (1..=n)
        .map(|i| {
            json!({
                "title": format!("Result {}", i),
                "url": format!("https://example.org/{}", i),
                "content": content
            })
        })
        .collect();
    json!({ "query": query, "results": results })
}

#[tokio::test]
async fn test_tool_renders_all_results_in_order() {
    let (_server, plugin) = plugin_with(
        ResponseTemplate::new(200).set_body_json(results_body("rust", 5, "snippet")),
        Settings::default(),
    )
    .await;

    let text = plugin.call(json!({"query": "rust"})).await.unwrap();
    let lines = entries(&text);

    assert_eq!(lines.len(), 5);
    for (i, line) in lines.iter().enumerate() {
        assert_eq!(*line, format!("{}. **Result {}**", i + 1, i + 1));
    }
}

#[tokio::test]
async fn test_tool_caps_results_at_max() {
    let (_server, plugin) = plugin_with(
        ResponseTemplate::new(200).set_body_json(results_body("rust", 20, "snippet")),
        Settings::default(),
    )
    .await;

    let text = plugin.call(json!({"query": "rust"})).await.unwrap();
    let lines = entries(&text);

    assert_eq!(lines.len(), 8);
    assert_eq!(lines[7], "8. **Result 8**");
}

#[tokio::test]
async fn test_tool_respects_configured_limits() {
    let settings = Settings {
        max_results: 2,
        max_content_length: 10,
        ..Settings::default()
    };
    let (_server, plugin) = plugin_with(
        ResponseTemplate::new(200).set_body_json(results_body("rust", 4, "abcdefghijklmnop")),
        settings,
    )
    .await;

    let text = plugin.call(json!({"query": "rust"})).await.unwrap();
    assert_eq!(entries(&text).len(), 2);
    assert!(text.contains("   abcdefg...\n"));
}

#[tokio::test]
async fn test_tool_truncates_long_content() {
    let long = "a".repeat(300);
    let (_server, plugin) = plugin_with(
        ResponseTemplate::new(200).set_body_json(results_body("rust", 1, &long)),
        Settings::default(),
    )
    .await;

    let text = plugin.call(json!({"query": "rust"})).await.unwrap();
    let content_line = text.lines().nth(3).unwrap();

    assert_eq!(content_line, format!("   {}...", "a".repeat(197)));
}

#[tokio::test]
async fn test_tool_reports_access_denied() {
    let (_server, plugin) = plugin_with(
        ResponseTemplate::new(403).set_body_string("blocked"),
        Settings::default(),
    )
    .await;

    let text = plugin.call(json!({"query": "rust"})).await.unwrap();
    assert!(text.starts_with("❌ Search failed: access denied"));
    assert!(entries(&text).is_empty());
}

#[tokio::test]
async fn test_tool_reports_no_results() {
    let (_server, plugin) = plugin_with(
        ResponseTemplate::new(200).set_body_json(json!({"query": "zzqx", "results": []})),
        Settings::default(),
    )
    .await;

    let text = plugin.call(json!({"query": "zzqx"})).await.unwrap();
    assert_eq!(text, "🔍 No results found for 'zzqx'");
}

#[tokio::test]
async fn test_tool_reports_timeout() {
    let settings = Settings {
        timeout: 0.2,
        ..Settings::default()
    };
    let (_server, plugin) = plugin_with(
        ResponseTemplate::new(200)
            .set_body_json(results_body("rust", 1, "x"))
            .set_delay(Duration::from_secs(3)),
        settings,
    )
    .await;

    let text = plugin.call(json!({"query": "<script>"})).await.unwrap();
    assert_eq!(text, "❌ Search failed: request timed out");
}

#[tokio::test]
async fn test_registry_round_trip_through_host() {
    let (_server, plugin) = plugin_with(
        ResponseTemplate::new(200).set_body_json(results_body("rust", 2, "snippet")),
        Settings::default(),
    )
    .await;
    let plugin = Arc::new(plugin);

    let mut registry = ToolRegistry::new();
    registry.register(plugin.clone());
    assert_eq!(registry.names(), vec![TOOL_NAME]);

    plugin.initialize().await.unwrap();
    let first = registry
        .call(TOOL_NAME, json!({"query": "rust"}))
        .await
        .unwrap();
    let second = registry
        .call(TOOL_NAME, json!({"query": "rust"}))
        .await
        .unwrap();
    plugin.terminate().await;

    assert_eq!(first, second);
    assert_eq!(entries(&first).len(), 2);
    assert!(!plugin.client().is_active().await);
}
