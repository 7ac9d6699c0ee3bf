//! Plain text rendering of search responses

use crate::config::Settings;
use crate::search::{SearchResponse, SearchResult};

/// Marker appended to truncated content
const ELLIPSIS: &str = "...";

/// Title shown for results that have none
const UNTITLED: &str = "Untitled";

/// Renders a [`SearchResponse`] as readable text for an LLM or a terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultFormatter {
    /// Number of results rendered
    pub max_results: usize,
    /// Characters of content rendered per result, ellipsis included
    pub max_content_length: usize,
}

impl Default for ResultFormatter {
    fn default() -> Self {
        Self {
            max_results: 8,
            max_content_length: 200,
        }
    }
}

impl ResultFormatter {
    /// Content longer than `max_content_length` characters is cut to exactly
    /// that many, ellipsis included. Limits below 3 keep only part of the ellipsis.
    pub fn new(max_results: usize, max_content_length: usize) -> Self {
        Self {
            max_results,
            max_content_length,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.max_results, settings.max_content_length)
    }

    /// Render the response. An error wins over any results it carries.
    pub fn format(&self, response: &SearchResponse) -> String {
        if let Some(ref error) = response.error {
            return format!("❌ Search failed: {}", error);
        }

        if response.results.is_empty() {
            return format!("🔍 No results found for '{}'", response.query);
        }

        let mut text = format!("🔍 Search results: {}\n\n", response.query);
        for (i, result) in response.results.iter().take(self.max_results).enumerate() {
            self.write_entry(&mut text, i + 1, result);
        }

        text.trim().to_string()
    }

    fn write_entry(&self, text: &mut String, position: usize, result: &SearchResult) {
        let title = result.title.as_deref().unwrap_or(UNTITLED);
        let content = truncate(
            result.content.as_deref().unwrap_or_default().trim(),
            self.max_content_length,
        );

        text.push_str(&format!("{}. **{}**\n", position, title));
        if !content.is_empty() {
            text.push_str(&format!("   {}\n", content));
        }
        text.push_str(&format!("   🔗 {}\n\n", result.url));
    }
}

/// Render a response with explicit limits
pub fn format_results(
    response: &SearchResponse,
    max_results: usize,
    max_content_length: usize,
) -> String {
    ResultFormatter::new(max_results, max_content_length).format(response)
}

/// Cut `text` to at most `max` characters, the last three being the ellipsis
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    if max < ELLIPSIS.len() {
        return ELLIPSIS[..max].to_string();
    }
    let mut cut: String = text.chars().take(max.saturating_sub(ELLIPSIS.len())).collect();
    cut.push_str(ELLIPSIS);
    cut
}

#[cfg(test)]
mod tests {
    use super::*;

    fn results(n: usize) -> Vec<SearchResult> {
        (1..=n)
            .map(|i| {
                SearchResult::new(
                    format!("Title {}", i),
                    format!("https://example.org/{}", i),
                    format!("Content {}", i),
                )
            })
            .collect()
    }

    fn entry_count(text: &str) -> usize {
        text.lines().filter(|l| l.contains(". **")).count()
    }

    #[test]
    fn test_format_in_order() {
        let response = SearchResponse::with_results("rust", results(3));
        let text = ResultFormatter::default().format(&response);

        assert!(text.starts_with("🔍 Search results: rust"));
        assert_eq!(entry_count(&text), 3);
        let first = text.find("1. **Title 1**").unwrap();
        let second = text.find("2. **Title 2**").unwrap();
        let third = text.find("3. **Title 3**").unwrap();
        assert!(first < second && second < third);
        assert!(text.contains("   Content 2\n   🔗 https://example.org/2"));
        assert!(text.ends_with("🔗 https://example.org/3"));
    }

    #[test]
    fn test_format_limits_results() {
        let response = SearchResponse::with_results("rust", results(20));
        let text = ResultFormatter::default().format(&response);

        assert_eq!(entry_count(&text), 8);
        assert!(text.contains("8. **Title 8**"));
        assert!(!text.contains("Title 9"));
    }

    #[test]
    fn test_entries_separated_by_blank_line() {
        let response = SearchResponse::with_results("rust", results(2));
        let text = format_results(&response, 8, 200);
        assert!(text.contains("🔗 https://example.org/1\n\n2. **Title 2**"));
    }

    #[test]
    fn test_content_truncation() {
        let long = "x".repeat(250);
        let exact = "y".repeat(200);
        let response = SearchResponse::with_results(
            "rust",
            vec![
                SearchResult::new("Long", "https://a.example", long),
                SearchResult::new("Exact", "https://b.example", exact.clone()),
            ],
        );
        let text = ResultFormatter::default().format(&response);

        let expected = format!("   {}...\n", "x".repeat(197));
        assert!(text.contains(&expected));
        assert!(text.contains(&format!("   {}\n", exact)));
    }

    #[test]
    fn test_truncation_counts_characters() {
        let content = "搜".repeat(10);
        assert_eq!(truncate(&content, 5), "搜搜...");
        assert_eq!(truncate(&content, 10), content);
        assert_eq!(truncate("abcdef", 3), "...");
    }

    #[test]
    fn test_truncation_never_exceeds_tiny_limits() {
        assert_eq!(truncate("abcdef", 2), "..");
        assert_eq!(truncate("abcdef", 0), "");
        assert_eq!(truncate("ab", 2), "ab");

        let response = SearchResponse::with_results(
            "rust",
            vec![SearchResult::new("Title", "https://example.org", "abcdef")],
        );
        let text = format_results(&response, 8, 1);
        assert!(text.contains("   .\n   🔗 https://example.org"));
    }

    #[test]
    fn test_missing_fields_use_placeholders() {
        let response = SearchResponse::with_results(
            "rust",
            vec![SearchResult {
                title: None,
                url: "https://example.org".to_string(),
                content: None,
            }],
        );
        let text = ResultFormatter::default().format(&response);
        assert_eq!(
            text,
            "🔍 Search results: rust\n\n1. **Untitled**\n   🔗 https://example.org"
        );
    }

    #[test]
    fn test_error_takes_precedence() {
        let mut response = SearchResponse::with_results("rust", results(2));
        response.error = Some("HTTP 500".to_string());
        let text = ResultFormatter::default().format(&response);

        assert_eq!(text, "❌ Search failed: HTTP 500");
        assert_eq!(entry_count(&text), 0);
    }

    #[test]
    fn test_no_results() {
        let response = SearchResponse::with_results("obscure query", vec![]);
        let text = ResultFormatter::default().format(&response);
        assert_eq!(text, "🔍 No results found for 'obscure query'");
    }

    #[test]
    fn test_format_is_idempotent() {
        let response = SearchResponse::with_results("rust", results(5));
        let formatter = ResultFormatter::default();
        assert_eq!(formatter.format(&response), formatter.format(&response));
    }
}
