//! SearXNG search client

use super::error::SearchError;
use super::models::{SearchRequest, SearchResponse};
use crate::config::Settings;
use crate::network::build_client;
use reqwest::{Client, StatusCode};
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};
use url::Url;

/// Characters of an error body kept in the log
const LOGGED_BODY_CHARS: usize = 200;

/// Client for a single SearXNG instance.
///
/// Owns the HTTP session. The session is built lazily on first use or by
/// [`SearchClient::startup`], released by [`SearchClient::shutdown`], and
/// rebuilt transparently if the client is used again afterwards.
pub struct SearchClient {
    settings: Settings,
    search_url: Url,
    session: Mutex<Option<Client>>,
}

impl SearchClient {
    /// Create a client without opening a session
    pub fn new(settings: Settings) -> anyhow::Result<Self> {
        let search_url = settings.search_url()?;
        Ok(Self {
            settings,
            search_url,
            session: Mutex::new(None),
        })
    }

    /// Settings the client was created with
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Endpoint queried by this client
    pub fn search_url(&self) -> &Url {
        &self.search_url
    }

    /// Open the session now instead of on first search
    pub async fn startup(&self) -> anyhow::Result<()> {
        self.session().await?;
        Ok(())
    }

    /// Release the session. Returns false if there was none.
    ///
    /// Requests already in flight hold their own handle to the pool and
    /// finish normally.
    pub async fn shutdown(&self) -> bool {
        let released = self.session.lock().await.take().is_some();
        if released {
            info!("SearXNG session closed");
        }
        released
    }

    /// Check if a session is currently open
    pub async fn is_active(&self) -> bool {
        self.session.lock().await.is_some()
    }

    /// Get the open session, creating it if needed
    async fn session(&self) -> anyhow::Result<Client> {
        let mut guard = self.session.lock().await;
        if let Some(client) = guard.as_ref() {
            return Ok(client.clone());
        }

        let client = build_client(&self.settings)?;
        info!(
            "SearXNG session opened, target instance: {}",
            self.settings.searxng_url
        );
        *guard = Some(client.clone());
        Ok(client)
    }

    /// Search with the configured defaults for anything not given.
    ///
    /// Never fails: every failure is reported through `SearchResponse::error`.
    pub async fn search(
        &self,
        query: &str,
        categories: Option<&str>,
        language: Option<&str>,
    ) -> SearchResponse {
        let request = SearchRequest::new(query, &self.settings)
            .with_categories(categories)
            .with_language(language);
        self.execute(&request).await
    }

    /// Run a prepared request, folding failures into the response
    pub async fn execute(&self, request: &SearchRequest) -> SearchResponse {
        match self.try_execute(request).await {
            Ok(response) => response,
            Err(err) => {
                match err {
                    SearchError::EmptyQuery => warn!("Rejected search: {}", err),
                    // Already logged with the response body
                    SearchError::AccessDenied | SearchError::Http(_) => {}
                    _ => error!("SearXNG search failed: {}", err),
                }
                SearchResponse::failed(request.query.clone(), &err)
            }
        }
    }

    /// Search, returning the typed failure instead of folding it
    pub async fn try_search(
        &self,
        query: &str,
        categories: Option<&str>,
        language: Option<&str>,
    ) -> Result<SearchResponse, SearchError> {
        let request = SearchRequest::new(query, &self.settings)
            .with_categories(categories)
            .with_language(language);
        self.try_execute(&request).await
    }

    /// Run a prepared request
    pub async fn try_execute(&self, request: &SearchRequest) -> Result<SearchResponse, SearchError> {
        if request.is_empty() {
            return Err(SearchError::EmptyQuery);
        }

        let client = self
            .session()
            .await
            .map_err(|e| SearchError::Transport(e.to_string()))?;

        let params = request.params();
        debug!("GET {} params={:?}", self.search_url, params);

        let response = client
            .get(self.search_url.clone())
            .query(&params[..])
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            let truncated: String = body.chars().take(LOGGED_BODY_CHARS).collect();
            error!("SearXNG search failed - status: {}", status.as_u16());
            error!("Request URL: {}", self.search_url);
            error!("Request params: {:?}", params);
            error!("Error response: {}...", truncated);
            return Err(SearchError::from_status(status.as_u16()));
        }

        let body = response.text().await?;
        let mut parsed: SearchResponse = serde_json::from_str(&body)?;
        if parsed.query.is_empty() {
            parsed.query = request.query.clone();
        }
        debug!(
            "SearXNG returned {} results for '{}'",
            parsed.results.len(),
            request.query
        );
        Ok(parsed)
    }
}
