use std::time::Duration;

use async_trait::async_trait;
use reqwest::{StatusCode, Url};

use super::types::{SearchResponse, SummaryPage, SummaryResolution};
use super::{ResolverError, SummaryResolver};
use crate::config::{self, AppConfig};

/// Encyclopedia client: page summary by title, full-text search fallback.
pub struct WikipediaClient {
    summary_base: Url,
    search_url: Url,
    client: reqwest::Client,
    timeout_secs: u64,
}

impl WikipediaClient {
    /// Create a client for the given summary and search endpoints.
    ///
    /// Every request is bounded by `timeout_secs`.
    pub fn new(summary_base: &str, search_url: &str, timeout_secs: u64) -> Result<Self, ResolverError> {
        let summary_base = parse_endpoint(summary_base)?;
        let search_url = parse_endpoint(search_url)?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(config::user_agent())
            .build()
            .map_err(|e| ResolverError::HttpClient(e.to_string()))?;

        Ok(Self {
            summary_base,
            search_url,
            client,
            timeout_secs,
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, ResolverError> {
        Self::new(&config.summary_url, &config.search_url, config.http_timeout_secs)
    }

    /// Summary endpoint URL for a title, with the title as one encoded path segment.
    pub fn summary_url(&self, title: &str) -> Url {
        let mut url = self.summary_base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(title);
        }
        url
    }

    /// Direct lookup, then search-corrected lookup when the title is unknown.
    ///
    /// `Ok(None)` means nothing was found; errors are network or protocol
    /// failures. The search step only runs after the direct lookup settles.
    pub async fn lookup(&self, query: &str) -> Result<Option<SummaryResolution>, ResolverError> {
        if let Some(page) = self.fetch_summary(query).await? {
            return Ok(Some(page.into_resolution(query)));
        }

        tracing::debug!(query, "No summary page for query, falling back to search");
        let Some(corrected) = self.search_top_title(query).await? else {
            tracing::debug!(query, "Search returned no results");
            return Ok(None);
        };

        tracing::debug!(query, corrected = %corrected, "Retrying summary with search result");
        Ok(self
            .fetch_summary(&corrected)
            .await?
            .map(|page| page.into_resolution(&corrected)))
    }

    async fn fetch_summary(&self, title: &str) -> Result<Option<SummaryPage>, ResolverError> {
        let url = self.summary_url(title);

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| self.request_error(e))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(ResolverError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let page: SummaryPage = response
            .json()
            .await
            .map_err(|e| ResolverError::ResponseParsing(e.to_string()))?;

        Ok(Some(page))
    }

    async fn search_top_title(&self, query: &str) -> Result<Option<String>, ResolverError> {
        let response = self
            .client
            .get(self.search_url.clone())
            .query(&[
                ("action", "query"),
                ("list", "search"),
                ("srsearch", query),
                ("format", "json"),
                ("origin", "*"),
            ])
            .send()
            .await
            .map_err(|e| self.request_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ResolverError::Status {
                status: status.as_u16(),
                url: self.search_url.to_string(),
            });
        }

        let parsed: SearchResponse = response
            .json()
            .await
            .map_err(|e| ResolverError::ResponseParsing(e.to_string()))?;

        Ok(parsed.top_title())
    }

    fn request_error(&self, e: reqwest::Error) -> ResolverError {
        if e.is_timeout() {
            ResolverError::Timeout(self.timeout_secs)
        } else if e.is_connect() {
            ResolverError::Connection(self.summary_base.origin().ascii_serialization())
        } else {
            ResolverError::HttpClient(e.to_string())
        }
    }
}

#[async_trait]
impl SummaryResolver for WikipediaClient {
    async fn resolve(&self, query: &str) -> SummaryResolution {
        match self.lookup(query).await {
            Ok(Some(resolution)) => resolution,
            Ok(None) => SummaryResolution::unavailable(query),
            Err(e) => {
                tracing::warn!(error = %e, query, "Summary lookup failed, continuing without it");
                SummaryResolution::unavailable(query)
            }
        }
    }
}

fn parse_endpoint(raw: &str) -> Result<Url, ResolverError> {
    let url = Url::parse(raw.trim()).map_err(|e| ResolverError::InvalidUrl(format!("{raw}: {e}")))?;
    if url.cannot_be_a_base() {
        return Err(ResolverError::InvalidUrl(raw.to_string()));
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::net::SocketAddr;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use axum::extract::{Path, Query, State};
    use axum::http::StatusCode as AxumStatus;
    use axum::response::{IntoResponse, Response};
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::json;

    use super::*;

    #[derive(Clone, Default)]
    struct StubCounters {
        summary_calls: Arc<AtomicUsize>,
        search_calls: Arc<AtomicUsize>,
    }

    async fn stub_summary(
        State(counters): State<StubCounters>,
        Path(title): Path<String>,
    ) -> Response {
        counters.summary_calls.fetch_add(1, Ordering::SeqCst);
        match title.as_str() {
            "Influenza" => Json(json!({
                "title": "Influenza",
                "extract": "Influenza is an infectious disease caused by influenza viruses.",
                "thumbnail": { "source": "https://img/thumb.png", "original": "https://img/full.png" }
            }))
            .into_response(),
            "Common cold" => Json(json!({
                "title": "Common cold",
                "extract": "The common cold is a viral infection of the upper respiratory tract.",
                "thumbnail": { "source": "https://img/cold-thumb.png" }
            }))
            .into_response(),
            "Hepatitis B" => Json(json!({
                "title": "Hepatitis B",
                "extract": "Hepatitis B is an infectious disease affecting the liver."
            }))
            .into_response(),
            "Server trouble" => AxumStatus::INTERNAL_SERVER_ERROR.into_response(),
            "Garbled" => (AxumStatus::OK, "not json").into_response(),
            "Slow lane" => {
                tokio::time::sleep(Duration::from_secs(3)).await;
                AxumStatus::NOT_FOUND.into_response()
            }
            _ => AxumStatus::NOT_FOUND.into_response(),
        }
    }

    async fn stub_search(
        State(counters): State<StubCounters>,
        Query(params): Query<HashMap<String, String>>,
    ) -> Response {
        counters.search_calls.fetch_add(1, Ordering::SeqCst);
        let hits = match params.get("srsearch").map(String::as_str) {
            Some("runny nose") => json!([{ "title": "Common cold" }, { "title": "Rhinitis" }]),
            Some("ghost page") => json!([{ "title": "Missing article" }]),
            _ => json!([]),
        };
        Json(json!({ "query": { "search": hits } })).into_response()
    }

    async fn spawn_stub() -> (SocketAddr, StubCounters) {
        let counters = StubCounters::default();
        let app = Router::new()
            .route("/page/summary/:title", get(stub_summary))
            .route("/w/api.php", get(stub_search))
            .with_state(counters.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        (addr, counters)
    }

    fn client_for(addr: SocketAddr) -> WikipediaClient {
        WikipediaClient::new(
            &format!("http://{addr}/page/summary"),
            &format!("http://{addr}/w/api.php"),
            5,
        )
        .unwrap()
    }

    #[test]
    fn summary_url_encodes_title_as_one_segment() {
        let client = WikipediaClient::new(
            "https://en.wikipedia.org/api/rest_v1/page/summary/",
            "https://en.wikipedia.org/w/api.php",
            5,
        )
        .unwrap();
        assert_eq!(
            client.summary_url("Hepatitis B").as_str(),
            "https://en.wikipedia.org/api/rest_v1/page/summary/Hepatitis%20B"
        );
        assert!(client.summary_url("AC/DC").as_str().ends_with("/summary/AC%2FDC"));
    }

    #[test]
    fn rejects_invalid_endpoints() {
        assert!(matches!(
            WikipediaClient::new("not a url", "https://example.org/w/api.php", 5),
            Err(ResolverError::InvalidUrl(_))
        ));
        assert!(matches!(
            WikipediaClient::new("mailto:someone@example.org", "https://example.org/w/api.php", 5),
            Err(ResolverError::InvalidUrl(_))
        ));
    }

    #[tokio::test]
    async fn direct_hit_returns_page_and_skips_search() {
        let (addr, counters) = spawn_stub().await;
        let resolution = client_for(addr).resolve("Influenza").await;

        assert_eq!(resolution.title, "Influenza");
        assert!(resolution.summary.starts_with("Influenza is an infectious disease"));
        assert_eq!(resolution.image_url.as_deref(), Some("https://img/full.png"));
        assert_eq!(counters.search_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn titles_with_spaces_round_trip() {
        let (addr, _) = spawn_stub().await;
        let resolution = client_for(addr).resolve("Hepatitis B").await;
        assert_eq!(resolution.title, "Hepatitis B");
        assert!(resolution.has_summary());
    }

    #[tokio::test]
    async fn not_found_falls_back_to_search_result() {
        let (addr, counters) = spawn_stub().await;
        let resolution = client_for(addr).resolve("runny nose").await;

        assert_eq!(resolution.title, "Common cold");
        assert!(resolution.summary.contains("upper respiratory tract"));
        assert_eq!(resolution.image_url.as_deref(), Some("https://img/cold-thumb.png"));
        assert_eq!(counters.search_calls.load(Ordering::SeqCst), 1);
        assert_eq!(counters.summary_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn empty_search_degrades_to_unavailable() {
        let (addr, counters) = spawn_stub().await;
        let resolution = client_for(addr).resolve("qwertyuiop").await;

        assert_eq!(resolution, SummaryResolution::unavailable("qwertyuiop"));
        assert_eq!(counters.summary_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn corrected_title_not_found_degrades_to_unavailable() {
        let (addr, _) = spawn_stub().await;
        let resolution = client_for(addr).resolve("ghost page").await;
        assert_eq!(resolution, SummaryResolution::unavailable("ghost page"));
    }

    #[tokio::test]
    async fn server_error_is_a_hard_failure_without_search() {
        let (addr, counters) = spawn_stub().await;
        let client = client_for(addr);

        let err = client.lookup("Server trouble").await.unwrap_err();
        assert!(matches!(err, ResolverError::Status { status: 500, .. }));

        let resolution = client.resolve("Server trouble").await;
        assert_eq!(resolution, SummaryResolution::unavailable("Server trouble"));
        assert_eq!(counters.search_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn malformed_body_degrades_to_unavailable() {
        let (addr, _) = spawn_stub().await;
        let client = client_for(addr);
        assert!(matches!(
            client.lookup("Garbled").await,
            Err(ResolverError::ResponseParsing(_))
        ));
        assert!(!client.resolve("Garbled").await.has_summary());
    }

    #[tokio::test]
    async fn unreachable_service_degrades_to_unavailable() {
        // Bind and immediately drop a listener to obtain a closed port.
        let addr = {
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
            listener.local_addr().unwrap()
        };
        let client = client_for(addr);

        assert!(client.lookup("Influenza").await.is_err());
        assert_eq!(
            client.resolve("Influenza").await,
            SummaryResolution::unavailable("Influenza")
        );
    }

    #[tokio::test]
    async fn hung_endpoint_times_out_and_degrades() {
        let (addr, counters) = spawn_stub().await;
        let client = WikipediaClient::new(
            &format!("http://{addr}/page/summary"),
            &format!("http://{addr}/w/api.php"),
            1,
        )
        .unwrap();

        assert!(matches!(
            client.lookup("Slow lane").await,
            Err(ResolverError::Timeout(1))
        ));
        assert_eq!(
            client.resolve("Slow lane").await,
            SummaryResolution::unavailable("Slow lane")
        );
        // A timeout is a failure, not "not found": no search fallback.
        assert_eq!(counters.search_calls.load(Ordering::SeqCst), 0);
    }
}
