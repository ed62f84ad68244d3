use serde::{Deserialize, Serialize};

/// Title, summary and optional image for a resolved query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResolution {
    pub title: String,
    pub summary: String,
    pub image_url: Option<String>,
}

impl SummaryResolution {
    /// Degraded result: no summary, titled with the original query.
    pub fn unavailable(query: &str) -> Self {
        Self {
            title: query.to_string(),
            summary: String::new(),
            image_url: None,
        }
    }

    pub fn has_summary(&self) -> bool {
        !self.summary.trim().is_empty()
    }
}

/// Response body from the page summary endpoint
#[derive(Debug, Deserialize)]
pub(crate) struct SummaryPage {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub extract: String,
    #[serde(default)]
    pub thumbnail: Option<Thumbnail>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Thumbnail {
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub original: Option<String>,
}

impl SummaryPage {
    /// Convert into a resolution. The full-size image wins over the thumbnail.
    pub fn into_resolution(self, requested_title: &str) -> SummaryResolution {
        let image_url = self
            .thumbnail
            .and_then(|t| t.original.or(t.source))
            .filter(|url| !url.is_empty());
        let title = if self.title.trim().is_empty() {
            requested_title.to_string()
        } else {
            self.title
        };
        SummaryResolution {
            title,
            summary: self.extract,
            image_url,
        }
    }
}

/// Response body from the full-text search endpoint
#[derive(Debug, Default, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    pub query: Option<SearchQuery>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct SearchQuery {
    #[serde(default)]
    pub search: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchHit {
    pub title: String,
}

impl SearchResponse {
    pub fn top_title(self) -> Option<String> {
        self.query?
            .search
            .into_iter()
            .next()
            .map(|hit| hit.title)
            .filter(|title| !title.trim().is_empty())
    }
}
