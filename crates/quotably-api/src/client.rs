// Hand-crafted async HTTP client for the Quotable content API.
//
// All request URLs are produced by `RequestConfig::build_url`, so the
// query-string conventions (literal `|` / `,` separators, falsy-value
// skipping) live in one place.

use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::Error;
use crate::request::{AuthorQuery, QuoteQuery, RandomQuery, RequestConfig, TagQuery};
use crate::transport::TransportConfig;
use crate::types::{Author, ListPage, Quote, Tag};

// ── Error response shape from the API ────────────────────────────────

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct ErrorResponse {
    #[serde(default)]
    status_code: Option<u16>,
    #[serde(default)]
    status_message: Option<String>,
}

// ── Client ───────────────────────────────────────────────────────────

/// Async client for the Quotable content API.
///
/// Read-only JSON over HTTPS; no authentication. The base URL is
/// injected at construction, so nothing here is global state.
pub struct QuotableClient {
    http: reqwest::Client,
    base_url: Url,
}

impl QuotableClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build a client with default transport settings.
    pub fn new(base_url: &str) -> Result<Self, Error> {
        Self::with_transport(base_url, &TransportConfig::default())
    }

    /// Build a client with explicit transport settings.
    pub fn with_transport(base_url: &str, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self {
            http,
            base_url: Self::normalize_base_url(base_url)?,
        })
    }

    /// Wrap an existing `reqwest::Client`.
    pub fn from_reqwest(base_url: &str, http: reqwest::Client) -> Result<Self, Error> {
        Ok(Self {
            http,
            base_url: Self::normalize_base_url(base_url)?,
        })
    }

    /// Parse and normalize the base URL (no trailing slash in the path).
    fn normalize_base_url(raw: &str) -> Result<Url, Error> {
        let mut url = Url::parse(raw)?;
        let path = url.path().trim_end_matches('/').to_owned();
        url.set_path(&path);
        Ok(url)
    }

    /// The normalized base URL this client requests against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── Request plumbing ─────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, config: &RequestConfig) -> Result<T, Error> {
        let url = Url::parse(&config.build_url(&self.base_url))?;
        debug!("GET {url}");

        let resp = self.http.get(url).send().await?;
        Self::handle_response(resp).await
    }

    async fn handle_response<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, Error> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            serde_json::from_str(&body).map_err(|e| {
                // Truncate by chars, not bytes: a byte slice could land
                // inside a multi-byte character and panic.
                let preview: String = body.chars().take(200).collect();
                Error::Deserialization {
                    message: format!("{e} (body preview: {preview:?})"),
                    body,
                }
            })
        } else {
            Err(Self::parse_error(status, resp).await)
        }
    }

    async fn parse_error(status: reqwest::StatusCode, resp: reqwest::Response) -> Error {
        let raw = resp.text().await.unwrap_or_default();

        if let Ok(err) = serde_json::from_str::<ErrorResponse>(&raw) {
            if err.status_code.is_some() || err.status_message.is_some() {
                return Error::Api {
                    status: err.status_code.unwrap_or_else(|| status.as_u16()),
                    message: err.status_message.unwrap_or_else(|| status.to_string()),
                };
            }
        }

        Error::Api {
            status: status.as_u16(),
            message: if raw.is_empty() {
                status.to_string()
            } else {
                raw
            },
        }
    }

    // ━━ Public API ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    // ── Quotes ───────────────────────────────────────────────────────

    /// List quotes matching `query` (one page).
    pub async fn list_quotes(&self, query: &QuoteQuery) -> Result<ListPage<Quote>, Error> {
        self.get(&RequestConfig::Quotes(query.clone())).await
    }

    /// Fetch a single quote by id.
    pub async fn get_quote(&self, id: &str) -> Result<Quote, Error> {
        self.get(&RequestConfig::Quotes(QuoteQuery {
            id: Some(id.to_owned()),
            ..QuoteQuery::default()
        }))
        .await
    }

    /// Fetch one random quote matching `query`.
    pub async fn random_quote(&self, query: &RandomQuery) -> Result<Quote, Error> {
        self.get(&RequestConfig::Random(query.clone())).await
    }

    // ── Authors ──────────────────────────────────────────────────────

    /// List authors matching `query` (one page).
    pub async fn list_authors(&self, query: &AuthorQuery) -> Result<ListPage<Author>, Error> {
        self.get(&RequestConfig::Authors(query.clone())).await
    }

    /// Fetch a single author by id.
    pub async fn get_author(&self, id: &str) -> Result<Author, Error> {
        self.get(&RequestConfig::Authors(AuthorQuery {
            id: Some(id.to_owned()),
            ..AuthorQuery::default()
        }))
        .await
    }

    /// Collect every page of an author query into a single `Vec`.
    ///
    /// Starts from the page in `query` (or page 1) and walks forward
    /// until the reported `totalPages` is reached or a page comes back
    /// empty.
    pub async fn paginate_authors(&self, query: &AuthorQuery) -> Result<Vec<Author>, Error> {
        let mut all = Vec::new();
        let mut page = query.page.unwrap_or(1).max(1);

        loop {
            let current = self
                .list_authors(&AuthorQuery {
                    page: Some(page),
                    ..query.clone()
                })
                .await?;

            let received = current.results.len();
            all.extend(current.results);

            if received == 0 || page >= current.total_pages {
                break;
            }
            page += 1;
        }

        Ok(all)
    }

    // ── Tags ─────────────────────────────────────────────────────────

    /// List all tags. The endpoint returns a bare array, not a page.
    pub async fn list_tags(&self, query: &TagQuery) -> Result<Vec<Tag>, Error> {
        self.get(&RequestConfig::Tags(query.clone())).await
    }
}
