// ── Browse orchestrator ──
//
// Owns the API client and the session state, and drives the
// fetch -> ingest cycle: filter or pagination events rebuild the quotes
// request, and every fetched page warms the author cache with the
// authors it references.
//
// State is committed only after all fetches for an event succeed, so a
// failed refresh leaves the previous state fully intact and the error
// surfaces to the caller.

use tracing::{debug, info};

use quotably_api::{QuotableClient, TagQuery};

use crate::error::CoreError;
use crate::session::BrowseState;

/// Async driver for a quote-browsing session.
///
/// Takes `&mut self` for every state-changing operation, so there is
/// at most one in-flight request per triggering event and callers own
/// the synchronization.
pub struct QuoteBrowser {
    client: QuotableClient,
    state: BrowseState,
}

impl QuoteBrowser {
    pub fn new(client: QuotableClient) -> Self {
        Self {
            client,
            state: BrowseState::new(),
        }
    }

    /// The current session state.
    pub fn state(&self) -> &BrowseState {
        &self.state
    }

    /// Load the tag list and the first page of quotes.
    pub async fn init(&mut self) -> Result<(), CoreError> {
        self.load_tags().await?;
        self.refresh().await
    }

    /// Fetch the full tag list.
    pub async fn load_tags(&mut self) -> Result<(), CoreError> {
        let tags = self.client.list_tags(&TagQuery::default()).await?;
        debug!(count = tags.len(), "loaded tags");
        self.state.apply_tags(tags);
        Ok(())
    }

    /// Re-fetch quotes for the current filters and page.
    pub async fn refresh(&mut self) -> Result<(), CoreError> {
        let next = self.state.clone();
        self.commit_refresh(next).await
    }

    /// Toggle an author-name filter and re-fetch.
    pub async fn toggle_author(&mut self, name: &str) -> Result<(), CoreError> {
        let mut next = self.state.clone();
        next.toggle_author(name);
        info!(filter = name, "toggled author filter");
        self.commit_refresh(next).await
    }

    /// Toggle a tag-name filter and re-fetch.
    pub async fn toggle_tag(&mut self, name: &str) -> Result<(), CoreError> {
        let mut next = self.state.clone();
        next.toggle_tag(name);
        info!(filter = name, "toggled tag filter");
        self.commit_refresh(next).await
    }

    /// Jump to a page of the current result set and re-fetch.
    pub async fn set_page(&mut self, page: u32) -> Result<(), CoreError> {
        let mut next = self.state.clone();
        next.set_page(page);
        self.commit_refresh(next).await
    }

    /// Fetch against `next`, warm the author cache for the fetched
    /// page, and commit. On any failure `self.state` is untouched.
    async fn commit_refresh(&mut self, mut next: BrowseState) -> Result<(), CoreError> {
        let page = self.client.list_quotes(&next.quotes_query()).await?;
        debug!(
            count = page.results.len(),
            page = page.page,
            total_pages = page.total_pages,
            "fetched quotes"
        );
        next.apply_quotes(page);

        if let Some(authors_query) = next.authors_query() {
            let authors = self.client.paginate_authors(&authors_query).await?;
            debug!(count = authors.len(), "fetched authors for cache");
            next.apply_authors(authors);
        }

        self.state = next;
        Ok(())
    }
}
