// ── Browse session state ──
//
// The single logical owner of filter state, pagination, the author
// cache and the currently displayed data. Everything here is
// synchronous and side-effect-free: it builds request descriptions and
// ingests fetched payloads, but never performs I/O itself.

use quotably_api::{Author, AuthorQuery, ListPage, Quote, QuoteQuery, Tag};

use crate::authors::AuthorCache;
use crate::filters::{FilterJoin, FilterSet};

/// UI-session state for browsing quotes.
///
/// Created empty at session start and discarded with the session; no
/// persistence. Callers apply updates atomically through `&mut self`.
#[derive(Debug, Clone)]
pub struct BrowseState {
    author_filters: FilterSet,
    tag_filters: FilterSet,
    /// Requested page, 1-based. Zero is never stored.
    page: u32,
    total_pages: u32,
    quotes: Vec<Quote>,
    tags: Vec<Tag>,
    authors: AuthorCache,
}

impl Default for BrowseState {
    fn default() -> Self {
        Self::new()
    }
}

impl BrowseState {
    pub fn new() -> Self {
        Self {
            author_filters: FilterSet::new(),
            tag_filters: FilterSet::new(),
            page: 1,
            total_pages: 0,
            quotes: Vec::new(),
            tags: Vec::new(),
            authors: AuthorCache::new(),
        }
    }

    // ── Accessors ────────────────────────────────────────────────────

    pub fn author_filters(&self) -> &FilterSet {
        &self.author_filters
    }

    pub fn tag_filters(&self) -> &FilterSet {
        &self.tag_filters
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    pub fn authors(&self) -> &AuthorCache {
        &self.authors
    }

    /// Cached author record for a displayed quote, if fetched yet.
    pub fn author_of(&self, quote: &Quote) -> Option<&Author> {
        self.authors.get(&quote.author_slug)
    }

    // ── Filter / pagination events ───────────────────────────────────

    /// Toggle an author-name filter. Resets to the first page: the
    /// narrowed result set starts over.
    pub fn toggle_author(&mut self, name: &str) {
        self.author_filters = self.author_filters.toggle(name);
        self.page = 1;
    }

    /// Toggle a tag-name filter. Resets to the first page.
    pub fn toggle_tag(&mut self, name: &str) {
        self.tag_filters = self.tag_filters.toggle(name);
        self.page = 1;
    }

    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    // ── Request building ─────────────────────────────────────────────

    /// The quotes request matching the current filters and page.
    /// Multiple values of either filter kind combine as OR.
    pub fn quotes_query(&self) -> QuoteQuery {
        QuoteQuery {
            tags: self.tag_filters.query_value(FilterJoin::Any),
            author: self.author_filters.query_value(FilterJoin::Any),
            page: Some(self.page),
            ..QuoteQuery::default()
        }
    }

    /// Distinct author slugs referenced by the displayed quotes that
    /// are not yet cached, in first-appearance order.
    pub fn missing_author_slugs(&self) -> Vec<String> {
        let mut missing: Vec<String> = Vec::new();
        for quote in &self.quotes {
            if !self.authors.contains_slug(&quote.author_slug)
                && !missing.contains(&quote.author_slug)
            {
                missing.push(quote.author_slug.clone());
            }
        }
        missing
    }

    /// An authors request covering the uncached slugs of the displayed
    /// quotes, or `None` when every author is already cached.
    pub fn authors_query(&self) -> Option<AuthorQuery> {
        let missing = self.missing_author_slugs();
        if missing.is_empty() {
            return None;
        }
        Some(AuthorQuery {
            slug: Some(missing.join("|")),
            ..AuthorQuery::default()
        })
    }

    // ── Payload ingestion ────────────────────────────────────────────

    /// Replace the displayed quotes with a fetched page.
    pub fn apply_quotes(&mut self, page: ListPage<Quote>) {
        self.page = page.page.max(1);
        self.total_pages = page.total_pages;
        self.quotes = page.results;
    }

    /// Merge fetched authors into the cache (first-write-wins).
    pub fn apply_authors(&mut self, incoming: Vec<Author>) {
        self.authors = self.authors.merged(incoming);
    }

    /// Replace the known tag list.
    pub fn apply_tags(&mut self, tags: Vec<Tag>) {
        self.tags = tags;
    }
}
