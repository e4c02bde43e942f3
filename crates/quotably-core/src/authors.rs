// ── Author cache ──
//
// Slug-keyed, append-only-by-merge author storage. Grows monotonically
// within a session and never rewrites an entry once cached
// (first-write-wins per slug).

use std::collections::HashSet;
use std::slice;

use quotably_api::Author;

/// Merge newly fetched authors into an existing cache, keyed by slug.
///
/// Entries already cached are left untouched; authors from `incoming`
/// whose slug is new are appended in their incoming order. An updated
/// record for an already-cached slug is silently dropped. Runs in
/// `O(|cache| + |incoming|)` via hash-set slug membership.
pub fn merge_authors(cache: Option<&[Author]>, incoming: Vec<Author>) -> Vec<Author> {
    let existing = cache.unwrap_or_default();
    let mut seen: HashSet<String> = existing.iter().map(|a| a.slug.clone()).collect();

    let mut merged = existing.to_vec();
    for author in incoming {
        if seen.insert(author.slug.clone()) {
            merged.push(author);
        }
    }
    merged
}

/// Session-lifetime author cache built on [`merge_authors`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorCache {
    entries: Vec<Author>,
}

impl AuthorCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// A new cache with `incoming` merged in; `self` is unchanged.
    pub fn merged(&self, incoming: Vec<Author>) -> Self {
        Self {
            entries: merge_authors(Some(&self.entries), incoming),
        }
    }

    pub fn contains_slug(&self, slug: &str) -> bool {
        self.entries.iter().any(|a| a.slug == slug)
    }

    /// Look up a cached author by slug.
    pub fn get(&self, slug: &str) -> Option<&Author> {
        self.entries.iter().find(|a| a.slug == slug)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Author> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[Author] {
        &self.entries
    }
}
