//! Response types for the Quotable content API.
//!
//! All types match the JSON returned by the public endpoints. Field
//! names use camelCase via `#[serde(rename_all = "camelCase")]`; the
//! API's Mongo-style `_id` is renamed explicitly.

use serde::{Deserialize, Serialize};

// ── Pagination ───────────────────────────────────────────────────────

/// Envelope returned by the `/quotes` and `/authors` list endpoints.
///
/// `/tags` is the exception: it returns a bare array of [`Tag`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPage<T> {
    /// Number of records in this response.
    pub count: u32,
    /// Total number of records matching the request.
    pub total_count: u64,
    /// Current page number.
    pub page: u32,
    /// Total number of pages matching the request.
    pub total_pages: u32,
    /// Position of the last result within the full result set;
    /// absent on the final page.
    #[serde(default)]
    pub last_item_index: Option<u64>,
    pub results: Vec<T>,
}

// ── Quotes ───────────────────────────────────────────────────────────

/// A single quote. Immutable once received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    #[serde(rename = "_id")]
    pub id: String,
    pub content: String,
    /// Author display name.
    pub author: String,
    /// URL-safe key of the quote's author.
    pub author_slug: String,
    /// Tag names, in the order the API returns them.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Length of `content` in characters.
    pub length: u32,
    /// ISO 8601 date.
    pub date_added: String,
    /// ISO 8601 date.
    pub date_modified: String,
}

// ── Authors ──────────────────────────────────────────────────────────

/// An author record. `slug` is the uniqueness key for caching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    #[serde(rename = "_id")]
    pub id: String,
    /// The author's full name.
    pub name: String,
    /// URL-friendly unique id derived from the author's name.
    pub slug: String,
    /// Brief one-paragraph bio.
    #[serde(default)]
    pub bio: String,
    /// One-line description, typically the author's primary occupation.
    #[serde(default)]
    pub description: String,
    /// Link to the author's Wikipedia page or official website.
    #[serde(default)]
    pub link: String,
    /// Number of quotes by this author.
    pub quote_count: u32,
}

// ── Tags ─────────────────────────────────────────────────────────────

/// A tag name usable as a quote filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
}
