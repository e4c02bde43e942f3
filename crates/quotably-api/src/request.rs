// Request configuration and URL building for the Quotable API.
//
// Each endpoint accepts a different subset of query options, so the
// configuration is a four-variant enum carrying a per-endpoint option
// struct. `build_url` is pure: it never touches the network and never
// fails for a well-typed configuration.
//
// Query values are emitted literally -- the API's filter conventions
// use `|` (OR) and `,` (AND) separators, which must not be
// percent-encoded.

use std::fmt;
use std::str::FromStr;

use url::Url;

use crate::Error;

// ── Resource kinds ───────────────────────────────────────────────────

/// The four API resource kinds, matching the endpoint path segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Quotes,
    Authors,
    Tags,
    Random,
}

impl ResourceKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Quotes => "quotes",
            Self::Authors => "authors",
            Self::Tags => "tags",
            Self::Random => "random",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "quotes" => Ok(Self::Quotes),
            "authors" => Ok(Self::Authors),
            "tags" => Ok(Self::Tags),
            "random" => Ok(Self::Random),
            other => Err(Error::InvalidConfigKind(other.to_owned())),
        }
    }
}

// ── Sort fields ──────────────────────────────────────────────────────

/// Sort direction. The API's default depends on the sorted field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Sort field for `/quotes` and `/tags`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteSortField {
    DateAdded,
    DateModified,
    Author,
    Content,
}

impl QuoteSortField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DateAdded => "dateAdded",
            Self::DateModified => "dateModified",
            Self::Author => "author",
            Self::Content => "content",
        }
    }
}

/// Sort field for `/authors`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorSortField {
    DateAdded,
    DateModified,
    Name,
    QuoteCount,
}

impl AuthorSortField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DateAdded => "dateAdded",
            Self::DateModified => "dateModified",
            Self::Name => "name",
            Self::QuoteCount => "quoteCount",
        }
    }
}

// ── Per-endpoint options ─────────────────────────────────────────────
//
// Field declaration order is the query emission order.

/// Options for `/quotes` and `/quotes/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuoteQuery {
    /// When set, requests the single-resource form `/quotes/{id}`
    /// and all other options are ignored.
    pub id: Option<String>,
    /// Maximum quote length in characters (combinable with `min_length`).
    pub max_length: Option<u32>,
    /// Minimum quote length in characters (combinable with `max_length`).
    pub min_length: Option<u32>,
    /// Tag name(s): comma-separated means AND, pipe-separated means OR.
    pub tags: Option<String>,
    /// Author name(s) or slug(s); pipe-separated means OR.
    pub author: Option<String>,
    pub sort_by: Option<QuoteSortField>,
    pub order: Option<SortOrder>,
    /// Results per page. min 1, max 150, API default 20.
    pub limit: Option<u32>,
    /// Page of results. min 1, API default 1.
    pub page: Option<u32>,
}

/// Options for `/authors` and `/authors/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorQuery {
    /// When set, requests the single-resource form `/authors/{id}`.
    pub id: Option<String>,
    /// Author slug(s); pipe-separated means OR.
    pub slug: Option<String>,
    pub sort_by: Option<AuthorSortField>,
    pub order: Option<SortOrder>,
    pub limit: Option<u32>,
    pub page: Option<u32>,
}

/// Options for `/tags`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagQuery {
    /// The endpoint shares the generic sort-field set with `/quotes`;
    /// in practice only `dateAdded`/`dateModified` are meaningful here,
    /// but the API accepts the full set.
    pub sort_by: Option<QuoteSortField>,
    pub order: Option<SortOrder>,
}

/// Options for `/random`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RandomQuery {
    pub max_length: Option<u32>,
    pub min_length: Option<u32>,
    pub tags: Option<String>,
    pub author: Option<String>,
}

// ── Request configuration ────────────────────────────────────────────

/// A complete request description: which resource, with which options.
///
/// The variant restricts which options are legal for the endpoint, so
/// a well-typed configuration always builds a valid URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestConfig {
    Quotes(QuoteQuery),
    Authors(AuthorQuery),
    Tags(TagQuery),
    Random(RandomQuery),
}

impl RequestConfig {
    pub fn kind(&self) -> ResourceKind {
        match self {
            Self::Quotes(_) => ResourceKind::Quotes,
            Self::Authors(_) => ResourceKind::Authors,
            Self::Tags(_) => ResourceKind::Tags,
            Self::Random(_) => ResourceKind::Random,
        }
    }

    /// The single-resource id, if this configuration carries one.
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::Quotes(q) => q.id.as_deref(),
            Self::Authors(q) => q.id.as_deref(),
            Self::Tags(_) | Self::Random(_) => None,
        }
    }

    /// Query pairs in declared field order, with unset, empty and zero
    /// values skipped.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        match self {
            Self::Quotes(q) => {
                push_num(&mut pairs, "maxLength", q.max_length);
                push_num(&mut pairs, "minLength", q.min_length);
                push_str(&mut pairs, "tags", q.tags.as_deref());
                push_str(&mut pairs, "author", q.author.as_deref());
                push_str(&mut pairs, "sortBy", q.sort_by.map(QuoteSortField::as_str));
                push_str(&mut pairs, "order", q.order.map(SortOrder::as_str));
                push_num(&mut pairs, "limit", q.limit);
                push_num(&mut pairs, "page", q.page);
            }
            Self::Authors(q) => {
                push_str(&mut pairs, "slug", q.slug.as_deref());
                push_str(&mut pairs, "sortBy", q.sort_by.map(AuthorSortField::as_str));
                push_str(&mut pairs, "order", q.order.map(SortOrder::as_str));
                push_num(&mut pairs, "limit", q.limit);
                push_num(&mut pairs, "page", q.page);
            }
            Self::Tags(q) => {
                push_str(&mut pairs, "sortBy", q.sort_by.map(QuoteSortField::as_str));
                push_str(&mut pairs, "order", q.order.map(SortOrder::as_str));
            }
            Self::Random(q) => {
                push_num(&mut pairs, "maxLength", q.max_length);
                push_num(&mut pairs, "minLength", q.min_length);
                push_str(&mut pairs, "tags", q.tags.as_deref());
                push_str(&mut pairs, "author", q.author.as_deref());
            }
        }
        pairs
    }

    /// Build the full request URL against `base`.
    ///
    /// With an id set, this is the single-resource form
    /// `{base}/{kind}/{id}` with no query string. Otherwise the query
    /// pairs are joined with `&` and prefixed with `?` only when at
    /// least one pair exists. Values are emitted literally, without
    /// percent-encoding.
    pub fn build_url(&self, base: &Url) -> String {
        let base = base.as_str().trim_end_matches('/');
        let kind = self.kind();

        if let Some(id) = self.id() {
            return format!("{base}/{kind}/{id}");
        }

        let query = self
            .query_pairs()
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join("&");

        if query.is_empty() {
            format!("{base}/{kind}")
        } else {
            format!("{base}/{kind}?{query}")
        }
    }
}

fn push_str(pairs: &mut Vec<(&'static str, String)>, key: &'static str, value: Option<&str>) {
    if let Some(value) = value {
        if !value.is_empty() {
            pairs.push((key, value.to_owned()));
        }
    }
}

fn push_num(pairs: &mut Vec<(&'static str, String)>, key: &'static str, value: Option<u32>) {
    if let Some(value) = value {
        if value != 0 {
            pairs.push((key, value.to_string()));
        }
    }
}
