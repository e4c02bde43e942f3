// quotably-api: Async Rust client for the Quotable content API.

pub mod client;
pub mod error;
pub mod request;
pub mod transport;
pub mod types;

pub use client::QuotableClient;
pub use error::Error;
pub use request::{
    AuthorQuery, AuthorSortField, QuoteQuery, QuoteSortField, RandomQuery, RequestConfig,
    ResourceKind, SortOrder, TagQuery,
};
pub use transport::TransportConfig;
pub use types::{Author, ListPage, Quote, Tag};
