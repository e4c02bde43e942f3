// quotably-core: Session/data layer between quotably-api and UI consumers.

pub mod authors;
pub mod browser;
pub mod error;
pub mod filters;
pub mod session;

// ── Primary re-exports ──────────────────────────────────────────────
pub use authors::{AuthorCache, merge_authors};
pub use browser::QuoteBrowser;
pub use error::CoreError;
pub use filters::{FilterJoin, FilterSet, toggle_filter};
pub use session::BrowseState;
