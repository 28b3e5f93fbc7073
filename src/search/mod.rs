//! Multi-category substring search with bounded query history.

pub mod error;
pub mod history;
pub mod index;
pub mod matcher;

pub use error::SearchError;
pub use history::SearchHistory;
pub use index::{Filters, SearchIndex};
