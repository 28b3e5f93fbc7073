pub mod debounce;
pub use debounce::{Debounced, Debouncer, global_search_debouncer};

pub mod search_service;
pub use search_service::{CategoryCount, ReloadSummary, SearchService, SearchServiceError};

pub mod search_service_impl;
pub use search_service_impl::InMemorySearchService;
