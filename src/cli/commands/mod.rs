mod category;
mod filters;
mod init;
mod interactive;
mod search;

pub use category::{cmd_search_category, parse_filter};
pub use filters::cmd_filters;
pub use init::cmd_init;
pub use interactive::cmd_interactive;
pub use search::cmd_search;

use anyhow::Context;

use crate::config::Config;
use crate::services::InMemorySearchService;

async fn load_service(config: &Config) -> anyhow::Result<InMemorySearchService> {
    InMemorySearchService::from_config(&config.search)
        .await
        .context("Failed to load search index")
}
