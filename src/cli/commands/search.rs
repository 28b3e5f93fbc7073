use crate::config::Config;
use crate::models::SearchResult;
use crate::services::SearchService;

use super::load_service;

pub async fn cmd_search(config: &Config, query: &str) -> anyhow::Result<()> {
    let service = load_service(config).await?;
    let results = service.search_global(query).await;

    if results.is_empty() {
        println!("Nothing found matching '{query}'");
        return Ok(());
    }

    println!("Search Results ({}):", results.len());
    println!("{:-<60}", "");
    print_results(&results);

    Ok(())
}

pub(super) fn print_results(results: &[SearchResult]) {
    for result in results {
        println!("• [{}] {}", result.kind, result.title);
        println!("  {}", result.subtitle);
        println!("  {}", result.link);
    }
}
