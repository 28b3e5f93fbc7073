use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::config::Config;
use crate::services::{SearchService, global_search_debouncer};

use super::load_service;
use super::search::print_results;

/// Reads queries from stdin, one per line, and prints results for whichever
/// query survives the debounce window.
pub async fn cmd_interactive(config: &Config) -> anyhow::Result<()> {
    let service: Arc<dyn SearchService> = Arc::new(load_service(config).await?);
    let debouncer = global_search_debouncer(Arc::clone(&service), config.search.debounce());
    let mut results = debouncer.subscribe();

    println!(
        "Type to search ({}ms debounce). Empty line clears, Ctrl+D quits.",
        debouncer.delay().as_millis()
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                match line? {
                    Some(line) if line.trim().is_empty() => {
                        debouncer.cancel();
                        println!("(cleared)");
                    }
                    Some(line) => {
                        debouncer.submit(line);
                    }
                    None => break,
                }
            }
            changed = results.changed() => {
                if changed.is_err() {
                    break;
                }
                let latest = results.borrow_and_update().clone();
                if let Some(latest) = latest {
                    println!("{:-<60}", "");
                    println!("'{}': {} result(s)", latest.query, latest.output.len());
                    print_results(&latest.output);
                }
            }
        }
    }

    let history = service.history().await;
    if !history.is_empty() {
        println!("Recent searches: {}", history.join(", "));
    }

    Ok(())
}
