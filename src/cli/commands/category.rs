use anyhow::Context;

use crate::config::Config;
use crate::search::Filters;
use crate::services::SearchService;

use super::load_service;

/// Parses a `field=value` filter argument. The value may be empty.
pub fn parse_filter(arg: &str) -> anyhow::Result<(String, String)> {
    let (field, value) = arg
        .split_once('=')
        .with_context(|| format!("Invalid filter '{arg}', expected FIELD=VALUE"))?;

    let field = field.trim();
    if field.is_empty() {
        anyhow::bail!("Invalid filter '{arg}', field name is empty");
    }

    Ok((field.to_string(), value.to_string()))
}

pub async fn cmd_search_category(
    config: &Config,
    category: &str,
    query: &str,
    filter_args: &[String],
) -> anyhow::Result<()> {
    let filters = filter_args
        .iter()
        .map(|arg| parse_filter(arg))
        .collect::<anyhow::Result<Filters>>()?;

    let service = load_service(config).await?;
    let records = service
        .search_category(category, query, &filters)
        .await
        .with_context(|| format!("Search in '{category}' failed"))?;

    if records.is_empty() {
        println!("No {category} matching the search");
        return Ok(());
    }

    println!("{} ({}):", category, records.len());
    println!("{:-<60}", "");

    for record in &records {
        let line = record
            .iter()
            .filter(|(_, value)| !value.is_null())
            .map(|(field, value)| format!("{field}: {value}"))
            .collect::<Vec<_>>()
            .join(" | ");
        println!("• {line}");
    }

    Ok(())
}
