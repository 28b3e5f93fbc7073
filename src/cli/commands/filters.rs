use anyhow::Context;

use crate::config::Config;
use crate::services::SearchService;

use super::load_service;

pub async fn cmd_filters(config: &Config, category: &str, field: Option<&str>) -> anyhow::Result<()> {
    let service = load_service(config).await?;

    let Some(field) = field else {
        let fields = service
            .filter_fields(category)
            .await
            .with_context(|| format!("Cannot list filters for '{category}'"))?;

        println!("Filters for {category}:");
        for field in fields {
            println!("• {field}");
        }
        return Ok(());
    };

    let values = service
        .filter_values(category, field)
        .await
        .with_context(|| format!("Cannot list values of '{field}' in '{category}'"))?;

    println!("Values of {category}.{field}:");
    for value in values {
        if value.is_null() {
            println!("• (none)");
        } else {
            println!("• {value}");
        }
    }

    Ok(())
}
