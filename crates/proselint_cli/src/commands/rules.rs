//! Rules command implementation

use miette::{Result, miette};
use proselint_core::{CheckCategory, CheckMetadata, CheckRegistry};

pub fn run_rules(category: Option<&str>) -> Result<()> {
    let registry = proselint_rules::default_registry();
    let categories = select_categories(&registry, category)?;

    for category in categories {
        println!("{} ({})", category.name, category.id);
        for metadata in &category.checks {
            println!("  {}", format_check(metadata));
        }
        println!();
    }

    println!("{} checks available", registry.get_check_count());
    Ok(())
}

fn select_categories<'r>(
    registry: &'r CheckRegistry,
    key: Option<&str>,
) -> Result<Vec<&'r CheckCategory>> {
    let all = registry.get_all_categories();
    let Some(key) = key else {
        return Ok(all.iter().collect());
    };

    let selected: Vec<_> = all.iter().filter(|c| c.id == key).collect();
    if selected.is_empty() {
        let known: Vec<&str> = all.iter().map(|c| c.id.as_str()).collect();
        return Err(miette!(
            "Unknown category '{}'. Available: {}",
            key,
            known.join(", ")
        ));
    }
    Ok(selected)
}

fn format_check(metadata: &CheckMetadata) -> String {
    format!(
        "{:<32} {:<10} {:<8} {}",
        metadata.id,
        metadata.severity.as_str(),
        if metadata.enabled { "on" } else { "off" },
        metadata.source.as_deref().unwrap_or("-")
    )
}
