//! The `cheatquiz validate` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use cheatquiz_core::parser::{parse_file, validate_records};
use cheatquiz_core::{load_config_from, Record};

pub fn execute(source: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let source = source.unwrap_or(config.source);

    let records = parse_file(&source)?;
    println!("Cheatsheet: {} ({} questions)", source.display(), records.len());

    if !records.is_empty() {
        println!("{}", category_table(&records));
    }

    let warnings = validate_records(&records);
    for w in &warnings {
        let prefix = w
            .category
            .as_ref()
            .map(|c| format!("  [{c}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    if warnings.is_empty() {
        println!("All questions valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}

/// Question counts per category, in order of first appearance.
fn category_table(records: &[Record]) -> Table {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for r in records {
        match counts.iter_mut().find(|(c, _)| *c == r.category) {
            Some((_, n)) => *n += 1,
            None => counts.push((r.category.as_str(), 1)),
        }
    }

    let mut table = Table::new();
    table.set_header(vec!["Category", "Questions"]);
    for (category, n) in counts {
        let label = if category.is_empty() {
            "(none)"
        } else {
            category
        };
        table.add_row(vec![Cell::new(label), Cell::new(n)]);
    }
    table
}
