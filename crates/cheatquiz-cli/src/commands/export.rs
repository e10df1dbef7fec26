//! The `cheatquiz export` command.

use std::path::PathBuf;

use anyhow::Result;

use cheatquiz_core::export::write_json;
use cheatquiz_core::load_config_from;
use cheatquiz_core::parser::parse_file;

pub fn execute(
    source: Option<PathBuf>,
    output: PathBuf,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let source = source.unwrap_or(config.source);

    let records = parse_file(&source)?;
    write_json(&records, &output)?;

    println!(
        "Exported {} questions from {} to {}",
        records.len(),
        source.display(),
        output.display()
    );

    Ok(())
}
