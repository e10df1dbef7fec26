//! The `cheatquiz init` command.

use std::path::Path;

use anyhow::Result;

pub fn execute() -> Result<()> {
    write_if_missing(Path::new("cheatquiz.toml"), SAMPLE_CONFIG)?;
    write_if_missing(Path::new("vim-cheatsheet.md"), SAMPLE_CHEATSHEET)?;

    println!("\nNext steps:");
    println!("  1. Add your own questions to vim-cheatsheet.md");
    println!("  2. Run: cheatquiz validate");
    println!("  3. Run: cheatquiz play");

    Ok(())
}

fn write_if_missing(path: &Path, content: &str) -> Result<()> {
    if path.exists() {
        println!("{} already exists, skipping.", path.display());
    } else {
        std::fs::write(path, content)?;
        println!("Created {}", path.display());
    }
    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# cheatquiz configuration

source = "./vim-cheatsheet.md"
sentinel = "---"
color = true
# flash (10 questions), regular (50), or all
mode = "all"
# seed = 42
"#;

const SAMPLE_CHEATSHEET: &str = r#"# Vim cheatsheet

Each bullet is one question. The backticked span before ` - ` holds the
accepted answers, separated by `, `.

## Movement
* `h` - Move the cursor left
* `j` - Move the cursor down
* `k` - Move the cursor up
* `l` - Move the cursor right
* `w` - Jump to the start of the next word
* `gg` - Go to the first line of the document
* `G` - Go to the last line of the document

## Editing
* `dd` - Delete the current line
* `yy`, `Y` - Yank the current line
* `u` - Undo
* `ciw` - Change the `inner word` under the cursor

## Files
* `:w` - Write the file
* `:wq`, `:x`, `ZZ` - Write the file and quit
* `:q!`, `ZQ` - Quit without saving
"#;
