use std::path::Path;

use anyhow::{Context, Result};

use onepage_core::Document;

pub fn run(file: &Path) -> Result<()> {
    let text = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    let document = Document::parse(&text);

    if document.sections().is_empty() {
        println!("No sections found.");
        return Ok(());
    }

    println!("{:<20} {:<30} {:>6} {:>6}", "ID", "TITLE", "ROW", "ROWS");
    println!("{}", "-".repeat(66));
    for section in document.sections() {
        println!(
            "{:<20} {:<30} {:>6} {:>6}",
            section.id, section.title, section.top, section.height
        );
    }

    Ok(())
}
