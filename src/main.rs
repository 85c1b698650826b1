//! Demo driver: paginate a file and print the page tree
//!
//! The library is the product; this binary exists to exercise the
//! pipeline from the command line.

use std::path::Path;

use anyhow::{bail, Context, Result};
use folio::{ContentFormat, Editor, PageMetrics};

fn main() -> Result<()> {
    env_logger::init();

    let Some(path) = std::env::args().nth(1) else {
        bail!("usage: folio <file.txt|file.md|file.html>");
    };
    let raw = std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;

    let mut editor = Editor::new(PageMetrics::default());
    editor.load(&raw, format_for(Path::new(&path)));

    println!("{}", editor.view_html());
    println!();
    println!("{}", editor.status_label());
    let stats = editor.stats();
    println!("{} words, {} characters", stats.words, stats.chars);

    Ok(())
}

fn format_for(path: &Path) -> ContentFormat {
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(ContentFormat::from_tag)
        .unwrap_or(ContentFormat::PlainText)
}
