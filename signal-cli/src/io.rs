//! File I/O for the native CLI

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use signal_core::{Element, Node};

/// Load a plain-text file into a content tree: one paragraph element per
/// non-empty line, rooted in a single container.
pub fn load_content(path: &Path) -> Result<(String, Element)> {
    let canonical = path
        .canonicalize()
        .with_context(|| format!("Failed to resolve path: {}", path.display()))?;

    let content = fs::read_to_string(&canonical)
        .with_context(|| format!("Failed to read file: {}", canonical.display()))?;

    let title = canonical
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "Untitled".to_string());

    let paragraphs = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| Node::element("p", vec![Node::text(line)]))
        .collect();

    Ok((title, Element::with_children("div", paragraphs)))
}

/// Get the ~/.signal directory path, creating it if needed
pub fn signal_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not find home directory")?;
    let signal_dir = home.join(".signal");

    if !signal_dir.exists() {
        fs::create_dir_all(&signal_dir)
            .with_context(|| format!("Failed to create {}", signal_dir.display()))?;
    }

    Ok(signal_dir)
}

/// Write the word-processor document and JSON report into `dir`
pub fn write_exports(
    dir: &Path,
    word_doc: &str,
    report_json: &str,
) -> Result<(PathBuf, PathBuf)> {
    fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;

    let doc_path = dir.join("signal-highlighted-content.doc");
    // Leading BOM keeps word processors reading the file as UTF-8
    fs::write(&doc_path, format!("\u{feff}{word_doc}"))
        .with_context(|| format!("Failed to write {}", doc_path.display()))?;

    let report_path = dir.join("report.json");
    fs::write(&report_path, report_json)
        .with_context(|| format!("Failed to write {}", report_path.display()))?;

    Ok((doc_path, report_path))
}
