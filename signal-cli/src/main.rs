//! Signal CLI - content audit from the command line
//!
//! Annotates a text file against brand, keyword and location term lists,
//! prints the coverage report, and optionally writes the highlighted
//! word-processor export.

mod io;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use signal_core::{to_json, to_word_document, AuditSession, GroupClass, Report};

#[derive(Parser)]
#[command(name = "signal", about = "Audit content for brand, keyword and location coverage")]
struct Args {
    /// Path to the content file (plain text, one paragraph per line)
    content: PathBuf,

    /// Brand names (comma, newline or tab separated)
    #[arg(long, short = 'b')]
    brands: String,

    /// Keywords (comma, newline or tab separated)
    #[arg(long, short = 'k')]
    keywords: String,

    /// Locations (comma, newline or tab separated; may be omitted)
    #[arg(long, short = 'l', default_value = "")]
    locations: String,

    /// Write the highlighted document and JSON report here instead of ~/.signal
    #[arg(long)]
    out: Option<PathBuf>,

    /// Skip writing export files
    #[arg(long)]
    no_export: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let (title, tree) = io::load_content(&args.content)?;

    let mut session = AuditSession::new();
    session.brands = args.brands;
    session.keywords = args.keywords;
    session.locations = args.locations;
    session.set_content(tree);

    let outcome = session.run_audit()?.clone();
    let report = session.report()?;

    println!("Audit: {title}");
    println!();
    for class in GroupClass::all() {
        let stat = outcome.stats.get(*class);
        println!("{:>9}: {} matches", class.label(), stat.total);
        if !stat.unused.is_empty() {
            println!("{:>9}  missing: {}", "", stat.unused.join(", "));
        }
    }
    println!();
    print_report(&report);

    if !args.no_export {
        let export = session.export_document(&title)?;
        let dir = match args.out {
            Some(dir) => dir,
            None => io::signal_dir()?,
        };
        let (doc_path, report_path) =
            io::write_exports(&dir, &to_word_document(&outcome), &to_json(&export)?)?;
        println!();
        println!("Exported {}", doc_path.display());
        println!("Exported {}", report_path.display());
    }

    Ok(())
}

fn print_report(report: &Report) {
    println!("Words: {}", report.word_count);
    println!(
        "Brand usage: {}{}",
        report.brand_total,
        if report.brand_overused { " (overused)" } else { "" }
    );
    println!(
        "Keyword coverage: {}/{} ({})",
        report.keyword_coverage.used,
        report.keyword_coverage.total,
        report.keyword_coverage.label()
    );
    println!(
        "Location coverage: {}/{} ({})",
        report.location_coverage.used,
        report.location_coverage.total,
        report.location_coverage.label()
    );
    println!();
    println!("Notes:");
    for note in &report.notes {
        println!("  - {note}");
    }
}
