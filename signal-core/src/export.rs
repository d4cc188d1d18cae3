//! Serialization of annotated trees for the export collaborator

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::highlight::AuditOutcome;
use crate::model::{Element, Node};
use crate::report::{build_report, Report};

/// Fixed class-to-color stylesheet carried by the word-processor document
const EXPORT_STYLES: &str = "\
.hl-brand { background:#fbbf24; color:#000; }\n\
.hl-keyword { background:#60a5fa; color:#fff; }\n\
.hl-location { background:#34d399; color:#000; }";

/// Machine-readable export of one audit pass
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub audit_id: Uuid,
    pub title: String,
    pub markup: String,
    pub word_count: usize,
    pub stats: crate::model::GroupStats,
    pub report: Report,
    pub generated_at: DateTime<Utc>,
}

impl ExportDocument {
    pub fn from_outcome(title: &str, outcome: &AuditOutcome) -> Self {
        Self {
            audit_id: outcome.id,
            title: title.to_string(),
            markup: render_markup(&outcome.tree),
            word_count: outcome.word_count,
            stats: outcome.stats.clone(),
            report: build_report(outcome.word_count, &outcome.stats),
            generated_at: Utc::now(),
        }
    }
}

pub fn to_json(doc: &ExportDocument) -> serde_json::Result<String> {
    serde_json::to_string_pretty(doc)
}

/// Serialize a content tree to markup. Marker nodes become classed spans;
/// everything else round-trips tag-for-tag.
pub fn render_markup(el: &Element) -> String {
    let mut out = String::new();
    write_element(el, &mut out);
    out
}

fn write_element(el: &Element, out: &mut String) {
    let (open, close) = match el.marker {
        Some(class) => (
            format!("<span class=\"{}\">", class.css_class()),
            "</span>".to_string(),
        ),
        None => (format!("<{}>", el.tag), format!("</{}>", el.tag)),
    };
    out.push_str(&open);
    for child in &el.children {
        match child {
            Node::Text(text) => out.push_str(&escape_text(text)),
            Node::Element(inner) => write_element(inner, out),
        }
    }
    out.push_str(&close);
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Wrap an outcome's markup in a standalone word-processor HTML document
/// with the fixed highlight stylesheet.
pub fn to_word_document(outcome: &AuditOutcome) -> String {
    format!(
        "<html>\n<head>\n<meta charset=\"utf-8\">\n<style>\n{}\n</style>\n</head>\n<body>{}</body>\n</html>\n",
        EXPORT_STYLES,
        render_markup(&outcome.tree)
    )
}
