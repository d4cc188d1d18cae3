//! Signal Core - content annotation engine
//!
//! This crate provides the data structures and logic for the Signal content
//! audit tool: term normalization, whole-word pattern matching, and a
//! non-destructive highlight pass over a rich-text content tree, with usage
//! stats and a qualitative report derived from each pass.

pub mod error;
pub mod export;
pub mod highlight;
pub mod model;
pub mod normalize;
pub mod pattern;
pub mod report;
pub mod session;

pub use error::AuditError;
pub use export::{render_markup, to_json, to_word_document, ExportDocument};
pub use highlight::{annotate, strip_markers, AuditOutcome};
pub use model::{Element, GroupClass, GroupStats, MatchStat, Node, TermGroup};
pub use normalize::parse_terms;
pub use report::{build_report, Coverage, Report, BRAND_OVERUSE_THRESHOLD};
pub use session::AuditSession;
