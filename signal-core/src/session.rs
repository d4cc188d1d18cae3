//! Audit session: input validation and export gating
//!
//! The session replaces a process-wide "has the audit run" flag with an
//! explicit value: export works off the stored [`AuditOutcome`] of the most
//! recent pass, and is rejected while none exists.

use crate::error::AuditError;
use crate::export::ExportDocument;
use crate::highlight::{annotate, AuditOutcome};
use crate::model::Element;
use crate::report::{build_report, Report};

/// Platform-agnostic audit workflow state
pub struct AuditSession {
    pub brands: String,
    pub keywords: String,
    pub locations: String,
    content: Option<Element>,
    outcome: Option<AuditOutcome>,
}

impl AuditSession {
    pub fn new() -> Self {
        Self {
            brands: String::new(),
            keywords: String::new(),
            locations: String::new(),
            content: None,
            outcome: None,
        }
    }

    pub fn set_content(&mut self, tree: Element) {
        self.content = Some(tree);
    }

    /// Outcome of the most recent completed pass, if any
    pub fn outcome(&self) -> Option<&AuditOutcome> {
        self.outcome.as_ref()
    }

    /// Validate inputs and run one full annotation pass.
    ///
    /// Brand names, keywords and content are required; locations may be
    /// empty. Any previous outcome is discarded before validation, so a
    /// failed run leaves the session not-exportable.
    pub fn run_audit(&mut self) -> Result<&AuditOutcome, AuditError> {
        self.outcome = None;

        if self.brands.trim().is_empty() {
            return Err(AuditError::EmptyInput("brand names"));
        }
        if self.keywords.trim().is_empty() {
            return Err(AuditError::EmptyInput("keywords"));
        }
        let tree = match &self.content {
            Some(tree) if !tree.plain_text().trim().is_empty() => tree,
            _ => return Err(AuditError::EmptyInput("content")),
        };

        let outcome = annotate(tree, &self.brands, &self.keywords, &self.locations);
        Ok(self.outcome.insert(outcome))
    }

    /// Report for the most recent pass
    pub fn report(&self) -> Result<Report, AuditError> {
        let outcome = self.outcome.as_ref().ok_or(AuditError::ExportNotReady)?;
        Ok(build_report(outcome.word_count, &outcome.stats))
    }

    /// Build the export document for the most recent pass
    pub fn export_document(&self, title: &str) -> Result<ExportDocument, AuditError> {
        let outcome = self.outcome.as_ref().ok_or(AuditError::ExportNotReady)?;
        Ok(ExportDocument::from_outcome(title, outcome))
    }
}

impl Default for AuditSession {
    fn default() -> Self {
        Self::new()
    }
}
