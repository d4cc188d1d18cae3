use thiserror::Error;

/// Boundary errors for the audit workflow.
///
/// The engine itself cannot fail on a well-formed tree: patterns are
/// escaped before compilation and the tree is finite. Only the workflow
/// around it rejects anything, and both conditions are recoverable by the
/// user.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuditError {
    /// A required raw input was empty when the audit was requested
    #[error("please provide {0} before running the audit")]
    EmptyInput(&'static str),
    /// Export was requested before any audit pass completed
    #[error("run the audit before exporting the document")]
    ExportNotReady,
}
