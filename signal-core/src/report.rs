//! Qualitative audit report derived from one pass's usage stats

use serde::Serialize;

use crate::model::{GroupClass, GroupStats, MatchStat};

/// Brand mention count above which the report flags overuse (exclusive)
pub const BRAND_OVERUSE_THRESHOLD: usize = 8;

/// How much of a group's term set actually appeared in the content
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Coverage {
    pub used: usize,
    pub total: usize,
}

impl Coverage {
    pub fn of(stat: &MatchStat) -> Self {
        Self {
            used: stat.used.len(),
            total: stat.term_count(),
        }
    }

    /// An empty group has nothing left to cover, so it counts as complete.
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            1.0
        } else {
            self.used as f64 / self.total as f64
        }
    }

    pub fn is_complete(&self) -> bool {
        self.used == self.total
    }

    pub fn label(&self) -> &'static str {
        if self.is_complete() {
            "complete"
        } else {
            "partial"
        }
    }
}

/// Read-only audit summary for one annotation pass
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub word_count: usize,
    pub brand_total: usize,
    pub brand_overused: bool,
    pub keyword_coverage: Coverage,
    pub location_coverage: Coverage,
    pub notes: Vec<String>,
}

/// Derive the report from a pass's word count and usage stats.
///
/// Notes are ordered: one per group with unsatisfied terms (brand, keyword,
/// location), then the overuse note if the brand total exceeds the
/// threshold. When nothing needs attention a single all-clear note stands in.
pub fn build_report(word_count: usize, stats: &GroupStats) -> Report {
    let brand_overused = stats.brand.total > BRAND_OVERUSE_THRESHOLD;

    let mut notes = Vec::new();
    for class in GroupClass::all() {
        let stat = stats.get(*class);
        if !stat.unused.is_empty() {
            notes.push(format!(
                "Add missing {} terms: {}",
                class.as_str(),
                stat.unused.join(", ")
            ));
        }
    }
    if brand_overused {
        notes.push(format!(
            "Brand mentioned {} times (threshold {}); consider reducing",
            stats.brand.total, BRAND_OVERUSE_THRESHOLD
        ));
    }
    if notes.is_empty() {
        notes.push("No corrective action required".to_string());
    }

    Report {
        word_count,
        brand_total: stats.brand.total,
        brand_overused,
        keyword_coverage: Coverage::of(&stats.keyword),
        location_coverage: Coverage::of(&stats.location),
        notes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stat(total: usize, used: &[&str], unused: &[&str]) -> MatchStat {
        MatchStat {
            total,
            used: used.iter().map(|s| s.to_string()).collect(),
            unused: unused.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_all_clear_note() {
        let stats = GroupStats {
            brand: stat(2, &["Acme"], &[]),
            keyword: stat(3, &["fast", "reliable"], &[]),
            location: stat(0, &[], &[]),
        };
        let report = build_report(9, &stats);

        assert_eq!(report.word_count, 9);
        assert!(!report.brand_overused);
        assert!(report.keyword_coverage.is_complete());
        assert_eq!(report.keyword_coverage.label(), "complete");
        assert_eq!(report.notes, vec!["No corrective action required"]);
    }

    #[test]
    fn test_overuse_threshold_is_exclusive() {
        let mut stats = GroupStats {
            brand: stat(8, &["Acme"], &[]),
            keyword: stat(1, &["fast"], &[]),
            location: stat(0, &[], &[]),
        };
        assert!(!build_report(100, &stats).brand_overused);

        stats.brand.total = 9;
        let report = build_report(100, &stats);
        assert!(report.brand_overused);
        assert!(report.notes.iter().any(|n| n.contains("mentioned 9 times")));
    }

    #[test]
    fn test_missing_terms_note_per_group() {
        let stats = GroupStats {
            brand: stat(1, &["Acme"], &["Globex"]),
            keyword: stat(1, &["fast"], &["cheap", "secure"]),
            location: stat(0, &[], &[]),
        };
        let report = build_report(50, &stats);

        assert_eq!(report.notes.len(), 2);
        assert_eq!(report.notes[0], "Add missing brand terms: Globex");
        assert_eq!(report.notes[1], "Add missing keyword terms: cheap, secure");
        assert_eq!(report.keyword_coverage.label(), "partial");
    }

    #[test]
    fn test_coverage_fraction() {
        let half = Coverage { used: 1, total: 2 };
        assert!((half.fraction() - 0.5).abs() < f64::EPSILON);

        let empty = Coverage { used: 0, total: 0 };
        assert!((empty.fraction() - 1.0).abs() < f64::EPSILON);
        assert!(empty.is_complete());
    }
}
