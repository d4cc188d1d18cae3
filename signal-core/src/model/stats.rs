use serde::{Deserialize, Serialize};

use super::GroupClass;

/// Per-group usage tally: total match count plus the used/unused term split.
///
/// Every term of the group lands in exactly one of `used` or `unused`, so
/// `used.len() + unused.len()` always equals the group's term count.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MatchStat {
    pub total: usize,
    pub used: Vec<String>,
    pub unused: Vec<String>,
}

impl MatchStat {
    /// Record the outcome of one term's scan over the whole tree
    pub fn record(&mut self, term: &str, hits: usize) {
        if hits > 0 {
            self.used.push(term.to_string());
        } else {
            self.unused.push(term.to_string());
        }
        self.total += hits;
    }

    pub fn term_count(&self) -> usize {
        self.used.len() + self.unused.len()
    }
}

/// Usage tallies for all three groups of one annotation pass
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GroupStats {
    pub brand: MatchStat,
    pub keyword: MatchStat,
    pub location: MatchStat,
}

impl GroupStats {
    pub fn get(&self, class: GroupClass) -> &MatchStat {
        match class {
            GroupClass::Brand => &self.brand,
            GroupClass::Keyword => &self.keyword,
            GroupClass::Location => &self.location,
        }
    }

    pub fn get_mut(&mut self, class: GroupClass) -> &mut MatchStat {
        match class {
            GroupClass::Brand => &mut self.brand,
            GroupClass::Keyword => &mut self.keyword,
            GroupClass::Location => &mut self.location,
        }
    }
}
