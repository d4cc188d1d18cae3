//! Tree-walking highlighter and the pass orchestration around it
//!
//! One call to [`annotate`] is a full audit pass: strip any markers left by a
//! previous pass, count words, then run the three groups in priority order
//! (brand, keyword, location). The caller's tree is never touched; the pass
//! works on a copy and returns it inside the outcome.

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::Serialize;
use uuid::Uuid;

use crate::model::{Element, GroupClass, GroupStats, MatchStat, Node, TermGroup};
use crate::pattern;

/// Outcome of one completed annotation pass.
///
/// Holding a value of this type is the proof that a pass ran to completion;
/// export is keyed on it rather than on a hidden global flag.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditOutcome {
    pub id: Uuid,
    pub completed_at: DateTime<Utc>,
    pub tree: Element,
    pub stats: GroupStats,
    pub word_count: usize,
}

/// Run a full annotation pass over a copy of `tree`.
///
/// Raw term inputs are normalized fresh on every call; empty groups simply
/// contribute zero matches. Deterministic for identical inputs, and
/// idempotent: feeding the returned tree back in reproduces it.
pub fn annotate(tree: &Element, brands: &str, keywords: &str, locations: &str) -> AuditOutcome {
    let groups = [
        TermGroup::parse(GroupClass::Brand, brands),
        TermGroup::parse(GroupClass::Keyword, keywords),
        TermGroup::parse(GroupClass::Location, locations),
    ];

    let mut working = strip_markers(tree);
    let word_count = working.word_count();

    let mut stats = GroupStats::default();
    for group in &groups {
        highlight_group(&mut working, group, stats.get_mut(group.class));
    }

    AuditOutcome {
        id: Uuid::new_v4(),
        completed_at: Utc::now(),
        tree: working,
        stats,
        word_count,
    }
}

/// Replace every marker element in the tree with a plain text node holding
/// its wrapped text. The marker tag is the sole basis for removal; all other
/// structure is preserved.
pub fn strip_markers(el: &Element) -> Element {
    let mut stripped = Element {
        tag: el.tag.clone(),
        marker: None,
        children: Vec::with_capacity(el.children.len()),
    };
    for child in &el.children {
        match child {
            Node::Text(text) => stripped.children.push(Node::Text(text.clone())),
            Node::Element(inner) if inner.is_marker() => {
                stripped.children.push(Node::Text(inner.plain_text()));
            }
            Node::Element(inner) => stripped.children.push(Node::Element(strip_markers(inner))),
        }
    }
    stripped
}

/// Annotate every term of one group across the tree, recording usage.
///
/// Terms run in group order, each scanning the tree as updated by the ones
/// before it, so overlapping spans go to the first-listed term.
fn highlight_group(root: &mut Element, group: &TermGroup, stat: &mut MatchStat) {
    for term in &group.terms {
        let re = pattern::compile(term);
        let mut hits = 0;
        apply_term(root, &re, group.class, &mut hits);
        stat.record(term, hits);
    }
}

/// Rewrite the element's subtree, splicing a marker node over every match.
///
/// Traversal never descends into an existing marker, whatever its class.
/// That single rule gives brand-priority exclusion (brands run first, so
/// later groups cannot reach text inside brand markers), first-listed-wins
/// inside a group, and global non-overlap of markers.
fn apply_term(el: &mut Element, re: &Regex, class: GroupClass, hits: &mut usize) {
    let mut rebuilt = Vec::with_capacity(el.children.len());
    for mut child in el.children.drain(..) {
        match child {
            Node::Text(text) => splice_matches(text, re, class, &mut rebuilt, hits),
            Node::Element(ref mut inner) => {
                if !inner.is_marker() {
                    apply_term(inner, re, class, hits);
                }
                rebuilt.push(child);
            }
        }
    }
    el.children = rebuilt;
}

/// Partition one text segment into `[text, marker, text, …]` around each
/// non-overlapping match, left to right. Empty gap segments are dropped so a
/// re-run reassembles the exact same structure.
fn splice_matches(
    text: String,
    re: &Regex,
    class: GroupClass,
    out: &mut Vec<Node>,
    hits: &mut usize,
) {
    let mut last = 0;
    let mut matched = false;
    for m in re.find_iter(&text) {
        matched = true;
        *hits += 1;
        if m.start() > last {
            out.push(Node::text(&text[last..m.start()]));
        }
        out.push(Node::marker(class, m.as_str()));
        last = m.end();
    }
    if !matched {
        out.push(Node::Text(text));
    } else if last < text.len() {
        out.push(Node::text(&text[last..]));
    }
}
