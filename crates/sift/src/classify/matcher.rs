//! Title matching against one compiled rule.

use crate::classify::rules::CompiledRule;
use std::collections::BTreeSet;

/// The verdict for one title against one rule.
///
/// `keywords` is empty unless `matched` is true; when matched it holds
/// every include keyword (from any clause of the rule) contained in the
/// title, not only those of the clause that triggered the match, so
/// highlighting can surface all of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub matched: bool,
    pub keywords: BTreeSet<String>,
}

impl MatchResult {
    pub fn no_match() -> Self {
        MatchResult {
            matched: false,
            keywords: BTreeSet::new(),
        }
    }
}

/// Evaluate a title against one rule.
///
/// Matching is case-insensitive substring containment ("box" matches
/// inside "boxer"). Include clauses are checked in row order and the
/// first satisfied clause decides the include side; if none holds the
/// exclude set is never consulted. A single exclude hit overrides any
/// include match.
pub fn match_title(title: &str, rule: &CompiledRule) -> MatchResult {
    let title_lower = title.to_lowercase();

    let included = rule
        .include_clauses
        .iter()
        .any(|clause| clause.satisfied_by(&title_lower));
    if !included {
        return MatchResult::no_match();
    }

    let excluded = rule
        .exclude_keywords
        .iter()
        .any(|k| title_lower.contains(k.as_str()));
    if excluded {
        return MatchResult::no_match();
    }

    let keywords = rule
        .include_clauses
        .iter()
        .flat_map(|clause| clause.keywords.iter())
        .filter(|k| title_lower.contains(k.as_str()))
        .cloned()
        .collect();

    MatchResult {
        matched: true,
        keywords,
    }
}
