//! Rule compilation.
//!
//! The rules sheet holds one row per clause; rows sharing a rule name
//! form one rule. Compilation turns the raw rows into an ordered rule
//! set: each row contributes one include clause (with its own AND/OR
//! operator) and its exclude keywords are unioned into the rule's single
//! exclude set, which is always OR-combined at match time.

use crate::classify::parser::{parse_expression, Operator};
use crate::table::Table;
use crate::error::Result;
use std::collections::BTreeSet;

pub const RULE_COLUMN: &str = "Rule";
pub const INCLUDE_COLUMN: &str = "Include";
pub const EXCLUDE_COLUMN: &str = "Exclude";

/// One row of the rules sheet, before compilation.
#[derive(Debug, Clone)]
pub struct RawRuleRow {
    pub rule: String,
    pub include: Option<String>,
    pub exclude: Option<String>,
}

impl RawRuleRow {
    /// Extract raw rule rows from the rules table.
    ///
    /// Fails when any of the `Rule`/`Include`/`Exclude` columns is
    /// missing. Rows whose rule-name cell is not a string are skipped
    /// with a warning; non-string include/exclude cells degrade to
    /// "no keywords" instead.
    pub fn from_table(table: &Table) -> Result<Vec<RawRuleRow>> {
        let rule_idx = table.require_column("rules", RULE_COLUMN)?;
        let include_idx = table.require_column("rules", INCLUDE_COLUMN)?;
        let exclude_idx = table.require_column("rules", EXCLUDE_COLUMN)?;

        let mut rows = Vec::with_capacity(table.len());
        for (row_num, row) in table.rows().iter().enumerate() {
            let Some(rule) = row[rule_idx].as_text() else {
                log::warn!("rules row {}: rule name is not text, skipping", row_num + 1);
                continue;
            };

            rows.push(RawRuleRow {
                rule: rule.to_string(),
                include: row[include_idx].as_text().map(str::to_string),
                exclude: row[exclude_idx].as_text().map(str::to_string),
            });
        }

        Ok(rows)
    }
}

/// One parsed include clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordClause {
    pub keywords: Vec<String>,
    pub operator: Operator,
}

impl KeywordClause {
    /// Whether this clause holds for an already-lowercased title.
    ///
    /// A clause with no keywords never holds, under either operator.
    pub fn satisfied_by(&self, title_lower: &str) -> bool {
        if self.keywords.is_empty() {
            return false;
        }

        match self.operator {
            Operator::And => self.keywords.iter().all(|k| title_lower.contains(k.as_str())),
            Operator::Or => self.keywords.iter().any(|k| title_lower.contains(k.as_str())),
        }
    }
}

/// A rule after compilation: ordered include clauses plus one merged
/// exclude set.
#[derive(Debug, Clone)]
pub struct CompiledRule {
    pub name: String,
    pub include_clauses: Vec<KeywordClause>,
    pub exclude_keywords: BTreeSet<String>,
}

/// All compiled rules, in first-seen order. That order is the iteration
/// order during classification, so it is part of the output contract.
#[derive(Debug, Clone, Default)]
pub struct CompiledRuleSet {
    rules: Vec<CompiledRule>,
}

impl CompiledRuleSet {
    pub fn compile(rows: &[RawRuleRow]) -> Self {
        let mut set = CompiledRuleSet::default();

        for row in rows {
            let (include_keywords, include_op) = parse_expression(row.include.as_deref(), false);
            let (exclude_keywords, _) = parse_expression(row.exclude.as_deref(), true);

            let rule = set.entry(&row.rule);
            // An empty include clause is still appended; it can never be
            // satisfied, but the clause count per rule stays equal to the
            // raw row count. Identical clauses are not deduplicated.
            rule.include_clauses.push(KeywordClause {
                keywords: include_keywords,
                operator: include_op.unwrap_or(Operator::And),
            });
            rule.exclude_keywords.extend(exclude_keywords);
        }

        log::debug!("compiled {} rules from {} rows", set.len(), rows.len());
        set
    }

    fn entry(&mut self, name: &str) -> &mut CompiledRule {
        match self.rules.iter().position(|r| r.name == name) {
            Some(pos) => &mut self.rules[pos],
            None => {
                self.rules.push(CompiledRule {
                    name: name.to_string(),
                    include_clauses: Vec::new(),
                    exclude_keywords: BTreeSet::new(),
                });
                let last = self.rules.len() - 1;
                &mut self.rules[last]
            }
        }
    }

    pub fn rules(&self) -> &[CompiledRule] {
        &self.rules
    }

    pub fn get(&self, name: &str) -> Option<&CompiledRule> {
        self.rules.iter().find(|r| r.name == name)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Cell;

    fn raw(rule: &str, include: Option<&str>, exclude: Option<&str>) -> RawRuleRow {
        RawRuleRow {
            rule: rule.to_string(),
            include: include.map(str::to_string),
            exclude: exclude.map(str::to_string),
        }
    }

    #[test]
    fn test_rows_sharing_a_name_form_one_rule() {
        let rows = vec![
            raw("A", Some("red and blue"), Some("used")),
            raw("B", Some("dress"), None),
            raw("A", Some("green"), Some("refurbished or broken")),
        ];

        let set = CompiledRuleSet::compile(&rows);
        assert_eq!(set.len(), 2);

        let a = set.get("A").unwrap();
        assert_eq!(a.include_clauses.len(), 2);
        assert_eq!(
            a.exclude_keywords.iter().collect::<Vec<_>>(),
            vec!["broken", "refurbished", "used"]
        );

        let b = set.get("B").unwrap();
        assert_eq!(b.include_clauses.len(), 1);
        assert!(b.exclude_keywords.is_empty());
    }

    #[test]
    fn test_first_seen_order_is_preserved() {
        let rows = vec![
            raw("Z", Some("a"), None),
            raw("A", Some("b"), None),
            raw("Z", Some("c"), None),
        ];

        let set = CompiledRuleSet::compile(&rows);
        let names: Vec<&str> = set.rules().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Z", "A"]);
    }

    #[test]
    fn test_empty_include_cell_still_appends_a_clause() {
        let rows = vec![raw("A", None, Some("used"))];

        let set = CompiledRuleSet::compile(&rows);
        let a = set.get("A").unwrap();
        assert_eq!(a.include_clauses.len(), 1);
        assert!(a.include_clauses[0].keywords.is_empty());
        assert!(!a.include_clauses[0].satisfied_by("anything at all"));
    }

    #[test]
    fn test_identical_clauses_are_not_deduplicated() {
        let rows = vec![raw("A", Some("red"), None), raw("A", Some("red"), None)];

        let set = CompiledRuleSet::compile(&rows);
        assert_eq!(set.get("A").unwrap().include_clauses.len(), 2);
    }

    #[test]
    fn test_clause_satisfaction() {
        let and_clause = KeywordClause {
            keywords: vec!["red".to_string(), "shoes".to_string()],
            operator: Operator::And,
        };
        assert!(and_clause.satisfied_by("red running shoes"));
        assert!(!and_clause.satisfied_by("red running socks"));

        let or_clause = KeywordClause {
            keywords: vec!["red".to_string(), "shoes".to_string()],
            operator: Operator::Or,
        };
        assert!(or_clause.satisfied_by("red running socks"));
        assert!(!or_clause.satisfied_by("blue running socks"));
    }

    #[test]
    fn test_from_table_skips_non_string_rule_names() {
        let mut table = Table::new(vec![
            "Rule".to_string(),
            "Include".to_string(),
            "Exclude".to_string(),
        ]);
        table.push_row(vec![
            Cell::Text("A".to_string()),
            Cell::Text("red".to_string()),
            Cell::Empty,
        ]);
        table.push_row(vec![
            Cell::Number(7.0),
            Cell::Text("blue".to_string()),
            Cell::Empty,
        ]);

        let rows = RawRuleRow::from_table(&table).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].rule, "A");
    }

    #[test]
    fn test_from_table_requires_columns() {
        let table = Table::new(vec!["Rule".to_string(), "Include".to_string()]);
        let err = RawRuleRow::from_table(&table).unwrap_err();
        assert!(err.to_string().contains("Exclude"));
    }

    #[test]
    fn test_non_string_expression_cells_degrade_to_none() {
        let mut table = Table::new(vec![
            "Rule".to_string(),
            "Include".to_string(),
            "Exclude".to_string(),
        ]);
        table.push_row(vec![
            Cell::Text("A".to_string()),
            Cell::Number(12.0),
            Cell::Bool(false),
        ]);

        let rows = RawRuleRow::from_table(&table).unwrap();
        assert_eq!(rows[0].include, None);
        assert_eq!(rows[0].exclude, None);
    }
}
