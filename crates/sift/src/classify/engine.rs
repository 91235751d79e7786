//! Classification of a product table against a compiled rule set.
//!
//! Every title is evaluated against every rule, in rule order. A title
//! matching two or more rules expands into one output row per matched
//! rule, so the output row count is data-dependent and callers must not
//! assume a 1:1 mapping to input rows.

use crate::classify::matcher::match_title;
use crate::classify::rules::CompiledRuleSet;
use crate::error::Result;
use crate::table::{Cell, Table};
use std::collections::BTreeSet;

pub const TITLE_COLUMN: &str = "TITLE";
pub const RESULT_COLUMN: &str = "Result";
pub const HIGHLIGHT_COLUMN: &str = "TITLE (highlighted)";

/// Header of the numbered rule-match column for a 0-based slot.
pub fn slot_column(slot: usize) -> String {
    format!("Rule match {}", slot + 1)
}

/// The Result-column value of one output row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Match,
    Exclude,
    Conflict,
    Blank,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Match => "Match",
            Verdict::Exclude => "Exclude",
            Verdict::Conflict => "Conflict",
            Verdict::Blank => "",
        }
    }
}

/// One output row. `slot` is the 0-based index of the `Rule match N`
/// column this row's rule name lands in; `matched_keywords` is the
/// union across every rule the source row matched and feeds the
/// highlight resolver.
#[derive(Debug, Clone)]
pub struct ClassifiedRow {
    pub source_row: usize,
    pub slot: usize,
    pub rule_name: String,
    pub verdict: Verdict,
    pub matched_keywords: BTreeSet<String>,
}

/// The full classification outcome: output rows in order, plus the
/// maximum simultaneous match count observed (at least 1, so the output
/// always has a `Rule match 1` column).
#[derive(Debug, Clone)]
pub struct Classification {
    pub rows: Vec<ClassifiedRow>,
    pub max_matches: usize,
}

/// Classify every product row against every rule.
///
/// Fails up front when the product table has no `TITLE` column. A row
/// whose TITLE cell is not a string matches nothing and comes out as
/// `Exclude`.
pub fn classify(products: &Table, rules: &CompiledRuleSet) -> Result<Classification> {
    let title_idx = products.require_column("product", TITLE_COLUMN)?;

    let mut rows = Vec::with_capacity(products.len());
    let mut max_matches = 1;

    for (source_row, row) in products.rows().iter().enumerate() {
        let title = row[title_idx].as_text();

        let mut matched_names: Vec<&str> = Vec::new();
        let mut keyword_union = BTreeSet::new();

        if let Some(title) = title {
            for rule in rules.rules() {
                let result = match_title(title, rule);
                if result.matched {
                    matched_names.push(rule.name.as_str());
                    keyword_union.extend(result.keywords);
                }
            }
        }

        match matched_names.len() {
            0 => rows.push(ClassifiedRow {
                source_row,
                slot: 0,
                rule_name: String::new(),
                verdict: Verdict::Exclude,
                matched_keywords: BTreeSet::new(),
            }),
            1 => rows.push(ClassifiedRow {
                source_row,
                slot: 0,
                rule_name: matched_names[0].to_string(),
                verdict: Verdict::Match,
                matched_keywords: keyword_union,
            }),
            count => {
                max_matches = max_matches.max(count);
                for (slot, name) in matched_names.iter().enumerate() {
                    rows.push(ClassifiedRow {
                        source_row,
                        slot,
                        rule_name: name.to_string(),
                        verdict: if slot == 0 { Verdict::Conflict } else { Verdict::Blank },
                        matched_keywords: keyword_union.clone(),
                    });
                }
            }
        }
    }

    log::debug!(
        "classified {} titles against {} rules into {} rows",
        products.len(),
        rules.len(),
        rows.len()
    );

    Ok(Classification { rows, max_matches })
}

impl Classification {
    /// Render the outcome as a flat table: the original product columns,
    /// then `Rule match 1..k`, `Result`, and a copy of the title under
    /// `TITLE (highlighted)`. Highlighting itself is a writer concern;
    /// the title cell here is always the unmodified original.
    pub fn to_table(&self, products: &Table) -> Result<Table> {
        let title_idx = products.require_column("product", TITLE_COLUMN)?;

        let mut columns: Vec<String> = products.columns().to_vec();
        for slot in 0..self.max_matches {
            columns.push(slot_column(slot));
        }
        columns.push(RESULT_COLUMN.to_string());
        columns.push(HIGHLIGHT_COLUMN.to_string());

        let mut table = Table::new(columns);
        for row in &self.rows {
            let source = &products.rows()[row.source_row];

            let mut cells = source.clone();
            for slot in 0..self.max_matches {
                if slot == row.slot {
                    cells.push(Cell::Text(row.rule_name.clone()));
                } else {
                    cells.push(Cell::Empty);
                }
            }
            cells.push(Cell::Text(row.verdict.as_str().to_string()));
            cells.push(source[title_idx].clone());

            table.push_row(cells);
        }

        Ok(table)
    }
}
