pub mod classify;
pub mod config;
pub mod error;
pub mod table;
pub mod util;
pub mod workbook;

pub use classify::{
    classify, find_spans, match_title, parse_expression, slot_column, Classification,
    ClassifiedRow, CompiledRule, CompiledRuleSet, HighlightSpan, KeywordClause, MatchResult,
    Operator, RawRuleRow, Verdict,
};
pub use config::Config;
pub use error::{Result, SiftError};
pub use table::{Cell, Table};
pub use workbook::{load_sheet, load_workbook, write_workbook};
