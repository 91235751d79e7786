pub mod engine;
pub mod highlight;
pub mod matcher;
pub mod parser;
pub mod rules;

pub use engine::{
    classify, slot_column, Classification, ClassifiedRow, Verdict, HIGHLIGHT_COLUMN,
    RESULT_COLUMN, TITLE_COLUMN,
};
pub use highlight::{find_spans, HighlightSpan};
pub use matcher::{match_title, MatchResult};
pub use parser::{parse_expression, Operator};
pub use rules::{
    CompiledRule, CompiledRuleSet, KeywordClause, RawRuleRow, EXCLUDE_COLUMN, INCLUDE_COLUMN,
    RULE_COLUMN,
};
