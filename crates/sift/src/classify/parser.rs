//! Keyword expression parsing.
//!
//! One include or exclude cell holds a free-text expression like
//! `"red and blue"` or `"shirt or dress"`. The whole cell is normalized
//! (trimmed, lowercased) and split on the literal separators `" and "`
//! and `" or "`; a single operator applies to all resulting keywords.
//!
//! Mixing both separators in one cell is split blindly with the one
//! computed operator applied to every token. That is the documented
//! behavior of the rule format, not something to repair here.

/// How the keywords of one clause combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    And,
    Or,
}

impl Operator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::And => "and",
            Operator::Or => "or",
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

const SEPARATORS: [&str; 2] = [" and ", " or "];

/// Parse one expression cell into lowercased keywords and an operator.
///
/// An absent cell (missing, or holding a non-string value upstream)
/// yields no keywords and no operator. Exclude expressions always
/// combine with OR; include expressions use OR only when the literal
/// `" or "` occurs, defaulting to AND otherwise.
pub fn parse_expression(text: Option<&str>, is_exclude: bool) -> (Vec<String>, Option<Operator>) {
    let Some(raw) = text else {
        return (Vec::new(), None);
    };

    let normalized = raw.trim().to_lowercase();
    let operator = if is_exclude || normalized.contains(" or ") {
        Operator::Or
    } else {
        Operator::And
    };

    (split_keywords(&normalized), Some(operator))
}

/// Split on whichever separator occurs first, repeatedly; trim tokens
/// and drop empties, preserving their order in the text.
fn split_keywords(text: &str) -> Vec<String> {
    let mut keywords = Vec::new();
    let mut rest = text;

    loop {
        let next = SEPARATORS
            .iter()
            .filter_map(|sep| rest.find(sep).map(|pos| (pos, sep.len())))
            .min_by_key(|(pos, _)| *pos);

        match next {
            Some((pos, sep_len)) => {
                push_keyword(&mut keywords, &rest[..pos]);
                rest = &rest[pos + sep_len..];
            }
            None => {
                push_keyword(&mut keywords, rest);
                break;
            }
        }
    }

    keywords
}

fn push_keyword(keywords: &mut Vec<String>, token: &str) {
    let token = token.trim();
    if !token.is_empty() {
        keywords.push(token.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_and_expression() {
        let (keywords, operator) = parse_expression(Some(" red and blue "), false);
        assert_eq!(keywords, vec!["red", "blue"]);
        assert_eq!(operator, Some(Operator::And));
    }

    #[test]
    fn test_or_expression() {
        let (keywords, operator) = parse_expression(Some("red or blue"), false);
        assert_eq!(keywords, vec!["red", "blue"]);
        assert_eq!(operator, Some(Operator::Or));
    }

    #[test]
    fn test_absent_cell() {
        let (keywords, operator) = parse_expression(None, false);
        assert!(keywords.is_empty());
        assert_eq!(operator, None);
    }

    #[test]
    fn test_single_keyword_defaults_to_and() {
        let (keywords, operator) = parse_expression(Some("Dress"), false);
        assert_eq!(keywords, vec!["dress"]);
        assert_eq!(operator, Some(Operator::And));
    }

    #[test]
    fn test_exclude_is_always_or() {
        let (keywords, operator) = parse_expression(Some("red and blue"), true);
        assert_eq!(keywords, vec!["red", "blue"]);
        assert_eq!(operator, Some(Operator::Or));
    }

    #[test]
    fn test_whole_text_is_lowercased() {
        let (keywords, _) = parse_expression(Some("RED Or BLUE"), false);
        assert_eq!(keywords, vec!["red", "blue"]);
    }

    #[test]
    fn test_mixed_separators_split_blindly() {
        // One operator (OR, since " or " occurs) applies to all three
        // tokens regardless of which separator produced each split.
        let (keywords, operator) = parse_expression(Some("red and blue or green"), false);
        assert_eq!(keywords, vec!["red", "blue", "green"]);
        assert_eq!(operator, Some(Operator::Or));
    }

    #[test]
    fn test_empty_tokens_are_dropped() {
        let (keywords, _) = parse_expression(Some("red and  and blue"), false);
        assert_eq!(keywords, vec!["red", "blue"]);
    }

    #[test]
    fn test_whitespace_only_cell() {
        let (keywords, operator) = parse_expression(Some("   "), false);
        assert!(keywords.is_empty());
        assert_eq!(operator, Some(Operator::And));
    }

    #[test]
    fn test_multiword_keywords_survive() {
        let (keywords, _) = parse_expression(Some("running shoes or hiking boots"), false);
        assert_eq!(keywords, vec!["running shoes", "hiking boots"]);
    }
}
