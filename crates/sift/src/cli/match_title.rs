use console::style;
use sift_lib::{load_sheet, match_title, CompiledRuleSet, Config, RawRuleRow, Result, Verdict};
use std::path::Path;

pub fn handle_match_command(
    workbook: &Path,
    title: &str,
    rules_sheet: Option<String>,
    mut config: Config,
) -> Result<()> {
    if let Some(sheet) = rules_sheet {
        config.rules_sheet = sheet;
    }

    let rules_table = load_sheet(workbook, &config.rules_sheet)?;
    let raw_rows = RawRuleRow::from_table(&rules_table)?;
    let rules = CompiledRuleSet::compile(&raw_rows);

    println!("Title: {}\n", style(title).bold());

    let mut matched = Vec::new();
    for rule in rules.rules() {
        let result = match_title(title, rule);
        if result.matched {
            let keywords = result
                .keywords
                .iter()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", ");
            println!(
                "  {} {} (keywords: {})",
                style("✓").green(),
                rule.name,
                keywords
            );
            matched.push(rule.name.clone());
        } else {
            println!("  {} {}", style("·").dim(), rule.name);
        }
    }

    let verdict = match matched.len() {
        0 => Verdict::Exclude,
        1 => Verdict::Match,
        _ => Verdict::Conflict,
    };

    println!("\nResult: {}", style(verdict.as_str()).bold());
    if verdict == Verdict::Conflict {
        println!("  Matched rules: {}", matched.join(", "));
    }

    Ok(())
}
