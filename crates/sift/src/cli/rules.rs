use comfy_table::{presets::UTF8_FULL, Cell, Color, Table};
use console::style;
use sift_lib::{load_sheet, CompiledRuleSet, Config, RawRuleRow, Result};
use std::path::Path;

pub fn handle_rules_command(
    workbook: &Path,
    rules_sheet: Option<String>,
    mut config: Config,
) -> Result<()> {
    if let Some(sheet) = rules_sheet {
        config.rules_sheet = sheet;
    }

    let rules_table = load_sheet(workbook, &config.rules_sheet)?;
    let raw_rows = RawRuleRow::from_table(&rules_table)?;
    let rules = CompiledRuleSet::compile(&raw_rows);

    if rules.is_empty() {
        println!("{}", style("No rules defined").yellow());
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec![
        Cell::new("Rule").fg(Color::Cyan),
        Cell::new("Clause").fg(Color::Cyan),
        Cell::new("Operator").fg(Color::Cyan),
        Cell::new("Keywords").fg(Color::Cyan),
        Cell::new("Excludes").fg(Color::Cyan),
    ]);

    for rule in rules.rules() {
        let excludes = rule
            .exclude_keywords
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ");

        for (i, clause) in rule.include_clauses.iter().enumerate() {
            table.add_row(vec![
                Cell::new(if i == 0 { rule.name.as_str() } else { "" }),
                Cell::new(i + 1),
                Cell::new(clause.operator.as_str()),
                Cell::new(clause.keywords.join(", ")),
                Cell::new(if i == 0 { excludes.as_str() } else { "" }),
            ]);
        }
    }

    println!("{table}");
    println!(
        "{} rules, {} clauses",
        style(rules.len()).bold(),
        raw_rows.len()
    );

    Ok(())
}
