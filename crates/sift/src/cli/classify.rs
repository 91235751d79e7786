use comfy_table::{presets::UTF8_FULL, Cell, Color, Table};
use console::style;
use dialoguer::Confirm;
use serde_json::json;
use sift_lib::util::create_spinner;
use sift_lib::{
    classify, load_workbook, write_workbook, Classification, CompiledRuleSet, Config, RawRuleRow,
    Result, Verdict,
};
use std::path::{Path, PathBuf};

pub fn handle_classify_command(
    workbook: &Path,
    output: Option<PathBuf>,
    product_sheet: Option<String>,
    rules_sheet: Option<String>,
    force: bool,
    json_output: bool,
    mut config: Config,
    verbose: bool,
) -> Result<()> {
    if let Some(sheet) = product_sheet {
        config.product_sheet = sheet;
    }
    if let Some(sheet) = rules_sheet {
        config.rules_sheet = sheet;
    }

    let spinner = create_spinner("Reading workbook...");
    let (products, rules_table) = load_workbook(workbook, &config)?;
    spinner.finish_and_clear();

    let raw_rows = RawRuleRow::from_table(&rules_table)?;
    let rules = CompiledRuleSet::compile(&raw_rows);

    if rules.is_empty() {
        println!(
            "{}",
            style("No rules found; every title will come out as Exclude").yellow()
        );
    }

    if verbose {
        println!(
            "{} {} titles, {} rules",
            style(">>>").cyan(),
            style(products.len()).bold(),
            style(rules.len()).bold()
        );
    }

    let outcome = classify(&products, &rules)?;

    let output_path = output.unwrap_or_else(|| workbook.with_file_name(&config.output_name));
    if output_path.exists() && !force {
        let overwrite = Confirm::new()
            .with_prompt(format!("{} exists, overwrite?", output_path.display()))
            .default(false)
            .interact()?;
        if !overwrite {
            println!("{}", style("Aborted").yellow());
            return Ok(());
        }
    }

    let spinner = create_spinner("Writing output workbook...");
    write_workbook(&output_path, &products, &outcome, &config)?;
    spinner.finish_and_clear();

    let summary = Summary::new(&outcome, products.len(), rules.len());

    if json_output {
        print_json_summary(workbook, &output_path, &summary)?;
    } else {
        print_summary(&output_path, &summary);
    }

    Ok(())
}

struct Summary {
    titles: usize,
    rules: usize,
    matched: usize,
    excluded: usize,
    conflicts: usize,
    output_rows: usize,
}

impl Summary {
    fn new(outcome: &Classification, titles: usize, rules: usize) -> Self {
        let count = |verdict: Verdict| {
            outcome
                .rows
                .iter()
                .filter(|row| row.verdict == verdict)
                .count()
        };

        Summary {
            titles,
            rules,
            matched: count(Verdict::Match),
            excluded: count(Verdict::Exclude),
            conflicts: count(Verdict::Conflict),
            output_rows: outcome.rows.len(),
        }
    }
}

fn print_summary(output_path: &Path, summary: &Summary) {
    println!(
        "\n{} Classified {} titles against {} rules",
        style("✓").green(),
        style(summary.titles).bold(),
        summary.rules
    );

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec![
        Cell::new("Result").fg(Color::Cyan),
        Cell::new("Titles").fg(Color::Cyan),
    ]);
    table.add_row(vec![Cell::new("Match"), Cell::new(summary.matched)]);
    table.add_row(vec![Cell::new("Exclude"), Cell::new(summary.excluded)]);
    table.add_row(vec![Cell::new("Conflict"), Cell::new(summary.conflicts)]);
    println!("{table}");

    if summary.output_rows > summary.titles {
        println!(
            "  {} conflicted titles expanded the output to {} rows",
            style(summary.conflicts).yellow(),
            summary.output_rows
        );
    }

    println!("  Output: {}", output_path.display());
}

fn print_json_summary(input: &Path, output: &Path, summary: &Summary) -> Result<()> {
    let report = json!({
        "input": input.display().to_string(),
        "output": output.display().to_string(),
        "titles": summary.titles,
        "rules": summary.rules,
        "matched": summary.matched,
        "excluded": summary.excluded,
        "conflicts": summary.conflicts,
        "output_rows": summary.output_rows,
        "generated_at": chrono::Utc::now().to_rfc3339(),
    });

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
