use rust_xlsxwriter::Workbook;
use sift_lib::{Cell, CompiledRuleSet, RawRuleRow, Table};
use std::path::Path;

/// Rule rows as the tests spell them: (name, include, exclude).
pub type RuleDef<'a> = (&'a str, Option<&'a str>, Option<&'a str>);

pub fn product_table(titles: &[&str]) -> Table {
    let mut table = Table::new(vec!["SKU".to_string(), "TITLE".to_string()]);
    for (i, title) in titles.iter().enumerate() {
        table.push_row(vec![
            Cell::Number(1000.0 + i as f64),
            Cell::Text(title.to_string()),
        ]);
    }
    table
}

pub fn compile_rules(rows: &[RuleDef]) -> CompiledRuleSet {
    let raw: Vec<RawRuleRow> = rows
        .iter()
        .map(|(name, include, exclude)| RawRuleRow {
            rule: name.to_string(),
            include: include.map(str::to_string),
            exclude: exclude.map(str::to_string),
        })
        .collect();
    CompiledRuleSet::compile(&raw)
}

/// Write an input workbook with the default sheet names, the way a user
/// would prepare one: a "Product detail" sheet with SKU/TITLE columns
/// and a "Rules" sheet with Rule/Include/Exclude columns.
pub fn write_input_workbook(path: &Path, titles: &[&str], rules: &[RuleDef]) {
    let mut workbook = Workbook::new();

    let sheet = workbook.add_worksheet();
    sheet.set_name("Product detail").unwrap();
    sheet.write_string(0, 0, "SKU").unwrap();
    sheet.write_string(0, 1, "TITLE").unwrap();
    for (i, title) in titles.iter().enumerate() {
        let row = i as u32 + 1;
        sheet.write_number(row, 0, 1000.0 + i as f64).unwrap();
        sheet.write_string(row, 1, *title).unwrap();
    }

    let sheet = workbook.add_worksheet();
    sheet.set_name("Rules").unwrap();
    sheet.write_string(0, 0, "Rule").unwrap();
    sheet.write_string(0, 1, "Include").unwrap();
    sheet.write_string(0, 2, "Exclude").unwrap();
    for (i, (name, include, exclude)) in rules.iter().enumerate() {
        let row = i as u32 + 1;
        sheet.write_string(row, 0, *name).unwrap();
        if let Some(include) = include {
            sheet.write_string(row, 1, *include).unwrap();
        }
        if let Some(exclude) = exclude {
            sheet.write_string(row, 2, *exclude).unwrap();
        }
    }

    workbook.save(path).unwrap();
}
