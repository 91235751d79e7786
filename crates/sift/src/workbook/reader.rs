//! Workbook loading via calamine.
//!
//! The first row of a sheet is its header row; header names are trimmed
//! before any column lookup. Validation of required columns happens here,
//! before any classification work starts.

use crate::classify::{EXCLUDE_COLUMN, INCLUDE_COLUMN, RULE_COLUMN, TITLE_COLUMN};
use crate::config::Config;
use crate::error::{Result, SiftError};
use crate::table::{Cell, Table};
use calamine::{open_workbook, Data, Reader, Xlsx};
use std::path::Path;

/// Load the product and rules tables from one workbook and validate
/// their required columns.
pub fn load_workbook(path: &Path, config: &Config) -> Result<(Table, Table)> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;

    let products = read_sheet(&mut workbook, &config.product_sheet)?;
    let rules = read_sheet(&mut workbook, &config.rules_sheet)?;

    products.require_column("product", TITLE_COLUMN)?;
    for column in [RULE_COLUMN, INCLUDE_COLUMN, EXCLUDE_COLUMN] {
        rules.require_column("rules", column)?;
    }

    log::debug!(
        "loaded {} product rows and {} rule rows from {}",
        products.len(),
        rules.len(),
        path.display()
    );

    Ok((products, rules))
}

/// Load a single sheet as a table, without column validation.
pub fn load_sheet(path: &Path, sheet: &str) -> Result<Table> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;
    read_sheet(&mut workbook, sheet)
}

fn read_sheet<R>(workbook: &mut Xlsx<R>, sheet: &str) -> Result<Table>
where
    R: std::io::Read + std::io::Seek,
{
    if !workbook.sheet_names().iter().any(|name| name == sheet) {
        return Err(SiftError::MissingSheet(sheet.to_string()));
    }

    let range = workbook.worksheet_range(sheet)?;
    let mut rows = range.rows();

    let Some(header) = rows.next() else {
        return Ok(Table::default());
    };

    let columns = header.iter().map(|data| data.to_string()).collect();
    let mut table = Table::new(columns);

    for row in rows {
        table.push_row(row.iter().map(cell_from_data).collect());
    }

    Ok(table)
}

fn cell_from_data(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::String(s) => Cell::Text(s.clone()),
        Data::Float(f) => Cell::Number(*f),
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Bool(b) => Cell::Bool(*b),
        Data::DateTime(dt) => Cell::Number(dt.as_f64()),
        Data::DateTimeIso(s) => Cell::Text(s.clone()),
        Data::DurationIso(s) => Cell::Text(s.clone()),
        // Formula errors carry no usable value.
        Data::Error(_) => Cell::Empty,
    }
}
