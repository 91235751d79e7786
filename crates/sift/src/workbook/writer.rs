//! Output workbook writing via rust_xlsxwriter.
//!
//! The classified table lands on one sheet with bold headers. For each
//! output row the matched-keyword spans are resolved against the title
//! and every span's substring is written, with the configured solid
//! fill, into the cells right of the `TITLE (highlighted)` column.

use crate::classify::{find_spans, Classification, HIGHLIGHT_COLUMN};
use crate::config::Config;
use crate::error::{Result, SiftError};
use crate::table::{Cell, Table};
use rust_xlsxwriter::{Color, Format, Workbook, Worksheet};
use std::path::Path;

pub fn write_workbook(
    path: &Path,
    products: &Table,
    classification: &Classification,
    config: &Config,
) -> Result<()> {
    let table = classification.to_table(products)?;
    let highlight_idx = table.require_column("output", HIGHLIGHT_COLUMN)?;

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Classified")?;

    let header_format = Format::new().set_bold();
    let fill_format =
        Format::new().set_background_color(Color::RGB(config.highlight_color));

    for (col, name) in table.columns().iter().enumerate() {
        worksheet.write_string_with_format(0, col_num(col)?, name.as_str(), &header_format)?;
    }

    for (row_idx, (cells, out_row)) in table
        .rows()
        .iter()
        .zip(classification.rows.iter())
        .enumerate()
    {
        let excel_row = row_idx as u32 + 1;

        for (col, cell) in cells.iter().enumerate() {
            write_cell(worksheet, excel_row, col_num(col)?, cell)?;
        }

        // Span rendering: one filled cell per occurrence, to the right
        // of the highlighted column. Non-string titles get no spans.
        if let Some(title) = cells[highlight_idx].as_text() {
            let keywords = out_row.matched_keywords.iter().map(String::as_str);
            for (i, span) in find_spans(title, keywords).iter().enumerate() {
                worksheet.write_string_with_format(
                    excel_row,
                    col_num(highlight_idx + 1 + i)?,
                    span.slice(title),
                    &fill_format,
                )?;
            }
        }
    }

    workbook.save(path)?;
    log::info!("wrote {} rows to {}", table.len(), path.display());

    Ok(())
}

fn write_cell(worksheet: &mut Worksheet, row: u32, col: u16, cell: &Cell) -> Result<()> {
    match cell {
        Cell::Text(s) => {
            worksheet.write_string(row, col, s.as_str())?;
        }
        Cell::Number(n) => {
            worksheet.write_number(row, col, *n)?;
        }
        Cell::Bool(b) => {
            worksheet.write_boolean(row, col, *b)?;
        }
        Cell::Empty => {}
    }
    Ok(())
}

fn col_num(col: usize) -> Result<u16> {
    u16::try_from(col)
        .map_err(|_| SiftError::WorkbookWrite(rust_xlsxwriter::XlsxError::RowColumnLimitError))
}
