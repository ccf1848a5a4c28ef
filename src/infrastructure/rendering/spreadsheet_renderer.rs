use std::collections::HashSet;

use rust_xlsxwriter::{Workbook, Worksheet, XlsxError};
use serde_json::{Map, Value};

use crate::application::ports::RenderError;
use crate::domain::{SheetContent, SpreadsheetContent};

const MAX_SHEET_NAME_CHARS: usize = 31;
const MAX_CELL_CHARS: usize = 32_767;
const FORBIDDEN_SHEET_CHARS: [char; 7] = ['[', ']', ':', '*', '?', '/', '\\'];
const EMPTY_SHEET_MESSAGE: &str = "No data available";

#[derive(Default)]
pub struct SpreadsheetRenderer;

impl SpreadsheetRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, content: &SpreadsheetContent) -> Result<Vec<u8>, RenderError> {
        self.build(content).map_err(|e| RenderError::Spreadsheet(e.to_string()))
    }

    fn build(&self, content: &SpreadsheetContent) -> Result<Vec<u8>, XlsxError> {
        let mut workbook = Workbook::new();
        let mut used_names = HashSet::new();

        if content.sheets.is_empty() {
            let worksheet = workbook.add_worksheet();
            worksheet.set_name(sheet_name("Sheet1", 0, &mut used_names))?;
            worksheet.write_string(0, 0, EMPTY_SHEET_MESSAGE)?;
        }

        for (index, sheet) in content.sheets.iter().enumerate() {
            let worksheet = workbook.add_worksheet();
            worksheet.set_name(sheet_name(&sheet.name, index, &mut used_names))?;
            write_sheet(worksheet, sheet)?;
        }

        workbook.save_to_buffer()
    }
}

fn write_sheet(worksheet: &mut Worksheet, sheet: &SheetContent) -> Result<(), XlsxError> {
    if sheet.rows.is_empty() {
        worksheet.write_string(0, 0, EMPTY_SHEET_MESSAGE)?;
        return Ok(());
    }

    let columns = sheet.columns();
    for (col, header) in columns.iter().enumerate() {
        worksheet.write_string(0, col as u16, *header)?;
    }

    for (row_index, row) in sheet.rows.iter().enumerate() {
        let row_number = (row_index + 1) as u32;
        for (col, header) in columns.iter().enumerate() {
            write_cell(worksheet, row_number, col as u16, row, header)?;
        }
    }

    Ok(())
}

fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    values: &Map<String, Value>,
    header: &str,
) -> Result<(), XlsxError> {
    match values.get(header) {
        None | Some(Value::Null) => {}
        Some(Value::String(s)) => {
            worksheet.write_string(row, col, truncate(s))?;
        }
        Some(Value::Bool(b)) => {
            worksheet.write_boolean(row, col, *b)?;
        }
        Some(Value::Number(n)) => match n.as_f64() {
            Some(number) => {
                worksheet.write_number(row, col, number)?;
            }
            None => {
                worksheet.write_string(row, col, n.to_string())?;
            }
        },
        Some(nested) => {
            worksheet.write_string(row, col, truncate(&nested.to_string()))?;
        }
    }
    Ok(())
}

fn truncate(text: &str) -> String {
    text.chars().take(MAX_CELL_CHARS).collect()
}

/// Applies Excel's sheet naming rules and de-duplicates case-insensitively.
fn sheet_name(requested: &str, index: usize, used: &mut HashSet<String>) -> String {
    let cleaned: String = requested
        .chars()
        .filter(|c| !FORBIDDEN_SHEET_CHARS.contains(c))
        .collect();
    let cleaned = cleaned.trim().trim_matches('\'').trim();

    let base = if cleaned.is_empty() || cleaned.eq_ignore_ascii_case("history") {
        format!("Sheet{}", index + 1)
    } else {
        cleaned.chars().take(MAX_SHEET_NAME_CHARS).collect()
    };

    let mut candidate = base.clone();
    let mut suffix = 2;
    while used.contains(&candidate.to_lowercase()) {
        let tail = format!(" ({suffix})");
        let keep = MAX_SHEET_NAME_CHARS - tail.chars().count();
        candidate = format!("{}{tail}", base.chars().take(keep).collect::<String>());
        suffix += 1;
    }

    used.insert(candidate.to_lowercase());
    candidate
}
