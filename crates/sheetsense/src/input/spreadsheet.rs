//! Spreadsheet decoding (xlsx, xls). Only the first sheet is read.

use std::io::Cursor;

use calamine::{Data, Reader, open_workbook_auto_from_rs};
use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::error::{Result, SheetError};

use super::source::{Grid, Row};

/// Decode a workbook and return its first sheet as a [`Grid`].
///
/// Every cell becomes its display text; corrupt input is a
/// [`SheetError::Format`], never an empty grid.
pub fn read_first_sheet(bytes: &[u8]) -> Result<Grid> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))
        .map_err(|e| SheetError::Format(format!("Failed to open spreadsheet: {}", e)))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| SheetError::Format("Spreadsheet contains no sheets".to_string()))?
        .map_err(|e| SheetError::Format(format!("Failed to read first sheet: {}", e)))?;

    let (height, width) = range.get_size();
    tracing::debug!(height, width, "read first sheet");

    let rows: Vec<Row> = range
        .rows()
        .map(|row| row.iter().map(|cell| display_text(cell).trim().to_string()).collect())
        .collect();

    Ok(Grid::new(rows))
}

/// Render a cell the way a spreadsheet would show it as plain text.
pub fn display_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Float(n) => format_number(*n),
        Data::Int(n) => n.to_string(),
        Data::Bool(true) => "TRUE".to_string(),
        Data::Bool(false) => "FALSE".to_string(),
        Data::Error(e) => e.to_string(),
        Data::DateTime(dt) => format_serial_date(dt.as_f64()),
    }
}

/// Integral floats print without decimals so numeric phone cells survive.
fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

/// Format an Excel serial date (1900 system).
fn format_serial_date(serial: f64) -> String {
    match serial_to_datetime(serial) {
        Some(dt) if serial.fract().abs() > 1e-9 => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        Some(dt) => dt.format("%Y-%m-%d").to_string(),
        None => format_number(serial),
    }
}

fn serial_to_datetime(serial: f64) -> Option<NaiveDateTime> {
    if !serial.is_finite() || serial < 0.0 {
        return None;
    }
    // Day zero of the 1900 system, shifted for the 1900 leap year bug.
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?.and_hms_opt(0, 0, 0)?;
    let millis = (serial * 86_400_000.0).round() as i64;
    epoch.checked_add_signed(Duration::try_milliseconds(millis)?)
}
