//! Conversion between raw row cells and advisor records.

use crate::error::MalformedRow;
use crate::models::{column, Advisor, COLUMN_COUNT};

/// Parse one data row.
///
/// Cells are trimmed and empty cells become absent fields. A row whose cells
/// are all blank yields `Ok(None)`. Only an unparseable id makes a row
/// malformed; every other field is taken as text.
pub(crate) fn parse_row(row: usize, cells: &[String]) -> Result<Option<Advisor>, MalformedRow> {
    if cells.iter().all(|cell| cell.trim().is_empty()) {
        return Ok(None);
    }

    let text = |index: usize| -> Option<String> {
        cells
            .get(index)
            .map(|cell| cell.trim())
            .filter(|cell| !cell.is_empty())
            .map(str::to_string)
    };

    let id = match text(column::ID) {
        Some(raw) => Some(
            parse_id(&raw)
                .ok_or_else(|| MalformedRow::new(row, format!("id is not a whole number: {raw}")))?,
        ),
        None => None,
    };

    Ok(Some(Advisor {
        id,
        first_name: text(column::FIRST_NAME),
        last_name: text(column::LAST_NAME),
        email: text(column::EMAIL),
        phone: text(column::PHONE),
        specialty: text(column::SPECIALTY),
        location: text(column::LOCATION),
    }))
}

/// Render a record as cells in canonical column order.
///
/// An absent id is written as `0`; absent text fields as empty cells.
pub(crate) fn to_cells(advisor: &Advisor) -> [String; COLUMN_COUNT] {
    let text = |value: &Option<String>| value.clone().unwrap_or_default();
    [
        advisor.id.unwrap_or(0).to_string(),
        text(&advisor.first_name),
        text(&advisor.last_name),
        text(&advisor.email),
        text(&advisor.phone),
        text(&advisor.specialty),
        text(&advisor.location),
    ]
}

/// Accepts integers and integral decimals such as `"7.0"`.
fn parse_id(raw: &str) -> Option<i64> {
    if let Ok(id) = raw.parse::<i64>() {
        return Some(id);
    }
    let value = raw.parse::<f64>().ok()?;
    if value.is_finite() && value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        Some(value as i64)
    } else {
        None
    }
}
