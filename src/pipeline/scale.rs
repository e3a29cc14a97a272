use tracing::debug;

use super::collect::is_value_table;
use super::normalize::{CellValue, clean_numeric};

/// A chartable table after header/data split and value rescaling. Every
/// rescaled series value lies in `[0, 100]`; `scale_bound` is the true-unit
/// upper axis value the multiplier was derived from.
#[derive(Debug, Clone)]
pub struct NormalizedTable {
    pub head: Vec<String>,
    pub data_rows: Vec<DataRow>,
    pub scale_bound: u64,
}

#[derive(Debug, Clone)]
pub struct DataRow {
    pub label: String,
    pub values: Vec<String>,
}

/// Split a gated row list into header and data rows and rescale all numeric
/// series values onto the 0..100 range. Returns `None` when the validity
/// gate rejects the rows; that is a classification outcome, not an error.
pub fn normalize_table(rows: &[Vec<CellValue>]) -> Option<NormalizedTable> {
    if !is_value_table(rows) {
        return None;
    }

    let (head_row, body) = rows.split_first()?;
    let head = head_row
        .iter()
        .map(|cell| cell.text().to_string())
        .collect::<Vec<String>>();

    let tallest = body
        .iter()
        .flat_map(|row| row.iter().skip(1))
        .filter_map(cell_magnitude)
        .fold(f64::NAN, f64::max);

    let scale_bound = scale_bound_for(tallest);
    let multiplier = 100.0 / scale_bound as f64;

    let mut data_rows = Vec::with_capacity(body.len());
    for row in body {
        let Some((label, series)) = row.split_first() else {
            continue;
        };

        let values = series
            .iter()
            .map(|cell| rescale_cell(cell, multiplier))
            .collect::<Vec<String>>();

        data_rows.push(DataRow {
            label: label.text().to_string(),
            values,
        });
    }

    debug!(
        tallest,
        scale_bound,
        data_rows = data_rows.len(),
        head_cells = head.len(),
        "normalized value table"
    );

    Some(NormalizedTable {
        head,
        data_rows,
        scale_bound,
    })
}

/// The value a cell contributes to the magnitude envelope. Label cells and
/// numeric cells whose cleaned text still fails to parse contribute nothing;
/// neither disqualifies the row.
fn cell_magnitude(cell: &CellValue) -> Option<f64> {
    match cell {
        CellValue::Numeric(text) => clean_numeric(text).parse().ok(),
        CellValue::Label(_) => None,
    }
}

/// Round the observed maximum up to "one more than the leading digit,
/// followed by zeros", floored at 100. This keeps every rescaled value in
/// `[0, 100]` while the true axis range stays recoverable.
fn scale_bound_for(tallest: f64) -> u64 {
    if !tallest.is_finite() {
        return 100;
    }

    let floored = format!("{}", tallest.floor() as u64);
    let lead = floored
        .chars()
        .next()
        .and_then(|ch| ch.to_digit(10))
        .unwrap_or(0) as u64;
    let trailing = floored.len() - 1;

    let candidate = 10u64
        .checked_pow(trailing as u32)
        .and_then(|scale| scale.checked_mul(lead + 1))
        .unwrap_or(u64::MAX);

    candidate.max(100)
}

fn rescale_cell(cell: &CellValue, multiplier: f64) -> String {
    match cell {
        CellValue::Numeric(text) => match text.parse::<f64>() {
            Ok(value) => format!("{}", value * multiplier),
            Err(_) => text.clone(),
        },
        CellValue::Label(text) => text.clone(),
    }
}
