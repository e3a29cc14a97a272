use super::normalize::{CellValue, normalize_cell};

/// Allowed row-length shortfall from the longest observed row. Malformed
/// markup commonly drops a trailing cell or two; anything shorter than this
/// belongs to a structurally different table.
pub const ROW_LENGTH_TOLERATION: usize = 3;

pub const MIN_ROWS: usize = 2;
pub const MIN_HEAD_CELLS: usize = 5;

/// Normalize every cell of every row, then drop rows whose length falls more
/// than the toleration below the longest row. Retained rows keep their
/// original order.
pub fn collect_rows(raw_rows: &[Vec<String>]) -> Vec<Vec<CellValue>> {
    let mut rows = raw_rows
        .iter()
        .map(|cells| {
            cells
                .iter()
                .map(|raw| normalize_cell(raw))
                .collect::<Vec<CellValue>>()
        })
        .collect::<Vec<Vec<CellValue>>>();

    let longest = rows.iter().map(Vec::len).max().unwrap_or(0);
    let len_limit = longest.saturating_sub(ROW_LENGTH_TOLERATION);
    rows.retain(|row| row.len() >= len_limit);

    rows
}

/// Whether a filtered row list is worth charting: at least a header row plus
/// one data row, and enough columns for a line to say anything.
pub fn is_value_table(rows: &[Vec<CellValue>]) -> bool {
    if rows.len() < MIN_ROWS {
        return false;
    }

    rows.first()
        .map(|head| head.len() >= MIN_HEAD_CELLS)
        .unwrap_or(false)
}
