use std::sync::LazyLock;

use regex::Regex;

static NUMERIC_TOKENS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9.]+").expect("hardcoded numeric regex is statically valid"));

static NUMERIC_DASHED_TOKENS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[0-9.\-]+").expect("hardcoded dashed numeric regex is statically valid")
});

/// A cell's cleaned text, classified once at collection time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellValue {
    Numeric(String),
    Label(String),
}

impl CellValue {
    pub fn text(&self) -> &str {
        match self {
            Self::Numeric(text) | Self::Label(text) => text,
        }
    }
}

/// Concatenation of all digit-and-dot runs in `raw`.
pub fn clean_numeric(raw: &str) -> String {
    NUMERIC_TOKENS
        .find_iter(raw)
        .map(|token| token.as_str())
        .collect()
}

/// Concatenation of all digit, dot and dash runs in `raw`.
pub fn clean_numeric_dashed(raw: &str) -> String {
    NUMERIC_DASHED_TOKENS
        .find_iter(raw)
        .map(|token| token.as_str())
        .collect()
}

/// Drop non-breaking-space markers (entity text or U+00A0) and trim.
pub fn clean_label(raw: &str) -> String {
    raw.replace("&nbsp;", "")
        .replace('\u{a0}', "")
        .trim()
        .to_string()
}

/// Classify one cell. Numeric cleaning runs first; a cell whose cleaning
/// yields nothing degrades to a label rather than failing its row. This
/// applies to every cell of a row, series-label column included.
pub fn normalize_cell(raw: &str) -> CellValue {
    let numeric = clean_numeric_dashed(raw);
    if !numeric.is_empty() {
        return CellValue::Numeric(numeric);
    }

    CellValue::Label(clean_label(raw))
}
