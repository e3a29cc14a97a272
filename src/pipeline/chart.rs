use std::borrow::Cow;

use serde::Serialize;
use tracing::debug;

use super::prune::{DEFAULT_MAX_POINTS, prune};
use super::scale::NormalizedTable;

pub const CHART_BASE_URL: &str = "http://chart.apis.google.com/chart";

const SERIES_PALETTE: [&str; 4] = ["3072F3", "FF0000", "307203", "FF00FF"];

/// Series count the stock palette is sized for before colors start
/// repeating. Not a ceiling: series beyond it reuse colors cyclically.
pub const DEFAULT_PALETTE_CYCLES: usize = 5;

#[derive(Debug, Clone)]
pub struct ChartOptions {
    pub width: u32,
    pub height: u32,
    pub max_axis_labels: usize,
    pub palette: Vec<String>,
    pub palette_cycles: usize,
    /// Percent-encode field values (series values, legend, axis labels,
    /// title) before joining. The chart endpoint's classic format leaves
    /// them verbatim, delimiters included, so this stays off unless asked
    /// for.
    pub encode_fields: bool,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            width: 800,
            height: 350,
            max_axis_labels: DEFAULT_MAX_POINTS,
            palette: SERIES_PALETTE.iter().map(|color| color.to_string()).collect(),
            palette_cycles: DEFAULT_PALETTE_CYCLES,
            encode_fields: false,
        }
    }
}

/// Complete parameter set for one requested line-chart rendering.
#[derive(Debug, Clone, Serialize)]
pub struct ChartDescriptor {
    pub width: u32,
    pub height: u32,
    pub colors: Vec<String>,
    pub series: Vec<Vec<String>>,
    pub legend: Vec<String>,
    pub axis_labels: Vec<String>,
    pub scale_bound: u64,
    pub title: Option<String>,
    #[serde(skip)]
    encode_fields: bool,
}

/// Assemble a descriptor from a normalized table. A table with fewer than
/// two data rows has no lines to compare and yields nothing.
pub fn encode(
    table: &NormalizedTable,
    title: Option<&str>,
    options: &ChartOptions,
) -> Option<ChartDescriptor> {
    if table.data_rows.len() < 2 {
        return None;
    }

    let stock_palette;
    let palette: &[String] = if options.palette.is_empty() {
        stock_palette = SERIES_PALETTE
            .iter()
            .map(|color| color.to_string())
            .collect::<Vec<String>>();
        &stock_palette
    } else {
        &options.palette
    };

    let covered = palette.len() * options.palette_cycles;
    if table.data_rows.len() > covered {
        debug!(
            series = table.data_rows.len(),
            covered, "series count exceeds palette coverage; colors repeat"
        );
    }

    let colors = table
        .data_rows
        .iter()
        .enumerate()
        .map(|(index, _)| palette[index % palette.len()].clone())
        .collect();

    let series = table
        .data_rows
        .iter()
        .map(|row| row.values.clone())
        .collect();

    let legend = table
        .data_rows
        .iter()
        .map(|row| row.label.clone())
        .collect();

    let axis_labels = prune(&table.head[1..], options.max_axis_labels);

    Some(ChartDescriptor {
        width: options.width,
        height: options.height,
        colors,
        series,
        legend,
        axis_labels,
        scale_bound: table.scale_bound,
        title: title.map(|text| text.to_string()),
        encode_fields: options.encode_fields,
    })
}

impl ChartDescriptor {
    /// Serialize to the rendering endpoint's wire format: base request plus
    /// `&`-joined parameters.
    pub fn to_url(&self) -> String {
        let mut params = Vec::new();

        params.push(format!("chco={}", self.colors.join(",")));

        // unparsable cells survive into the series as label text, so the
        // value groups need the same field treatment as legend and labels
        let values = self
            .series
            .iter()
            .map(|group| {
                group
                    .iter()
                    .map(|value| self.field(value))
                    .collect::<Vec<Cow<'_, str>>>()
                    .join(",")
            })
            .collect::<Vec<String>>()
            .join("|");
        params.push(format!("chd=t:{values}"));

        params.push(format!("chdl={}", self.join_fields(&self.legend)));
        params.push(format!("chxl=0:|{}", self.join_fields(&self.axis_labels)));
        params.push("chxs=0,,12,-1,lt".to_string());
        params.push(format!("chxr=1,0,{}", self.scale_bound));

        if let Some(title) = &self.title {
            params.push(format!("chtt={}", self.field(title)));
        }

        format!(
            "{CHART_BASE_URL}?cht=lc&chxt=x,y&chs={}x{}&{}",
            self.width,
            self.height,
            params.join("&")
        )
    }

    fn join_fields(&self, fields: &[String]) -> String {
        fields
            .iter()
            .map(|value| self.field(value))
            .collect::<Vec<Cow<'_, str>>>()
            .join("|")
    }

    fn field<'a>(&self, value: &'a str) -> Cow<'a, str> {
        if self.encode_fields {
            urlencoding::encode(value)
        } else {
            Cow::Borrowed(value)
        }
    }
}
