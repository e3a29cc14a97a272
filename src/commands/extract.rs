use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::cli::{ExtractArgs, OutputFormat};
use crate::model::{ChartEntry, ChartReport};
use crate::pipeline::{ChartDescriptor, ChartOptions, chart_descriptors_from_html};
use crate::util::{read_input, write_json_stdout};

pub fn run(args: ExtractArgs) -> Result<()> {
    let html = read_input(args.input.as_deref())?;

    let options = ChartOptions {
        max_axis_labels: args.max_points,
        encode_fields: args.encode,
        ..ChartOptions::default()
    };
    let descriptors = chart_descriptors_from_html(&html, args.title.as_deref(), &options);

    info!(
        charts = descriptors.len(),
        format = args.format.as_str(),
        encode = args.encode,
        "extraction finished"
    );

    if descriptors.is_empty() {
        warn!("no table data found");
        if args.format == OutputFormat::Html {
            write_stdout(&render_empty_html())?;
        }
        return Ok(());
    }

    match args.format {
        OutputFormat::Urls => write_stdout(&render_urls(&descriptors)),
        OutputFormat::Json => write_json_stdout(&build_report(&descriptors, args.title)),
        OutputFormat::Html => write_stdout(&render_html(&descriptors)),
    }
}

fn build_report(descriptors: &[ChartDescriptor], title: Option<String>) -> ChartReport {
    let charts = descriptors
        .iter()
        .enumerate()
        .map(|(index, descriptor)| ChartEntry {
            index,
            url: descriptor.to_url(),
            descriptor: descriptor.clone(),
        })
        .collect::<Vec<ChartEntry>>();

    ChartReport {
        chart_count: charts.len(),
        title,
        charts,
    }
}

fn render_urls(descriptors: &[ChartDescriptor]) -> String {
    descriptors
        .iter()
        .map(|descriptor| descriptor.to_url())
        .collect::<Vec<String>>()
        .join("\n")
}

fn render_html(descriptors: &[ChartDescriptor]) -> String {
    descriptors
        .iter()
        .map(|descriptor| format!("<img src=\"{}\" /><br />", descriptor.to_url()))
        .collect::<String>()
}

fn render_empty_html() -> String {
    "InputError: no table data found.".to_string()
}

fn write_stdout(content: &str) -> Result<()> {
    let mut output = io::BufWriter::new(io::stdout().lock());
    writeln!(output, "{content}").context("failed to write output")?;
    output.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHARTABLE: &str = "<table><tbody>\
        <tr><td>Year</td><td>Q1</td><td>Q2</td><td>Q3</td><td>Q4</td></tr>\
        <tr><td>North</td><td>10</td><td>20</td><td>30</td><td>40</td></tr>\
        <tr><td>South</td><td>15</td><td>25</td><td>35</td><td>45</td></tr>\
        </tbody></table>";

    #[test]
    fn render_urls_emits_one_line_per_chart() {
        let descriptors =
            chart_descriptors_from_html(CHARTABLE, None, &ChartOptions::default());
        assert_eq!(descriptors.len(), 1);

        let rendered = render_urls(&descriptors);
        assert_eq!(rendered.lines().count(), 1);
        assert!(rendered.starts_with("http://chart.apis.google.com/chart?cht=lc"));
    }

    #[test]
    fn render_html_wraps_each_chart_in_an_image_tag() {
        let descriptors =
            chart_descriptors_from_html(CHARTABLE, None, &ChartOptions::default());

        let rendered = render_html(&descriptors);
        assert!(rendered.starts_with("<img src=\"http://chart.apis.google.com/chart"));
        assert!(rendered.ends_with("\" /><br />"));
    }

    #[test]
    fn build_report_indexes_charts_in_document_order() {
        let html = format!("{CHARTABLE}{CHARTABLE}");
        let descriptors =
            chart_descriptors_from_html(&html, Some("sales"), &ChartOptions::default());

        let report = build_report(&descriptors, Some("sales".to_string()));
        assert_eq!(report.chart_count, 2);
        assert_eq!(report.charts[0].index, 0);
        assert_eq!(report.charts[1].index, 1);
        assert_eq!(report.title.as_deref(), Some("sales"));
    }
}
