use anyhow::Result;
use scraper::Html;
use tracing::info;

use crate::cli::InspectArgs;
use crate::pipeline::{
    HtmlTableBody, TableBody, collect_rows, is_value_table, normalize_table, top_level_bodies,
};
use crate::util::read_input;

/// Walk the document the same way extraction does, but log one line per
/// table body instead of producing descriptors. This is where NotChartable
/// outcomes become visible; extraction consumes them silently.
pub fn run(args: InspectArgs) -> Result<()> {
    let html = read_input(args.input.as_deref())?;
    let document = Html::parse_document(&html);

    let bodies = top_level_bodies(&document);
    info!(top_level_bodies = bodies.len(), "inspecting document");

    let mut chartable = 0usize;
    for body in &bodies {
        inspect_body(body, 0, &mut chartable);
    }

    info!(chartable, "inspection finished");
    Ok(())
}

fn inspect_body(body: &HtmlTableBody<'_>, depth: usize, chartable: &mut usize) {
    let nested = body.nested_bodies();
    if !nested.is_empty() {
        info!(
            depth,
            nested = nested.len(),
            "internal table body; nested tables supersede it"
        );
        for child in &nested {
            inspect_body(child, depth + 1, chartable);
        }
        return;
    }

    let raw_rows = body.rows();
    let collected = collect_rows(&raw_rows);
    let dropped = raw_rows.len() - collected.len();
    let head_cells = collected.first().map(Vec::len).unwrap_or(0);

    if !is_value_table(&collected) {
        info!(
            depth,
            rows = raw_rows.len(),
            retained = collected.len(),
            dropped,
            head_cells,
            outcome = "not chartable",
            "leaf table body"
        );
        return;
    }

    let Some(table) = normalize_table(&collected) else {
        return;
    };

    let outcome = if table.data_rows.len() >= 2 {
        *chartable += 1;
        "chartable"
    } else {
        "single data row; nothing to compare"
    };

    info!(
        depth,
        rows = raw_rows.len(),
        retained = collected.len(),
        dropped,
        head_cells,
        data_rows = table.data_rows.len(),
        scale_bound = table.scale_bound,
        outcome,
        "leaf table body"
    );
}
