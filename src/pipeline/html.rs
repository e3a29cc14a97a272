use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use super::chart::{ChartDescriptor, ChartOptions};
use super::locate::{TableBody, locate_charts};

static TBODY_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("tbody").expect("hardcoded selector 'tbody' is statically valid"));

static TR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("tr").expect("hardcoded selector 'tr' is statically valid"));

static TD_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("td").expect("hardcoded selector 'td' is statically valid"));

/// A `tbody` element in a parsed document. html5ever's tree construction
/// inserts the element for bare `<table><tr>` markup, so tables without an
/// explicit tbody still participate.
pub struct HtmlTableBody<'a> {
    element: ElementRef<'a>,
}

impl<'a> TableBody for HtmlTableBody<'a> {
    fn nested_bodies(&self) -> Vec<Self> {
        bodies_directly_under(self.element)
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.element
            .select(&TR_SELECTOR)
            .map(|row| row.select(&TD_SELECTOR).map(cell_text).collect())
            .collect()
    }
}

/// Table bodies in `document` that are not contained in any other table
/// body. These seed the locator's recursion.
pub fn top_level_bodies(document: &Html) -> Vec<HtmlTableBody<'_>> {
    bodies_directly_under(document.root_element())
}

/// Parse a document and accumulate chart descriptors for every leaf table,
/// in document order.
pub fn chart_descriptors_from_html(
    html: &str,
    title: Option<&str>,
    options: &ChartOptions,
) -> Vec<ChartDescriptor> {
    let document = Html::parse_document(html);
    let bodies = top_level_bodies(&document);
    locate_charts(&bodies, title, options)
}

/// Descendant tbody elements of `scope` with no other tbody between them
/// and `scope`.
fn bodies_directly_under(scope: ElementRef<'_>) -> Vec<HtmlTableBody<'_>> {
    scope
        .select(&TBODY_SELECTOR)
        .filter(|element| {
            !element
                .ancestors()
                .take_while(|node| node.id() != scope.id())
                .filter_map(ElementRef::wrap)
                .any(|ancestor| ancestor.value().name() == "tbody")
        })
        .map(|element| HtmlTableBody { element })
        .collect()
}

fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text().collect()
}
