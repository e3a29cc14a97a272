use tracing::debug;

use super::chart::{ChartDescriptor, ChartOptions, encode};
use super::collect::collect_rows;
use super::scale::normalize_table;

/// One logical table instance in a tree-shaped markup representation. The
/// markup parser itself is an external collaborator; the pipeline only needs
/// nested-body discovery and row-major cell text.
pub trait TableBody: Sized {
    /// Directly nested table bodies, document order, with no other table
    /// body between them and `self`.
    fn nested_bodies(&self) -> Vec<Self>;

    /// Raw cell texts, row-major.
    fn rows(&self) -> Vec<Vec<String>>;
}

/// Outcome of visiting one table body. Nested tables fully supersede their
/// wrapper, so an internal node never also runs the pipeline on itself.
#[derive(Debug)]
pub enum Visit {
    Recursed(Vec<ChartDescriptor>),
    Leaf(Option<ChartDescriptor>),
}

impl Visit {
    pub fn into_descriptors(self) -> Vec<ChartDescriptor> {
        match self {
            Self::Recursed(descriptors) => descriptors,
            Self::Leaf(descriptor) => descriptor.into_iter().collect(),
        }
    }
}

/// Depth-first visit of one table body and everything nested inside it.
pub fn visit_body<B: TableBody>(body: &B, title: Option<&str>, options: &ChartOptions) -> Visit {
    let nested = body.nested_bodies();
    if !nested.is_empty() {
        debug!(nested = nested.len(), "internal table body; recursing");

        let mut descriptors = Vec::new();
        for child in &nested {
            descriptors.extend(visit_body(child, title, options).into_descriptors());
        }
        return Visit::Recursed(descriptors);
    }

    Visit::Leaf(chart_leaf(body, title, options))
}

/// All descriptors across a forest of top-level table bodies, in document
/// order. A subtree that fails anywhere simply contributes nothing;
/// siblings are unaffected.
pub fn locate_charts<B: TableBody>(
    bodies: &[B],
    title: Option<&str>,
    options: &ChartOptions,
) -> Vec<ChartDescriptor> {
    let mut descriptors = Vec::new();
    for body in bodies {
        descriptors.extend(visit_body(body, title, options).into_descriptors());
    }
    descriptors
}

fn chart_leaf<B: TableBody>(
    body: &B,
    title: Option<&str>,
    options: &ChartOptions,
) -> Option<ChartDescriptor> {
    let rows = collect_rows(&body.rows());
    let table = normalize_table(&rows)?;
    encode(&table, title, options)
}
