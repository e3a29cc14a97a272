use serde::Serialize;

use crate::pipeline::ChartDescriptor;

#[derive(Debug, Clone, Serialize)]
pub struct ChartEntry {
    pub index: usize,
    pub url: String,
    pub descriptor: ChartDescriptor,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartReport {
    pub chart_count: usize,
    pub title: Option<String>,
    pub charts: Vec<ChartEntry>,
}
