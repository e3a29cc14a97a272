mod chart;
mod collect;
mod html;
mod locate;
mod normalize;
mod prune;
mod scale;

pub use chart::{ChartDescriptor, ChartOptions};
pub use collect::{collect_rows, is_value_table};
pub use html::{HtmlTableBody, chart_descriptors_from_html, top_level_bodies};
pub use locate::TableBody;
pub use scale::normalize_table;
