use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "table2chart",
    version,
    about = "Convert HTML tables into line-chart descriptors"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Extract(ExtractArgs),
    Inspect(InspectArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ExtractArgs {
    /// HTML document to read; stdin when omitted.
    #[arg(long)]
    pub input: Option<PathBuf>,

    #[arg(long)]
    pub title: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Urls)]
    pub format: OutputFormat,

    /// Percent-encode descriptor field values before joining.
    #[arg(long, default_value_t = false)]
    pub encode: bool,

    #[arg(long, default_value_t = 8)]
    pub max_points: usize,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Urls,
    Json,
    Html,
}

impl OutputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Urls => "urls",
            Self::Json => "json",
            Self::Html => "html",
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct InspectArgs {
    /// HTML document to read; stdin when omitted.
    #[arg(long)]
    pub input: Option<PathBuf>,
}
