use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "sisbajud-resumos",
    version,
    about = "Blockage summaries from SISBAJUD asset-freeze PDF reports"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Summarize(SummarizeArgs),
    Spell(SpellArgs),
}

#[derive(Args, Debug, Clone)]
pub struct SummarizeArgs {
    pub pdf_path: PathBuf,

    /// Write the plain-text summary document to this path.
    #[arg(long)]
    pub output: Option<PathBuf>,

    #[arg(long)]
    pub report_path: Option<PathBuf>,

    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Custom record pattern with named groups `tax_id`, `name` and `amount`.
    #[arg(long)]
    pub pattern: Option<String>,

    #[arg(long, default_value_t = false)]
    pub allow_empty_pages: bool,
}

#[derive(Args, Debug, Clone)]
pub struct SpellArgs {
    /// Amount in Brazilian notation, e.g. 1.500,25
    pub amount: String,
}
