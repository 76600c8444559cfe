use crate::app::ExportFormat;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "coin-board")]
#[command(about = "Terminal dashboard for a crypto market ranking board", long_about = None)]
pub struct Cli {
    /// Refresh interval in seconds shown in the footer
    #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
    pub interval: Option<u64>,

    /// Print the board to stdout in the given format and exit
    #[arg(short, long, value_enum)]
    pub print: Option<ExportFormat>,

    /// Path to the config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
