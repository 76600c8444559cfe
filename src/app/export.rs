use super::App;
use crate::market::CoinRow;
use crate::ui::plain;
use anyhow::Result;
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ExportFormat {
    #[default]
    Table,
    Csv,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Table => "txt",
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Raw values, one row per coin. Commas in names are replaced so columns stay aligned.
pub fn export_csv(rows: &[&CoinRow]) -> String {
    let mut csv = String::from("Rank,Name,Symbol,Price,Change24h,MarketCap,Volume24h,Image\n");
    for coin in rows {
        csv.push_str(&format!(
            "{},{},{},{},{:.2},{:.0},{:.0},{}\n",
            coin.rank,
            coin.name.replace(',', ";"),
            coin.symbol,
            coin.price,
            coin.change_24h,
            coin.market_cap,
            coin.volume_24h,
            coin.image_path
        ));
    }
    csv
}

impl App {
    /// The visible rows rendered in `format`.
    pub fn render_export(&self, format: ExportFormat) -> Result<String> {
        let rows = self.visible_coins();
        let content = match format {
            ExportFormat::Table => plain::render_table(&rows),
            ExportFormat::Csv => export_csv(&rows),
            ExportFormat::Json => serde_json::to_string_pretty(&rows)?,
        };
        Ok(content)
    }

    /// Writes the visible rows into `dir` under a timestamped file name.
    pub fn export_to(&self, dir: &Path, format: ExportFormat) -> Result<PathBuf> {
        let timestamp = Local::now().format("%Y%m%d_%H%M%S");
        let filename = format!("coin_board_{}.{}", timestamp, format.extension());
        let filepath = dir.join(filename);
        fs::write(&filepath, self.render_export(format)?)?;
        tracing::info!(path = %filepath.display(), ?format, "exported board");
        Ok(filepath)
    }

    /// Exports as CSV to the download directory and reports the outcome in the status line.
    pub fn export_csv(&mut self) {
        let result = export_dir().and_then(|dir| self.export_to(&dir, ExportFormat::Csv));
        self.status_message = Some(match result {
            Ok(path) => format!("Exported to {}", path.display()),
            Err(e) => {
                tracing::error!(error = %e, "export failed");
                format!("Export failed: {}", e)
            }
        });
    }
}

fn export_dir() -> Result<PathBuf> {
    if let Some(downloads) = dirs::download_dir() {
        if downloads.exists() {
            return Ok(downloads);
        }
    }
    if let Some(home) = dirs::home_dir() {
        return Ok(home);
    }
    Ok(std::env::current_dir()?)
}
