use super::formatters::{format_change, format_number, format_price};
use crate::app::COLUMN_TITLES;
use crate::market::CoinRow;

fn cells(coin: &CoinRow) -> [String; 6] {
    [
        coin.rank.to_string(),
        format!("{} ({})", coin.name, coin.symbol),
        format_price(coin.price),
        format!("{} {}", coin.trend().indicator(), format_change(coin.change_24h)),
        format_number(coin.market_cap),
        format_number(coin.volume_24h),
    ]
}

/// Board as aligned plain text: name left-aligned, numbers right-aligned.
pub fn render_table(rows: &[&CoinRow]) -> String {
    let body: Vec<[String; 6]> = rows.iter().map(|coin| cells(coin)).collect();
    let mut widths = COLUMN_TITLES.map(|title| title.chars().count());
    for row in &body {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let mut push_line = |cells: &[&str]| {
        let line: Vec<String> = cells
            .iter()
            .enumerate()
            .map(|(i, cell)| {
                if i == 1 {
                    format!("{:<width$}", cell, width = widths[i])
                } else {
                    format!("{:>width$}", cell, width = widths[i])
                }
            })
            .collect();
        out.push_str(line.join("  ").trim_end());
        out.push('\n');
    };

    push_line(&COLUMN_TITLES);
    for row in &body {
        let refs: Vec<&str> = row.iter().map(String::as_str).collect();
        push_line(&refs);
    }
    out
}
