use super::formatters::*;
use crate::app::{App, COLUMN_TITLES, SortDirection};
use crate::cn;
use crate::config::Theme;
use crate::market::{CoinRow, Trend};
use crate::style::theme::to_style;
use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Row, Table, TableState},
};

pub(crate) struct ColumnDef {
    pub name: &'static str,
    pub width: u16,
    pub priority: u8,
}

pub(crate) const BOARD_COLUMNS: &[ColumnDef] = &[
    ColumnDef {
        name: COLUMN_TITLES[0],
        width: 6,
        priority: 1,
    },
    ColumnDef {
        name: COLUMN_TITLES[1],
        width: 22,
        priority: 1,
    },
    ColumnDef {
        name: COLUMN_TITLES[2],
        width: 14,
        priority: 1,
    },
    ColumnDef {
        name: COLUMN_TITLES[3],
        width: 12,
        priority: 1,
    },
    ColumnDef {
        name: COLUMN_TITLES[4],
        width: 12,
        priority: 2,
    },
    ColumnDef {
        name: COLUMN_TITLES[5],
        width: 14,
        priority: 3,
    },
];

/// Indices of the columns that fit in `available_width`, dropping the
/// highest priority numbers first.
pub(crate) fn visible_columns(columns: &[ColumnDef], available_width: u16) -> Vec<usize> {
    let max_priority = columns.iter().map(|c| c.priority).max().unwrap_or(1);
    let mut visible: Vec<usize> = Vec::new();
    for priority_cutoff in 1..=max_priority {
        let candidate: Vec<usize> = columns
            .iter()
            .enumerate()
            .filter(|(_, c)| c.priority <= priority_cutoff)
            .map(|(i, _)| i)
            .collect();
        let total_width: u16 = candidate.iter().map(|&i| columns[i].width).sum();
        if total_width <= available_width {
            visible = candidate;
        } else {
            break;
        }
    }
    if visible.is_empty() {
        visible = columns
            .iter()
            .enumerate()
            .filter(|(_, c)| c.priority == 1)
            .map(|(i, _)| i)
            .collect();
    }
    visible
}

/// Class string for the 24h change cell.
pub(crate) fn change_classes(theme: &Theme, trend: Trend) -> String {
    cn!(
        (theme.positive.as_str(), trend == Trend::Up),
        (theme.negative.as_str(), trend == Trend::Down)
    )
}

/// Class string for a whole row.
pub(crate) fn row_classes(theme: &Theme, is_selected: bool) -> String {
    cn!((theme.selected.as_str(), is_selected))
}

fn coin_cell(col_idx: usize, coin: &CoinRow, theme: &Theme, is_selected: bool) -> Cell<'static> {
    match col_idx {
        0 => Cell::from(coin.rank.to_string()).style(to_style(&theme.muted)),
        1 => {
            // the row background already marks the selection, so muted text would vanish
            let symbol_classes = cn!(&theme.muted, (theme.selected.as_str(), is_selected));
            Cell::from(Line::from(vec![
                Span::styled(truncate_str(&coin.name, 14), to_style("font-bold")),
                Span::raw(" "),
                Span::styled(coin.symbol.clone(), to_style(&symbol_classes)),
            ]))
        }
        2 => Cell::from(format_price(coin.price)).style(to_style("font-bold")),
        3 => {
            let trend = coin.trend();
            let label = format!("{} {}", trend.indicator(), format_change(coin.change_24h));
            Cell::from(label).style(to_style(&change_classes(theme, trend)))
        }
        4 => Cell::from(format_number(coin.market_cap)),
        5 => Cell::from(format_number(coin.volume_24h)),
        _ => Cell::from(""),
    }
}

fn coin_row(coin: &CoinRow, vis: &[usize], theme: &Theme, is_selected: bool) -> Row<'static> {
    let cells: Vec<Cell> = vis
        .iter()
        .map(|&col| coin_cell(col, coin, theme, is_selected))
        .collect();
    Row::new(cells).style(to_style(&row_classes(theme, is_selected)))
}

pub(crate) fn sort_header_row(
    columns: &[ColumnDef],
    vis: &[usize],
    sort_col: Option<usize>,
    sort_dir: &SortDirection,
    style: Style,
) -> Row<'static> {
    let cells: Vec<Cell> = vis
        .iter()
        .map(|&i| {
            let name = columns[i].name;
            let label = if sort_col == Some(i) {
                format!("{} {}", name, sort_dir.indicator())
            } else {
                name.to_string()
            };
            Cell::from(label).style(style)
        })
        .collect();
    Row::new(cells).height(1)
}

pub(crate) fn column_constraints(
    columns: &[ColumnDef],
    vis: &[usize],
    stretch_col: Option<usize>,
    available_width: u16,
) -> Vec<Constraint> {
    let total_vis_width: u16 = vis.iter().map(|&i| columns[i].width).sum();
    let extra = available_width.saturating_sub(total_vis_width);

    match stretch_col {
        Some(sc) if extra > 0 => vis
            .iter()
            .map(|&i| {
                if i == sc {
                    Constraint::Min(columns[i].width)
                } else {
                    Constraint::Length(columns[i].width)
                }
            })
            .collect(),
        _ => {
            let mut constraints: Vec<Constraint> = vis
                .iter()
                .map(|&i| Constraint::Length(columns[i].width))
                .collect();
            if extra > 0 {
                constraints.push(Constraint::Min(0));
            }
            constraints
        }
    }
}

pub fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let available_width = area.width.saturating_sub(2);
    let vis = visible_columns(BOARD_COLUMNS, available_width);
    let header = sort_header_row(
        BOARD_COLUMNS,
        &vis,
        app.sort_column,
        &app.sort_direction,
        to_style(&app.theme.header),
    );

    let coins = app.visible_coins();
    let rows: Vec<Row> = coins
        .iter()
        .enumerate()
        .map(|(i, coin)| coin_row(coin, &vis, &app.theme, i == app.selected_index))
        .collect();

    let title = format!(" {} ({}) ", app.config.title, coins.len());
    let constraints = column_constraints(BOARD_COLUMNS, &vis, Some(1), available_width);
    let table = Table::new(rows, constraints)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(title));

    let mut state = TableState::default().with_selected(Some(app.selected_index));
    frame.render_stateful_widget(table, area, &mut state);
}
