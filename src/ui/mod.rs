pub mod formatters;
pub mod plain;
mod tables;

use crate::app::{App, InputMode};
use crate::style::theme::to_style;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(3),
        ])
        .split(frame.area());

    draw_header(frame, chunks[0], app);
    tables::draw_board(frame, chunks[1], app);
    draw_footer(frame, chunks[2], app);

    if app.input_mode == InputMode::Help {
        draw_help(frame);
    }
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let current_time = chrono::Local::now().format("%H:%M:%S").to_string();

    let filter_span = if app.search_active {
        Span::styled(
            format!(" (filtered: {})", app.search_query),
            Style::default().fg(Color::Cyan),
        )
    } else {
        Span::raw("")
    };

    let header = Paragraph::new(Line::from(vec![
        Span::styled(format!(" {} ", app.config.title), to_style(&app.theme.title)),
        filter_span,
        Span::styled(" | ", Style::default().fg(Color::DarkGray)),
        Span::styled(format!("[{}]", current_time), to_style(&app.theme.muted)),
    ]))
    .block(Block::default().borders(Borders::ALL));

    frame.render_widget(header, area);
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &App) {
    let content = match app.input_mode {
        InputMode::Normal => {
            let note = format!(
                " Data refreshes every {} seconds ",
                app.config.refresh_interval_secs
            );
            let help = " [s] Sort [d] Dir [/] Search [e] Export [↑↓] Nav [?] Help [q] Quit ";
            let mut spans = Vec::new();
            if let Some(msg) = &app.status_message {
                spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
                spans.push(Span::raw(" | "));
            }
            spans.push(Span::styled(note, to_style(&app.theme.muted)));
            spans.push(Span::styled(help, Style::default().fg(Color::DarkGray)));
            Line::from(spans)
        }
        InputMode::Search => Line::from(vec![
            Span::raw(" Search: /"),
            Span::styled(app.input_buffer.clone(), Style::default().fg(Color::Cyan)),
            Span::styled("█", Style::default().fg(Color::Cyan)),
            Span::raw(" | [Enter] Apply | [Esc] Cancel"),
        ]),
        InputMode::Help => Line::from(Span::styled(
            " [?/Enter/Esc] Close help ",
            Style::default().fg(Color::DarkGray),
        )),
    };

    let footer = Paragraph::new(content).block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}

fn help_content() -> Vec<Line<'static>> {
    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let entries = [
        ("↑/k ↓/j", "Move selection"),
        ("s", "Cycle sort column"),
        ("d", "Toggle sort direction"),
        ("/", "Search by name or symbol"),
        ("Esc", "Clear search"),
        ("e", "Export visible rows as CSV"),
        ("?", "Toggle this help"),
        ("q", "Quit"),
    ];
    let mut lines = vec![Line::from("")];
    lines.extend(entries.iter().map(|(key, desc)| {
        Line::from(vec![
            Span::styled(format!("  {:<10}", key), key_style),
            Span::raw(*desc),
        ])
    }));
    lines
}

pub fn draw_help(frame: &mut Frame) {
    let area = centered_rect(50, 60, frame.area());
    frame.render_widget(Clear, area);

    let outer_block = Block::default()
        .title(" Help - Keyboard Shortcuts ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .style(Style::default().bg(Color::Black));

    let inner_area = outer_block.inner(area);
    frame.render_widget(outer_block, area);

    frame.render_widget(
        Paragraph::new(help_content()).alignment(Alignment::Left),
        inner_area,
    );
}
