use anyhow::Result;
use clap::Parser;
use coin_board::app::{App, InputMode};
use coin_board::cli::Cli;
use coin_board::config::Config;
use coin_board::{logging, ui};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use std::io;
use std::time::Duration;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = match cli.config {
        Some(path) => path,
        None => Config::config_path()?,
    };
    if let Some(dir) = config_path.parent() {
        if let Err(e) = logging::init(dir) {
            eprintln!("Logging disabled: {}", e);
        }
    }

    let mut config = Config::load_from(&config_path)?;
    if let Some(interval) = cli.interval {
        config.refresh_interval_secs = interval;
    }
    let mut app = App::new(config);

    if let Some(format) = cli.print {
        print!("{}", app.render_export(format)?);
        return Ok(());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        tracing::error!(error = %e, "dashboard exited with error");
        eprintln!("Error: {}", e);
    }

    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Short timeout keeps the header clock ticking
        if !event::poll(Duration::from_millis(250))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match app.input_mode {
            InputMode::Normal => match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Char('?') => app.show_help(),
                KeyCode::Char('/') => app.start_search(),
                KeyCode::Char('e') => app.export_csv(),
                KeyCode::Char('s') => app.cycle_sort_column(),
                KeyCode::Char('d') => app.toggle_sort_direction(),
                KeyCode::Up | KeyCode::Char('k') => app.move_up(),
                KeyCode::Down | KeyCode::Char('j') => app.move_down(),
                KeyCode::Esc => {
                    app.clear_filter();
                    app.status_message = None;
                }
                _ => {}
            },
            InputMode::Search => match key.code {
                KeyCode::Enter => app.confirm_search(),
                KeyCode::Esc => app.cancel_search(),
                KeyCode::Backspace => {
                    app.input_buffer.pop();
                }
                KeyCode::Char(c) => app.input_buffer.push(c),
                _ => {}
            },
            InputMode::Help => match key.code {
                KeyCode::Char('?') | KeyCode::Enter | KeyCode::Esc => app.close_help(),
                _ => {}
            },
        }
    }
}
