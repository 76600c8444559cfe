mod export;
mod filter;
pub mod sort;

use crate::config::{Config, Theme};
use crate::market::{CoinRow, mock_coins};

pub use export::ExportFormat;

/// Columns of the board, in display order.
pub const COLUMN_TITLES: [&str; 6] = [
    "Rank",
    "Name",
    "Price",
    "24h Change",
    "Market Cap",
    "Volume (24h)",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Search,
    Help,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggle(&mut self) {
        *self = match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        };
    }

    pub fn indicator(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

pub struct App {
    pub config: Config,
    /// Config theme merged over the defaults.
    pub theme: Theme,
    pub coins: Vec<CoinRow>,
    pub selected_index: usize,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub status_message: Option<String>,
    pub search_query: String,
    pub search_active: bool,
    pub sort_column: Option<usize>,
    pub sort_direction: SortDirection,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self::with_coins(config, mock_coins())
    }

    pub fn with_coins(config: Config, coins: Vec<CoinRow>) -> Self {
        let theme = config.theme.resolved();
        tracing::debug!(?theme, "resolved theme");
        Self {
            config,
            theme,
            coins,
            selected_index: 0,
            input_mode: InputMode::Normal,
            input_buffer: String::new(),
            status_message: None,
            search_query: String::new(),
            search_active: false,
            sort_column: None,
            sort_direction: SortDirection::Ascending,
        }
    }

    pub fn move_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn move_down(&mut self) {
        let len = self.visible_coins().len();
        if len > 0 && self.selected_index < len - 1 {
            self.selected_index += 1;
        }
    }

    /// None -> Rank -> ... -> Volume -> None.
    pub fn cycle_sort_column(&mut self) {
        self.sort_column = match self.sort_column {
            None => Some(0),
            Some(i) if i + 1 >= COLUMN_TITLES.len() => None,
            Some(i) => Some(i + 1),
        };
        self.selected_index = 0;
    }

    pub fn toggle_sort_direction(&mut self) {
        self.sort_direction.toggle();
        self.selected_index = 0;
    }

    pub fn cancel_input(&mut self) {
        self.input_mode = InputMode::Normal;
        self.input_buffer.clear();
    }

    pub fn show_help(&mut self) {
        self.input_mode = InputMode::Help;
    }

    pub fn close_help(&mut self) {
        self.input_mode = InputMode::Normal;
    }
}
