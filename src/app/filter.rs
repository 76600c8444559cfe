use super::sort::compare_coin_column;
use super::{App, InputMode};
use crate::market::CoinRow;

impl App {
    pub fn start_search(&mut self) {
        self.input_mode = InputMode::Search;
        self.input_buffer.clear();
    }

    pub fn confirm_search(&mut self) {
        if !self.input_buffer.trim().is_empty() {
            self.search_query = self.input_buffer.trim().to_uppercase();
            self.search_active = true;
            self.selected_index = 0;
        } else {
            self.clear_filter();
        }
        self.input_mode = InputMode::Normal;
        self.input_buffer.clear();
    }

    pub fn cancel_search(&mut self) {
        self.clear_filter();
        self.input_mode = InputMode::Normal;
        self.input_buffer.clear();
    }

    pub fn clear_filter(&mut self) {
        self.search_query.clear();
        self.search_active = false;
        self.selected_index = 0;
    }

    /// Rows after the search filter and the active sort, in display order.
    pub fn visible_coins(&self) -> Vec<&CoinRow> {
        let mut items: Vec<&CoinRow> = self.coins.iter().collect();
        if self.search_active {
            items.retain(|coin| coin.matches(&self.search_query));
        }
        if let Some(col) = self.sort_column {
            let dir = self.sort_direction;
            items.sort_by(|a, b| compare_coin_column(col, a, b, dir));
        }
        items
    }

    pub fn selected_coin(&self) -> Option<&CoinRow> {
        self.visible_coins().get(self.selected_index).copied()
    }
}
