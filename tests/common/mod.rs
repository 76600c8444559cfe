#![allow(dead_code)]

use coin_board::app::App;
use coin_board::config::Config;
use coin_board::market::CoinRow;

pub fn make_coin(rank: u32, symbol: &str, price: f64, change_24h: f64) -> CoinRow {
    CoinRow::new(
        rank,
        &format!("{} Coin", symbol),
        symbol,
        price,
        change_24h,
        price * 1_000_000.0,
        price * 10_000.0,
        &format!("/coin/{}.png", symbol.to_lowercase()),
    )
}

// Creates an App over the built-in board (no file I/O).
pub fn test_app() -> App {
    App::new(Config::test_config())
}

pub fn small_app(coins: Vec<CoinRow>) -> App {
    App::with_coins(Config::test_config(), coins)
}
