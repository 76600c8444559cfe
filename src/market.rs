use serde::{Deserialize, Serialize};

/// One row of the ranking board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinRow {
    pub rank: u32,
    pub name: String,
    pub symbol: String,
    pub price: f64,
    /// Signed percentage, e.g. `-1.23` for a 1.23% drop.
    pub change_24h: f64,
    pub market_cap: f64,
    pub volume_24h: f64,
    pub image_path: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    /// Only a strictly positive change counts as up.
    pub fn from_change(change_pct: f64) -> Self {
        if change_pct > 0.0 { Trend::Up } else { Trend::Down }
    }

    pub fn indicator(&self) -> &'static str {
        match self {
            Trend::Up => "▲",
            Trend::Down => "▼",
        }
    }
}

impl CoinRow {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        rank: u32,
        name: &str,
        symbol: &str,
        price: f64,
        change_24h: f64,
        market_cap: f64,
        volume_24h: f64,
        image_path: &str,
    ) -> Self {
        Self {
            rank,
            name: name.to_string(),
            symbol: symbol.to_string(),
            price,
            change_24h,
            market_cap,
            volume_24h,
            image_path: image_path.to_string(),
        }
    }

    pub fn trend(&self) -> Trend {
        Trend::from_change(self.change_24h)
    }

    /// Case-insensitive match against name or symbol. `query` must already be uppercase.
    pub fn matches(&self, query: &str) -> bool {
        self.symbol.to_uppercase().contains(query) || self.name.to_uppercase().contains(query)
    }
}

/// The fixed board shown by the dashboard, ordered by rank.
#[rustfmt::skip]
pub fn mock_coins() -> Vec<CoinRow> {
    vec![
        CoinRow::new(1, "Bitcoin", "BTC", 43_250.67, 2.45, 847_500_000_000.0, 28_500_000_000.0, "/coin/bitcoin.png"),
        CoinRow::new(2, "Ethereum", "ETH", 2_580.34, -1.23, 310_200_000_000.0, 15_800_000_000.0, "/coin/ethereum.png"),
        CoinRow::new(3, "Tether", "USDT", 1.0, 0.02, 95_100_000_000.0, 45_200_000_000.0, "/coin/tether.png"),
        CoinRow::new(4, "BNB", "BNB", 315.45, 3.67, 48_500_000_000.0, 1_200_000_000.0, "/coin/bnb.png"),
        CoinRow::new(5, "Solana", "SOL", 98.76, 5.23, 42_800_000_000.0, 2_100_000_000.0, "/coin/solana.png"),
        CoinRow::new(6, "XRP", "XRP", 0.6234, -2.87, 33_900_000_000.0, 1_500_000_000.0, "/coin/xrp.png"),
        CoinRow::new(7, "USD Coin", "USDC", 1.0, -0.01, 25_600_000_000.0, 4_800_000_000.0, "/coin/usdc.webp"),
        CoinRow::new(8, "Cardano", "ADA", 0.4567, 1.89, 16_100_000_000.0, 890_000_000.0, "/coin/cardano.png"),
    ]
}
