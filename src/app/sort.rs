use super::SortDirection;
use crate::market::CoinRow;
use std::cmp::Ordering;

pub fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Columns: 0=Rank, 1=Name, 2=Price, 3=24h Change, 4=Market Cap, 5=Volume
pub fn compare_coin_column(
    col: usize,
    a: &CoinRow,
    b: &CoinRow,
    direction: SortDirection,
) -> Ordering {
    let ord = match col {
        0 => a.rank.cmp(&b.rank),
        1 => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        2 => cmp_f64(a.price, b.price),
        3 => cmp_f64(a.change_24h, b.change_24h),
        4 => cmp_f64(a.market_cap, b.market_cap),
        5 => cmp_f64(a.volume_24h, b.volume_24h),
        _ => Ordering::Equal,
    };
    match direction {
        SortDirection::Ascending => ord,
        SortDirection::Descending => ord.reverse(),
    }
}
