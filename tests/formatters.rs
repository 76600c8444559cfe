use coin_board::error::FormatError;
use coin_board::ui::formatters::*;

// --- format_number ---

#[test]
fn test_format_number_trillions() {
    assert_eq!(format_number(1e12), "$1.00T");
    assert_eq!(format_number(2.5e12), "$2.50T");
}

#[test]
fn test_format_number_billions() {
    assert_eq!(format_number(847_500_000_000.0), "$847.50B");
    assert_eq!(format_number(310_200_000_000.0), "$310.20B");
    assert_eq!(format_number(28_500_000_000.0), "$28.50B");
}

#[test]
fn test_format_number_millions() {
    assert_eq!(format_number(890_000_000.0), "$890.00M");
}

#[test]
fn test_format_number_boundary_million() {
    assert_eq!(format_number(1_000_000.0), "$1.00M");
}

#[test]
fn test_format_number_thousands() {
    assert_eq!(format_number(1500.0), "$1.50K");
    assert_eq!(format_number(999_000.0), "$999.00K");
}

#[test]
fn test_format_number_small() {
    assert_eq!(format_number(500.0), "$500.00");
    assert_eq!(format_number(0.0), "$0.00");
}

#[test]
fn test_format_number_unit_chosen_before_rounding() {
    assert_eq!(format_number(999_999.0), "$1000.00K");
}

#[test]
fn test_format_number_trillion_suffix_matches_division() {
    for v in [1e12, 1.234e12, 7.5e12, 42e12, 1e15] {
        let s = format_number(v);
        assert!(s.ends_with('T'), "{} -> {}", v, s);
        assert_eq!(&s[1..s.len() - 1], format!("{:.2}", v / 1e12));
    }
}

#[test]
fn test_format_number_picks_largest_threshold() {
    let cases = [
        (999.99, ""),
        (1_000.0, "K"),
        (999_999_000.0, "M"),
        (1_000_000_000.0, "B"),
        (999_000_000_000.0, "B"),
    ];
    for (v, suffix) in cases {
        let s = format_number(v);
        let last = s.chars().last().unwrap();
        if suffix.is_empty() {
            assert!(last.is_ascii_digit(), "{} -> {}", v, s);
        } else {
            assert!(s.ends_with(suffix), "{} -> {}", v, s);
        }
    }
}

#[test]
fn test_format_number_negative_zero() {
    assert_eq!(format_number(-0.0), "$0.00");
}

#[test]
fn test_format_number_rejects_negative() {
    assert_eq!(
        try_format_number(-5.0),
        Err(FormatError::Negative { field: "value" })
    );
    assert_eq!(format_number(-5.0), PLACEHOLDER);
}

#[test]
fn test_format_number_rejects_non_finite() {
    assert_eq!(
        try_format_number(f64::NAN),
        Err(FormatError::NonFinite { field: "value" })
    );
    assert_eq!(format_number(f64::INFINITY), "-");
}

// --- format_price ---

#[test]
fn test_format_price_grouped() {
    assert_eq!(format_price(43_250.67), "$43,250.67");
    assert_eq!(format_price(2_580.34), "$2,580.34");
    assert_eq!(format_price(1_234_567.891), "$1,234,567.89");
}

#[test]
fn test_format_price_two_decimals() {
    assert_eq!(format_price(100.0), "$100.00");
    assert_eq!(format_price(315.45), "$315.45");
}

#[test]
fn test_format_price_exactly_one() {
    assert_eq!(format_price(1.0), "$1.00");
}

#[test]
fn test_format_price_below_one() {
    assert_eq!(format_price(0.6234), "$0.6234");
    assert_eq!(format_price(0.1234), "$0.1234");
    assert_eq!(format_price(0.4567), "$0.4567");
    assert_eq!(format_price(0.0), "$0.0000");
}

#[test]
fn test_format_price_grouping_after_rounding() {
    assert_eq!(format_price(999.999), "$1,000.00");
}

#[test]
fn test_format_price_decimal_digits() {
    for p in [1.0, 9.5, 1_000.0, 12_345.678, 98_765_432.1] {
        let s = format_price(p);
        let (_, frac) = s.split_once('.').unwrap();
        assert_eq!(frac.len(), 2, "{} -> {}", p, s);
    }
    for p in [0.0, 0.5, 0.0001, 0.98765] {
        let s = format_price(p);
        let (_, frac) = s.split_once('.').unwrap();
        assert_eq!(frac.len(), 4, "{} -> {}", p, s);
        assert!(!s.contains(','));
    }
}

#[test]
fn test_format_price_rejects_negative() {
    assert_eq!(
        try_format_price(-1.0),
        Err(FormatError::Negative { field: "price" })
    );
    assert_eq!(format_price(-1.0), "-");
}

#[test]
fn test_format_error_message() {
    let err = try_format_price(f64::NAN).unwrap_err();
    assert_eq!(err.to_string(), "field 'price' must be finite");
}

// --- group_thousands ---

#[test]
fn test_group_thousands() {
    assert_eq!(group_thousands("1234567"), "1,234,567");
    assert_eq!(group_thousands("1000"), "1,000");
    assert_eq!(group_thousands("123"), "123");
    assert_eq!(group_thousands("0"), "0");
}

// --- format_change ---

#[test]
fn test_format_change_positive() {
    assert_eq!(format_change(2.45), "+2.45%");
    assert_eq!(format_change(0.02), "+0.02%");
}

#[test]
fn test_format_change_negative() {
    assert_eq!(format_change(-1.23), "-1.23%");
    assert_eq!(format_change(-0.01), "-0.01%");
}

#[test]
fn test_format_change_zero() {
    assert_eq!(format_change(0.0), "0.00%");
}

// --- truncate_str ---

#[test]
fn test_truncate_short_string() {
    assert_eq!(truncate_str("Bitcoin", 10), "Bitcoin");
}

#[test]
fn test_truncate_exact_length() {
    assert_eq!(truncate_str("Solana", 6), "Solana");
}

#[test]
fn test_truncate_long_string() {
    assert_eq!(truncate_str("Wrapped Bitcoin", 10), "Wrapped...");
}
