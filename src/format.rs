use sui_explain_types::{MIST_PER_SUI, SUI_DECIMALS};

// =============================================================================
// Address Utilities
// =============================================================================

/// Shorten an address or object id for display: `0x1234...cdef`.
///
/// Values too short to benefit are returned unchanged.
pub fn shorten_address(addr: &str) -> String {
    let addr = addr.trim();
    if addr.len() <= 10 {
        return addr.to_string();
    }
    match (addr.get(..6), addr.get(addr.len() - 4..)) {
        (Some(head), Some(tail)) => format!("{}...{}", head, tail),
        _ => addr.to_string(),
    }
}

// =============================================================================
// Amount Utilities
// =============================================================================

/// Render a base-unit amount as a decimal SUI-scale string.
///
/// Exact (no float rounding); trailing fractional zeros are dropped, so
/// `1_500_000_000` renders as `1.5` and `1` as `0.000000001`.
pub fn format_base_units(amount: u128) -> String {
    let scale = 10u128.pow(SUI_DECIMALS);
    let whole = amount / scale;
    let frac = amount % scale;
    if frac == 0 {
        return whole.to_string();
    }
    let frac = format!("{:0width$}", frac, width = SUI_DECIMALS as usize);
    format!("{}.{}", whole, frac.trim_end_matches('0'))
}

/// Convert MIST to SUI as a float, for gas figures.
pub fn mist_to_sui(mist: u64) -> f64 {
    mist as f64 / MIST_PER_SUI as f64
}

// =============================================================================
// Type and Label Utilities
// =============================================================================

/// Shorten a Move type path for display.
///
/// A plain `pkg::module::Name` keeps `module::Name`; anything else
/// (generics, truncated paths) keeps only the last `::` segment.
pub fn format_object_type(object_type: &str) -> String {
    let parts: Vec<&str> = object_type.split("::").collect();
    if parts.len() == 3 {
        parts[1..].join("::")
    } else {
        parts.last().copied().unwrap_or_default().to_string()
    }
}

/// Coin symbol from a coin type: everything after the last `:`.
pub fn coin_symbol(coin_type: &str) -> &str {
    match coin_type.rfind(':') {
        Some(idx) => &coin_type[idx + 1..],
        None => coin_type,
    }
}

/// `"Transferred 1 object"`, `"Executed 3 move calls"`.
pub fn count_label(verb: &str, count: usize, noun: &str) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("{} {} {}{}", verb, count, noun, plural)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shorten_address() {
        assert_eq!(
            shorten_address("0x1234567890abcdef1234567890abcdef"),
            "0x1234...cdef"
        );
        assert_eq!(shorten_address("0x2"), "0x2");
        assert_eq!(shorten_address("0x12345678"), "0x12345678");
    }

    #[test]
    fn test_format_base_units() {
        assert_eq!(format_base_units(0), "0");
        assert_eq!(format_base_units(1), "0.000000001");
        assert_eq!(format_base_units(1_500_000_000), "1.5");
        assert_eq!(format_base_units(2_000_000_000), "2");
        assert_eq!(format_base_units(123_456_789_012), "123.456789012");
    }

    #[test]
    fn test_mist_to_sui() {
        assert_eq!(mist_to_sui(1_000_000_000), 1.0);
        assert_eq!(mist_to_sui(0), 0.0);
    }

    #[test]
    fn test_format_object_type() {
        assert_eq!(format_object_type("0x2::coin::Coin"), "coin::Coin");
        assert_eq!(format_object_type("0x2::coin::Coin<0x2::sui::SUI>"), "SUI>");
        assert_eq!(format_object_type("Coin"), "Coin");
        assert_eq!(format_object_type("a::b"), "b");
    }

    #[test]
    fn test_coin_symbol() {
        assert_eq!(coin_symbol("0x2::sui::SUI"), "SUI");
        assert_eq!(coin_symbol("USDC"), "USDC");
    }

    #[test]
    fn test_count_label() {
        assert_eq!(count_label("Transferred", 1, "object"), "Transferred 1 object");
        assert_eq!(count_label("Executed", 2, "move call"), "Executed 2 move calls");
    }
}
