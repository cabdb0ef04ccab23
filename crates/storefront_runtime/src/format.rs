//! Price and timestamp formatting and outbound order links.

use chrono::{DateTime, FixedOffset};

/// The shop runs on Indochina Time, which has no daylight saving.
const SHOP_UTC_OFFSET_SECS: i32 = 7 * 3600;

/// Formats an amount of Vietnamese dong as `280.000 ₫`.
pub fn format_vnd(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 4);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    grouped.push_str(" ₫");
    grouped
}

/// Formats a fabric price range, collapsing equal bounds.
pub fn format_vnd_range(min: u64, max: u64) -> String {
    if min == max {
        format_vnd(min)
    } else {
        format!("{} - {}", format_vnd(min), format_vnd(max))
    }
}

/// Line total for `quantity` meters.
pub fn order_total(price_per_meter: u64, quantity: u32) -> u64 {
    price_per_meter.saturating_mul(u64::from(quantity))
}

/// Zalo chat link pre-filled with an order for `quantity` meters of `product_name`.
pub fn zalo_order_link(phone: &str, quantity: u32, product_name: &str) -> String {
    let text = format!("Xin chào, tôi muốn đặt {quantity} mét {product_name}");
    format!(
        "https://zalo.me/{}?text={}",
        urlencoding::encode(phone.trim()),
        urlencoding::encode(&text)
    )
}

/// Formats a unix-millisecond timestamp as `dd/mm/yyyy HH:MM` in shop time. Out-of-range
/// values render empty.
pub fn format_timestamp(unix_ms: i64) -> String {
    let Some(offset) = FixedOffset::east_opt(SHOP_UTC_OFFSET_SECS) else {
        return String::new();
    };
    DateTime::from_timestamp_millis(unix_ms)
        .map(|utc| utc.with_timezone(&offset).format("%d/%m/%Y %H:%M").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamps_render_in_shop_time() {
        assert_eq!(format_timestamp(1_735_689_600_000), "01/01/2025 07:00");
        assert_eq!(format_timestamp(i64::MAX), "");
    }

    #[test]
    fn vnd_uses_dot_grouping() {
        assert_eq!(format_vnd(0), "0 ₫");
        assert_eq!(format_vnd(950), "950 ₫");
        assert_eq!(format_vnd(280_000), "280.000 ₫");
        assert_eq!(format_vnd(1_234_567), "1.234.567 ₫");
    }

    #[test]
    fn ranges_collapse_equal_bounds() {
        assert_eq!(format_vnd_range(200_000, 350_000), "200.000 ₫ - 350.000 ₫");
        assert_eq!(format_vnd_range(80_000, 80_000), "80.000 ₫");
    }

    #[test]
    fn totals_multiply_by_quantity() {
        assert_eq!(order_total(280_000, 3), 840_000);
        assert_eq!(order_total(u64::MAX, 2), u64::MAX);
    }

    #[test]
    fn zalo_link_carries_quantity_and_name() {
        let link = zalo_order_link("0123456789", 2, "Lụa");
        assert!(link.starts_with("https://zalo.me/0123456789?text="));
        assert!(link.contains("%C4%91%E1%BA%B7t%202%20m%C3%A9t%20L%E1%BB%A5a"));
    }

    #[test]
    fn zalo_link_escapes_query_delimiters_in_names() {
        let link = zalo_order_link(" 0909 ", 1, "Kate & Lụa? #1");
        assert!(link.starts_with("https://zalo.me/0909?text="));
        assert!(link.ends_with("Kate%20%26%20L%E1%BB%A5a%3F%20%231"));
        assert_eq!(link.matches('?').count(), 1);
    }
}
