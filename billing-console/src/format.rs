//! Display formatting for table rows and summary cards

use chrono::NaiveDateTime;
use rust_decimal::{Decimal, RoundingStrategy};
use shared::{Order, OrderItem, PaymentMethod, PaymentStatus};

pub const CURRENCY_SYMBOL: &str = "₹";

/// Number of order-id characters shown in the recent orders list
const SHORT_ID_LEN: usize = 8;

/// `₹1234.50`; the underlying value keeps full precision.
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{CURRENCY_SYMBOL}{rounded:.2}")
}

/// `Masala Dosa x 2, Filter Coffee x 1`
pub fn format_items(items: &[OrderItem]) -> String {
    items
        .iter()
        .map(|item| format!("{} x {}", item.name, item.quantity))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Order history timestamp, e.g. `Jan 15, 2024, 10:30 AM`
pub fn format_timestamp(at: NaiveDateTime) -> String {
    at.format("%b %-d, %Y, %I:%M %p").to_string()
}

/// Recent orders timestamp, e.g. `1/15/2024, 10:30 AM`
pub fn format_recent_time(at: NaiveDateTime) -> String {
    at.format("%-m/%-d/%Y, %I:%M %p").to_string()
}

/// First eight characters of the id followed by `...`
pub fn short_order_id(order_id: &str) -> String {
    let head: String = order_id.chars().take(SHORT_ID_LEN).collect();
    format!("{head}...")
}

/// One row of the order history table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRow {
    pub order_id: String,
    pub customer_name: String,
    pub phone_number: String,
    pub items: String,
    pub total: String,
    pub payment_method: PaymentMethod,
    pub status: PaymentStatus,
    pub date: String,
}

impl From<&Order> for OrderRow {
    fn from(order: &Order) -> Self {
        Self {
            order_id: order.order_id.clone(),
            customer_name: order.customer_name.clone(),
            phone_number: order.phone_number.clone(),
            items: format_items(&order.items),
            total: format_currency(order.grand_total),
            payment_method: order.payment_method,
            status: order.payment_status(),
            date: format_timestamp(order.created_at),
        }
    }
}

/// One entry of the dashboard's recent orders list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentOrderRow {
    pub order_id: String,
    pub short_id: String,
    pub customer_name: String,
    pub amount: String,
    pub payment_method: PaymentMethod,
    pub status: PaymentStatus,
    pub time: String,
}

impl From<&Order> for RecentOrderRow {
    fn from(order: &Order) -> Self {
        Self {
            order_id: order.order_id.clone(),
            short_id: short_order_id(&order.order_id),
            customer_name: order.customer_name.clone(),
            amount: format_currency(order.grand_total),
            payment_method: order.payment_method,
            status: order.payment_status(),
            time: format_recent_time(order.created_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 5)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn test_format_currency_two_digits() {
        assert_eq!(format_currency(dec("1234.5")), "₹1234.50");
        assert_eq!(format_currency(dec("0")), "₹0.00");
        assert_eq!(format_currency(dec("10.005")), "₹10.01");
        assert_eq!(format_currency(dec("99.994")), "₹99.99");
    }

    #[test]
    fn test_format_items() {
        let items = vec![
            OrderItem {
                item_id: None,
                name: "Masala Dosa".into(),
                price: Some(dec("80")),
                quantity: 2,
            },
            OrderItem {
                item_id: None,
                name: "Filter Coffee".into(),
                price: None,
                quantity: 1,
            },
        ];
        assert_eq!(format_items(&items), "Masala Dosa x 2, Filter Coffee x 1");
        assert_eq!(format_items(&[]), "");
    }

    #[test]
    fn test_timestamps() {
        assert_eq!(format_timestamp(at(14, 7)), "Jan 5, 2024, 02:07 PM");
        assert_eq!(format_recent_time(at(9, 30)), "1/5/2024, 09:30 AM");
    }

    #[test]
    fn test_short_order_id() {
        assert_eq!(short_order_id("ORD_1718000000000"), "ORD_1718...");
        assert_eq!(short_order_id("abc"), "abc...");
        // Multi-byte ids never split a character
        assert_eq!(short_order_id("ऑर्डर-१२३४५"), "ऑर्डर-१२...");
    }
}
