//! Order Model

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How the customer paid
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Cash,
    Upi,
    Card,
    /// Any method this console does not know about yet
    #[serde(other)]
    Other,
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentMethod::Cash => write!(f, "CASH"),
            PaymentMethod::Upi => write!(f, "UPI"),
            PaymentMethod::Card => write!(f, "CARD"),
            PaymentMethod::Other => write!(f, "OTHER"),
        }
    }
}

/// Settlement state of an order's payment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Completed,
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentStatus::Pending => write!(f, "PENDING"),
            PaymentStatus::Completed => write!(f, "COMPLETED"),
        }
    }
}

/// Payment block nested in the order payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDetails {
    #[serde(default)]
    pub status: Option<PaymentStatus>,
}

/// Order line item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    #[serde(default)]
    pub item_id: Option<String>,
    pub name: String,
    /// Unit price in currency unit
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub price: Option<Decimal>,
    pub quantity: u32,
}

/// Order snapshot as returned by the order and dashboard endpoints
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_id: String,
    pub customer_name: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub subtotal: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub tax: Option<Decimal>,
    /// Grand total in currency unit
    #[serde(with = "rust_decimal::serde::float")]
    pub grand_total: Decimal,
    pub payment_method: PaymentMethod,
    /// Some backends flatten the status onto the order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_status: Option<PaymentStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_details: Option<PaymentDetails>,
    pub created_at: NaiveDateTime,
}

impl Order {
    /// Effective payment status; a missing status means the payment is pending.
    pub fn payment_status(&self) -> PaymentStatus {
        self.payment_status
            .or_else(|| self.payment_details.as_ref().and_then(|d| d.status))
            .unwrap_or_default()
    }

    /// Calendar day the order was created on
    pub fn created_date(&self) -> NaiveDate {
        self.created_at.date()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_deserialize_backend_order() {
        let json = r#"{
            "orderId": "ORD_1718000000000",
            "customerName": "Asha",
            "phoneNumber": "9876543210",
            "items": [
                {"itemId": "i-1", "name": "Masala Dosa", "price": 80.0, "quantity": 2},
                {"itemId": "i-2", "name": "Filter Coffee", "price": 25.5, "quantity": 1}
            ],
            "subtotal": 185.5,
            "tax": 1.0,
            "grandTotal": 186.5,
            "paymentMethod": "UPI",
            "paymentDetails": {"razorpayOrderId": "rp_1", "status": "COMPLETED"},
            "createdAt": "2024-01-15T10:30:00"
        }"#;

        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.order_id, "ORD_1718000000000");
        assert_eq!(order.items.len(), 2);
        assert_eq!(order.items[1].price, Some(dec("25.5")));
        assert_eq!(order.grand_total, dec("186.5"));
        assert_eq!(order.payment_method, PaymentMethod::Upi);
        assert_eq!(order.payment_status(), PaymentStatus::Completed);
        assert_eq!(
            order.created_date(),
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
        );
    }

    #[test]
    fn test_missing_payment_details_means_pending() {
        let json = r#"{
            "orderId": "o-2",
            "customerName": "Ravi",
            "grandTotal": 10,
            "paymentMethod": "CASH",
            "createdAt": "2024-01-15T10:30:00.123"
        }"#;

        let order: Order = serde_json::from_str(json).unwrap();
        assert!(order.items.is_empty());
        assert_eq!(order.payment_status(), PaymentStatus::Pending);
    }

    #[test]
    fn test_top_level_status_wins() {
        let json = r#"{
            "orderId": "o-3",
            "customerName": "Meena",
            "grandTotal": 10,
            "paymentMethod": "CARD",
            "paymentStatus": "COMPLETED",
            "createdAt": "2024-01-15T10:30:00"
        }"#;

        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.payment_status(), PaymentStatus::Completed);
    }

    #[test]
    fn test_unknown_payment_method_is_other() {
        let method: PaymentMethod = serde_json::from_str("\"WALLET\"").unwrap();
        assert_eq!(method, PaymentMethod::Other);
        assert_eq!(method.to_string(), "OTHER");
    }
}
