// billing-console/tests/common/mod.rs
// Scripted in-memory backend and recording notifier shared by the integration tests
#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use billing_client::{ClientError, ClientResult, ReportingApi};
use billing_console::{Notice, NoticeLevel, Notifier};
use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use shared::{
    DashboardSnapshot, DateRange, Order, OrderItem, OrderPage, OrderPageQuery, PaymentMethod,
    PaymentStatus, SalesBucket, SalesSeries, ViewMode,
};
use tokio::sync::oneshot;

pub const MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn order(id: &str, date: NaiveDate, total: i64) -> Order {
    Order {
        order_id: id.to_string(),
        customer_name: format!("Customer {id}"),
        phone_number: "9000000000".into(),
        items: vec![OrderItem {
            item_id: Some("i-1".into()),
            name: "Masala Dosa".into(),
            price: Some(Decimal::from(total)),
            quantity: 1,
        }],
        subtotal: Some(Decimal::from(total)),
        tax: Some(Decimal::ZERO),
        grand_total: Decimal::from(total),
        payment_method: PaymentMethod::Upi,
        payment_status: Some(PaymentStatus::Completed),
        payment_details: None,
        created_at: date.and_hms_opt(12, 0, 0).unwrap(),
    }
}

/// One order per day, newest first, across `from..=to`
pub fn daily_orders(from: NaiveDate, to: NaiveDate) -> Vec<Order> {
    let mut orders: Vec<Order> = from
        .iter_days()
        .take_while(|d| *d <= to)
        .map(|d| order(&format!("ORD_{}", d.format("%Y%m%d")), d, 100 + d.day() as i64))
        .collect();
    orders.reverse();
    orders
}

/// `n` orders on consecutive days starting 2024-03-01, newest first
pub fn orders(n: usize) -> Vec<Order> {
    let start = day(2024, 3, 1);
    let end = start + chrono::Duration::days(n as i64 - 1);
    daily_orders(start, end)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Dashboard,
    Sales(ViewMode, i32),
    Page(OrderPageQuery),
    Download(Option<DateRange>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gate {
    Dashboard,
    Series(ViewMode),
    Page(u32),
    Download,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Dashboard,
    Series,
    Orders,
    Download,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    Server,
    Unauthorized,
}

impl Failure {
    fn to_error(self) -> ClientError {
        match self {
            Failure::Server => ClientError::Server {
                status: 500,
                message: "internal error".into(),
            },
            Failure::Unauthorized => ClientError::Unauthorized("token expired".into()),
        }
    }
}

/// In-memory backend with Spring-like paging.
///
/// A gated request blocks until its sender fires, which lets tests decide
/// the order replies arrive in.
#[derive(Default)]
pub struct FakeApi {
    orders: Mutex<Vec<Order>>,
    today_sales: Mutex<Decimal>,
    gates: Mutex<HashMap<Gate, oneshot::Receiver<()>>>,
    failures: Mutex<HashMap<Endpoint, Failure>>,
    calls: Mutex<Vec<Call>>,
}

impl FakeApi {
    pub fn with_orders(orders: Vec<Order>) -> Arc<Self> {
        let api = Self::default();
        *api.orders.lock().unwrap() = orders;
        Arc::new(api)
    }

    pub fn set_orders(&self, orders: Vec<Order>) {
        *self.orders.lock().unwrap() = orders;
    }

    pub fn set_today_sales(&self, amount: Decimal) {
        *self.today_sales.lock().unwrap() = amount;
    }

    /// Hold the next request matching `gate` until the sender fires
    pub fn gate(&self, gate: Gate) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().insert(gate, rx);
        tx
    }

    pub fn fail(&self, endpoint: Endpoint, failure: Failure) {
        self.failures.lock().unwrap().insert(endpoint, failure);
    }

    pub fn recover(&self, endpoint: Endpoint) {
        self.failures.lock().unwrap().remove(&endpoint);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn page_calls(&self) -> Vec<OrderPageQuery> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Page(q) => Some(q),
                _ => None,
            })
            .collect()
    }

    fn filtered(&self, range: Option<&DateRange>) -> Vec<Order> {
        self.orders
            .lock()
            .unwrap()
            .iter()
            .filter(|o| range.is_none_or(|r| r.contains(o.created_date())))
            .cloned()
            .collect()
    }

    async fn enter(&self, call: Call, gate: Gate, endpoint: Endpoint) -> ClientResult<()> {
        self.calls.lock().unwrap().push(call);
        let pending = self.gates.lock().unwrap().remove(&gate);
        if let Some(rx) = pending {
            let _ = rx.await;
        }
        let failure = self.failures.lock().unwrap().get(&endpoint).copied();
        match failure {
            Some(f) => Err(f.to_error()),
            None => Ok(()),
        }
    }

    fn csv_body(orders: &[Order]) -> Vec<u8> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer
            .write_record([
                "Order ID",
                "Customer Name",
                "Phone Number",
                "Items",
                "Total",
                "Payment Method",
                "Status",
                "Date",
            ])
            .unwrap();
        for o in orders {
            let items = o
                .items
                .iter()
                .map(|i| format!("{} x {}", i.name, i.quantity))
                .collect::<Vec<_>>()
                .join(", ");
            writer
                .write_record([
                    o.order_id.clone(),
                    o.customer_name.clone(),
                    o.phone_number.clone(),
                    items,
                    o.grand_total.to_string(),
                    o.payment_method.to_string(),
                    o.payment_status().to_string(),
                    o.created_at.format("%Y-%m-%d %H:%M").to_string(),
                ])
                .unwrap();
        }
        writer.into_inner().ok().expect("csv buffer")
    }

    fn bucket_sum(&self, year: i32, matches: impl Fn(NaiveDate) -> bool) -> Decimal {
        self.orders
            .lock()
            .unwrap()
            .iter()
            .filter(|o| o.created_at.year() == year && matches(o.created_date()))
            .map(|o| o.grand_total)
            .sum()
    }
}

#[async_trait]
impl ReportingApi for FakeApi {
    async fn dashboard(&self) -> ClientResult<DashboardSnapshot> {
        self.enter(Call::Dashboard, Gate::Dashboard, Endpoint::Dashboard)
            .await?;
        let recent: Vec<Order> = self.orders.lock().unwrap().iter().take(5).cloned().collect();
        Ok(DashboardSnapshot {
            today_sales: *self.today_sales.lock().unwrap(),
            today_order_count: recent.len() as u64,
            recent_orders: recent,
        })
    }

    async fn monthly_sales(&self, year: i32) -> ClientResult<SalesSeries> {
        self.enter(
            Call::Sales(ViewMode::Monthly, year),
            Gate::Series(ViewMode::Monthly),
            Endpoint::Series,
        )
        .await?;
        let buckets = MONTHS
            .iter()
            .enumerate()
            .map(|(i, name)| {
                SalesBucket::new(*name, self.bucket_sum(year, |d| d.month0() == i as u32))
            })
            .collect::<Vec<_>>();
        Ok(buckets.into())
    }

    async fn weekly_sales(&self, year: i32) -> ClientResult<SalesSeries> {
        self.enter(
            Call::Sales(ViewMode::Weekly, year),
            Gate::Series(ViewMode::Weekly),
            Endpoint::Series,
        )
        .await?;
        let buckets = (1..=52u32)
            .map(|week| {
                SalesBucket::new(
                    format!("Week {week}"),
                    self.bucket_sum(year, |d| d.iso_week().week() == week),
                )
            })
            .collect::<Vec<_>>();
        Ok(buckets.into())
    }

    async fn orders_page(&self, query: &OrderPageQuery) -> ClientResult<OrderPage> {
        self.enter(Call::Page(*query), Gate::Page(query.page), Endpoint::Orders)
            .await?;
        let matching = self.filtered(query.range.as_ref());
        let size = query.size as usize;
        let total = matching.len();
        let content = matching
            .into_iter()
            .skip(query.page as usize * size)
            .take(size)
            .collect();
        Ok(OrderPage {
            content,
            total_pages: total.div_ceil(size) as u32,
            total_elements: Some(total as u64),
        })
    }

    async fn download_orders(&self, range: Option<&DateRange>) -> ClientResult<Vec<u8>> {
        self.enter(Call::Download(range.copied()), Gate::Download, Endpoint::Download)
            .await?;
        Ok(Self::csv_body(&self.filtered(range)))
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.notices()
            .into_iter()
            .filter(|n| n.level == NoticeLevel::Error)
            .map(|n| n.message)
            .collect()
    }

    pub fn distinct_errors(&self) -> HashSet<String> {
        self.errors().into_iter().collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }
}
