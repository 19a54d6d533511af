use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use billing_client::ReportingApi;
use billing_console::{ConsoleConfig, Dashboard, ExportPipeline, LogNotifier, OrderHistory, logger};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use shared::{DateRange, ViewMode};
use shared::util::current_year;

/// Order and sales reporting for the billing backend
#[derive(Debug, Parser)]
#[command(name = "billing-console", version)]
struct Cli {
    /// Override API_BASE_URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Override API_TOKEN
    #[arg(long, global = true)]
    token: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Today's figures, recent orders and the sales chart
    Dashboard {
        /// Chart year, defaults to the current year
        #[arg(long)]
        year: Option<i32>,
        /// monthly | weekly
        #[arg(long, default_value = "monthly")]
        mode: ViewMode,
    },
    /// One page of the order history
    Orders {
        /// 1-based page number
        #[arg(long, default_value_t = 1)]
        page: u32,
        /// Range start (YYYY-MM-DD), needs --end
        #[arg(long)]
        start: Option<NaiveDate>,
        /// Range end (YYYY-MM-DD), needs --start
        #[arg(long)]
        end: Option<NaiveDate>,
    },
    /// Download the order CSV for an optional date range
    Export {
        #[arg(long)]
        start: Option<NaiveDate>,
        #[arg(long)]
        end: Option<NaiveDate>,
        /// Output directory, defaults to EXPORT_DIR
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let config = ConsoleConfig::from_env().with_overrides(cli.base_url, cli.token);
    logger::init_logger(&config.log_level, config.log_dir.as_deref());
    tracing::debug!(base_url = %config.api_base_url, "Configuration loaded");

    let api: Arc<dyn ReportingApi> = Arc::new(
        config
            .client_config()
            .build_http_client()
            .context("failed to build HTTP client")?,
    );

    match cli.command {
        Command::Dashboard { year, mode } => run_dashboard(api, year, mode).await,
        Command::Orders { page, start, end } => run_orders(api, page, start, end).await,
        Command::Export { start, end, out } => {
            let range = match (start, end) {
                (None, None) => None,
                _ => Some(DateRange::from_bounds(start, end)?),
            };
            let dir = out.unwrap_or(config.export_dir);
            let path = ExportPipeline::new(api)
                .export_csv(range, &dir)
                .await
                .context("export failed")?;
            println!("Saved {}", path.display());
            Ok(())
        }
    }
}

async fn run_dashboard(
    api: Arc<dyn ReportingApi>,
    year: Option<i32>,
    mode: ViewMode,
) -> anyhow::Result<()> {
    let this_year = current_year();
    let mut dashboard = Dashboard::new(api, Arc::new(LogNotifier), this_year)
        .with_selection(mode, year.unwrap_or(this_year));
    dashboard.load();
    dashboard.settle().await;

    match dashboard.summary() {
        Some(summary) => {
            println!("Today's sales:  {}", summary.today_sales_display);
            println!("Today's orders: {}", summary.today_order_count);
            println!();
            println!("Recent orders");
            for row in &summary.recent_orders {
                println!(
                    "  {:<12} {:<20} {:>12} {:<6} {:<10} {}",
                    row.short_id, row.customer_name, row.amount, row.payment_method, row.status, row.time
                );
            }
        }
        None => println!("{}", dashboard.status_message().unwrap_or_default()),
    }

    if let Some(chart) = dashboard.chart() {
        println!();
        println!("{} - {}", chart.dataset_label, chart.year);
        let max = chart.max_value();
        for (label, value) in chart.labels.iter().zip(&chart.values) {
            let width = if max > 0.0 { (value / max * 40.0).round() as usize } else { 0 };
            println!("  {label:<10} {value:>12.2} {}", "#".repeat(width));
        }
    }
    Ok(())
}

async fn run_orders(
    api: Arc<dyn ReportingApi>,
    page: u32,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> anyhow::Result<()> {
    let mut history = OrderHistory::new(api, Arc::new(LogNotifier));

    if start.is_some() || end.is_some() {
        if let Some(start) = start {
            history.set_start(start)?;
        }
        if let Some(end) = end {
            history.set_end(end)?;
        }
        history.apply_filter()?;
    } else {
        history.load();
    }
    history.settle().await;

    let wanted = page.saturating_sub(1);
    if wanted > 0 && history.goto_page(wanted).is_some() {
        history.settle().await;
    }

    if history.shown_query().is_none() {
        anyhow::bail!("orders could not be loaded");
    }
    if let Some(message) = history.empty_message() {
        println!("{message}");
        return Ok(());
    }
    for row in history.rows() {
        println!(
            "{:<22} {:<18} {:<12} {:>12} {:<6} {:<10} {}  {}",
            row.order_id,
            row.customer_name,
            row.phone_number,
            row.total,
            row.payment_method,
            row.status,
            row.date,
            row.items
        );
    }
    println!();
    println!("Page {} of {}", history.page_index() + 1, history.total_pages());
    Ok(())
}
