//! HTTP client for the reporting endpoints

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use shared::{DashboardSnapshot, DateRange, OrderPage, OrderPageQuery, SalesSeries, ViewMode};

use crate::{ClientConfig, ClientError, ClientResult, Endpoints};

/// Reporting endpoints consumed by the console.
///
/// Every method maps to exactly one outbound request.
#[async_trait]
pub trait ReportingApi: Send + Sync {
    /// Today's figures and recent orders
    async fn dashboard(&self) -> ClientResult<DashboardSnapshot>;

    /// Twelve monthly buckets for `year`
    async fn monthly_sales(&self, year: i32) -> ClientResult<SalesSeries>;

    /// Weekly buckets for `year`
    async fn weekly_sales(&self, year: i32) -> ClientResult<SalesSeries>;

    /// One page of orders, optionally restricted to a date range
    async fn orders_page(&self, query: &OrderPageQuery) -> ClientResult<OrderPage>;

    /// Raw CSV bytes for the orders matching `range`
    async fn download_orders(&self, range: Option<&DateRange>) -> ClientResult<Vec<u8>>;

    async fn sales_series(&self, mode: ViewMode, year: i32) -> ClientResult<SalesSeries> {
        match mode {
            ViewMode::Monthly => self.monthly_sales(year).await,
            ViewMode::Weekly => self.weekly_sales(year).await,
        }
    }
}

/// Network HTTP client
#[derive(Debug, Clone)]
pub struct NetworkHttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
    endpoints: Endpoints,
}

impl NetworkHttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        if config.base_url.trim().is_empty() {
            return Err(ClientError::Config("base URL is empty".into()));
        }
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
            endpoints: config.endpoints.clone(),
        })
    }

    /// Set the authentication token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Get the current token
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ClientResult<T> {
        let url = self.url(path);
        tracing::debug!(%url, ?query, "GET");
        let request = self.authorized(self.client.get(&url).query(query));
        let response = Self::check_status(request.send().await?).await?;
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Map non-2xx statuses onto client errors
    async fn check_status(response: Response) -> ClientResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        Err(match status {
            StatusCode::UNAUTHORIZED => ClientError::Unauthorized(text),
            StatusCode::FORBIDDEN => ClientError::Forbidden(text),
            StatusCode::NOT_FOUND => ClientError::NotFound(text),
            StatusCode::BAD_REQUEST => ClientError::Validation(text),
            _ => ClientError::Server {
                status: status.as_u16(),
                message: text,
            },
        })
    }
}

#[async_trait]
impl ReportingApi for NetworkHttpClient {
    async fn dashboard(&self) -> ClientResult<DashboardSnapshot> {
        self.get_json(&self.endpoints.dashboard, &[]).await
    }

    async fn monthly_sales(&self, year: i32) -> ClientResult<SalesSeries> {
        self.get_json(&self.endpoints.monthly_sales, &[("year", year.to_string())])
            .await
    }

    async fn weekly_sales(&self, year: i32) -> ClientResult<SalesSeries> {
        self.get_json(&self.endpoints.weekly_sales, &[("year", year.to_string())])
            .await
    }

    async fn orders_page(&self, query: &OrderPageQuery) -> ClientResult<OrderPage> {
        self.get_json(&self.endpoints.orders, &query.query_pairs())
            .await
    }

    async fn download_orders(&self, range: Option<&DateRange>) -> ClientResult<Vec<u8>> {
        let url = self.url(&self.endpoints.orders_download);
        let query: Vec<(&str, String)> = range
            .map(|r| r.query_pairs().to_vec())
            .unwrap_or_default();
        tracing::debug!(%url, ?query, "GET csv");

        // The download endpoint is public; no bearer token is attached.
        let response = self.client.get(&url).query(&query).send().await?;
        let response = Self::check_status(response).await?;
        Ok(response.bytes().await?.to_vec())
    }
}
