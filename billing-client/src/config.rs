//! Client configuration

/// Endpoint paths relative to the API base URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub dashboard: String,
    pub monthly_sales: String,
    pub weekly_sales: String,
    /// Paginated order listing
    pub orders: String,
    /// CSV rendering of the (optionally filtered) order set
    pub orders_download: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            dashboard: "dashboard".into(),
            monthly_sales: "dashboard/monthly-sales".into(),
            weekly_sales: "dashboard/weekly-sales".into(),
            orders: "orders".into(),
            orders_download: "orders/download".into(),
        }
    }
}

/// Client configuration for connecting to the billing backend
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL including the version prefix
    /// (e.g., "http://localhost:8080/api/v1.0")
    pub base_url: String,

    /// Bearer token for authentication
    pub token: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Endpoint layout of the backend
    pub endpoints: Endpoints,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout: 30,
            endpoints: Endpoints::default(),
        }
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Replace the whole endpoint layout
    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    /// Point the order listing and CSV export at different paths
    /// (the Spring backend mounts them at `orders/paginated` and `orders/export`)
    pub fn with_order_paths(
        mut self,
        orders: impl Into<String>,
        orders_download: impl Into<String>,
    ) -> Self {
        self.endpoints.orders = orders.into();
        self.endpoints.orders_download = orders_download.into();
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> crate::ClientResult<super::NetworkHttpClient> {
        super::NetworkHttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:8080/api/v1.0")
    }
}
