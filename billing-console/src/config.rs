use std::path::PathBuf;

use billing_client::{ClientConfig, Endpoints};

/// Console configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | API_BASE_URL | http://localhost:8080/api/v1.0 | Backend base URL with version prefix |
/// | API_TOKEN | (none) | Bearer token sent with every request except the CSV download |
/// | REQUEST_TIMEOUT_SECS | 30 | Per-request timeout |
/// | ORDERS_PATH | orders | Paginated order listing path |
/// | ORDERS_DOWNLOAD_PATH | orders/download | CSV export path |
/// | EXPORT_DIR | . | Directory exported CSV files are written to |
/// | LOG_LEVEL | info | Log level / filter directive |
/// | LOG_DIR | (none) | Enables daily rolling log files in this directory |
///
/// # Example
///
/// ```ignore
/// API_BASE_URL=http://pos.local:8080/api/v1.0 ORDERS_PATH=orders/paginated billing-console orders
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    pub api_base_url: String,
    pub api_token: Option<String>,
    pub request_timeout_secs: u64,
    pub orders_path: String,
    pub orders_download_path: String,
    pub export_dir: PathBuf,
    pub log_level: String,
    pub log_dir: Option<String>,
}

impl ConsoleConfig {
    /// Load from the process environment, falling back to defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Endpoints::default();

        Self {
            api_base_url: get("API_BASE_URL")
                .unwrap_or_else(|| ClientConfig::default().base_url),
            api_token: get("API_TOKEN"),
            request_timeout_secs: get("REQUEST_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            orders_path: get("ORDERS_PATH").unwrap_or(defaults.orders),
            orders_download_path: get("ORDERS_DOWNLOAD_PATH").unwrap_or(defaults.orders_download),
            export_dir: get("EXPORT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".")),
            log_level: get("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_dir: get("LOG_DIR"),
        }
    }

    /// Apply command-line overrides
    pub fn with_overrides(mut self, base_url: Option<String>, token: Option<String>) -> Self {
        if let Some(url) = base_url {
            self.api_base_url = url;
        }
        if token.is_some() {
            self.api_token = token;
        }
        self
    }

    pub fn client_config(&self) -> ClientConfig {
        let config = ClientConfig::new(&self.api_base_url)
            .with_timeout(self.request_timeout_secs)
            .with_order_paths(&self.orders_path, &self.orders_download_path);
        match &self.api_token {
            Some(token) => config.with_token(token),
            None => config,
        }
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
