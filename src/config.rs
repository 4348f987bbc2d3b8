//! Network and filesystem locations used by both tools.

use std::path::PathBuf;
use std::time::Duration;

/// Base URL of the ledger REST API.
pub const DEFAULT_API_URL: &str = "http://localhost:3000/api";

/// Where the history report is written, relative to the working directory.
pub const DEFAULT_REPORT_PATH: &str = "../../Reports/transactionReport.csv";

/// Upper bound on a single request, connect included.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Namespace every participant and transaction type lives under.
pub const NAMESPACE: &str = "org.hawkoin.network";

#[derive(Debug, Clone)]
pub struct LedgerConfig {
    pub api_url: String,
    pub timeout: Duration,
    pub report_path: PathBuf,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            report_path: PathBuf::from(DEFAULT_REPORT_PATH),
        }
    }
}

impl LedgerConfig {
    /// URL of a resource type in the network namespace, e.g. `Faculty`.
    pub fn resource_url(&self, resource: &str) -> String {
        format!(
            "{}/{}.{}",
            self.api_url.trim_end_matches('/'),
            NAMESPACE,
            resource
        )
    }
}
