use std::{env, time::Duration};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// DynamoDB table holding consultants (default: "consultants")
    pub table_name: String,
    /// Custom DynamoDB endpoint, e.g. a local DynamoDB (default: unset)
    pub endpoint_url: Option<String>,
    /// AWS region (default: "us-east-1")
    pub aws_region: String,
    /// Request timeout for the local HTTP server in seconds (default: 10)
    pub request_timeout_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `TABLE_NAME` - DynamoDB table name (default: "consultants")
    /// - `AWS_ENDPOINT_URL` - Custom DynamoDB endpoint (default: unset)
    /// - `AWS_REGION` - AWS region (default: "us-east-1")
    /// - `REQUEST_TIMEOUT_SECONDS` - Local server request timeout (default: 10)
    pub fn from_env() -> Self {
        Self {
            table_name: env::var("TABLE_NAME").unwrap_or_else(|_| "consultants".to_string()),
            endpoint_url: env::var("AWS_ENDPOINT_URL")
                .ok()
                .filter(|v| !v.trim().is_empty()),
            aws_region: env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
            request_timeout_seconds: env::var("REQUEST_TIMEOUT_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        }
    }

    /// Get the request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
