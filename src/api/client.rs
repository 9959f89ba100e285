//! Yahoo Finance HTTP client.

use super::retry::{RetryPolicy, parse_retry_after};
use super::{QuoteInfo, QuoteProvider};
use crate::config::ProviderConfig;
use crate::error::{Error, Result};
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

/// Builder for creating an API client.
pub struct ApiClientBuilder {
    config: ProviderConfig,
    retry: Option<RetryPolicy>,
}

impl ApiClientBuilder {
    /// Create a new builder with default config.
    pub fn new() -> Self {
        Self {
            config: ProviderConfig::default(),
            retry: None,
        }
    }

    /// Set the provider configuration.
    pub fn config(mut self, config: ProviderConfig) -> Self {
        self.config = config;
        self
    }

    /// Override the retry policy derived from the configuration.
    pub fn retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry = Some(policy);
        self
    }

    /// Build the API client.
    pub fn build(self) -> Result<ApiClient> {
        let retry = self
            .retry
            .unwrap_or_else(|| RetryPolicy::from_config(&self.config));
        ApiClient::new(self.config, retry)
    }
}

impl Default for ApiClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// HTTP client for the Yahoo Finance chart API.
///
/// Holds one pooled [`reqwest::Client`]; connections are reused across
/// every request of every cycle.
pub struct ApiClient {
    /// Pooled HTTP client.
    http: Client,
    /// Base URL, without trailing slash.
    base_url: String,
    /// Retry policy for transient statuses.
    retry: RetryPolicy,
}

impl ApiClient {
    /// Create a new API client.
    pub fn new(config: ProviderConfig, retry: RetryPolicy) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| Error::config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            retry,
        })
    }

    /// URL of the chart endpoint for `symbol`.
    pub fn chart_url(&self, symbol: &str) -> String {
        format!("{}/v8/finance/chart/{}", self.base_url, symbol)
    }

    /// Single request, no retries.
    async fn request_chart(&self, url: &str) -> Result<QuoteInfo> {
        debug!("GET {}", url);

        let response = self
            .http
            .get(url)
            .query(&[("range", "1d"), ("interval", "1d")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let retry_after = parse_retry_after(response.headers());
            return Err(Error::status(status.as_u16(), retry_after));
        }

        let body = response.text().await?;
        QuoteInfo::from_chart_json(&body)
    }
}

#[async_trait]
impl QuoteProvider for ApiClient {
    async fn quote_info(&self, symbol: &str) -> Result<QuoteInfo> {
        let url = self.chart_url(symbol);
        self.retry.run(|| self.request_chart(&url)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    const GGAL_CHART: &str = r#"{"chart":{"result":[{"meta":{"symbol":"GGAL","regularMarketPrice":10.0,"previousClose":9.5,"regularMarketVolume":1500}}],"error":null}}"#;

    fn http_response(status: &str, headers: &str, body: &str) -> String {
        format!(
            "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n{}\r\n{}",
            status,
            body.len(),
            headers,
            body
        )
    }

    /// Local server answering one connection per canned response, in order.
    /// Returns its base URL and a count of requests received.
    async fn serve(responses: Vec<String>) -> (String, Arc<AtomicUsize>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();

        tokio::spawn(async move {
            for response in responses {
                let (mut socket, _) = listener.accept().await.unwrap();
                let mut request = Vec::new();
                let mut buf = [0u8; 1024];
                while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                    let n = socket.read(&mut buf).await.unwrap();
                    if n == 0 {
                        break;
                    }
                    request.extend_from_slice(&buf[..n]);
                }
                counter.fetch_add(1, Ordering::SeqCst);
                socket.write_all(response.as_bytes()).await.unwrap();
                socket.shutdown().await.unwrap();
            }
        });

        (format!("http://{}", addr), hits)
    }

    fn client_for(base_url: String) -> ApiClientBuilder {
        ApiClientBuilder::new().config(ProviderConfig {
            base_url,
            ..ProviderConfig::default()
        })
    }

    #[tokio::test]
    async fn test_quote_info_retries_503_then_succeeds() {
        // Retry-After: 0 keeps the test fast and proves the header is honoured
        let unavailable = http_response("503 Service Unavailable", "Retry-After: 0\r\n", "");
        let (base_url, hits) = serve(vec![
            unavailable.clone(),
            unavailable,
            http_response("200 OK", "Content-Type: application/json\r\n", GGAL_CHART),
        ])
        .await;
        let client = client_for(base_url).build().unwrap();

        let info = client.quote_info("GGAL").await.unwrap();

        assert_eq!(info.regular_market_price, Some(dec!(10)));
        assert_eq!(info.previous_close_or(Decimal::ZERO), dec!(9.5));
        assert_eq!(info.regular_market_volume, Some(1500));
        assert_eq!(hits.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_quote_info_does_not_retry_not_found() {
        let (base_url, hits) = serve(vec![http_response("404 Not Found", "", "")]).await;
        let client = client_for(base_url).build().unwrap();

        let err = client.quote_info("NOPE").await.unwrap_err();

        assert!(matches!(
            err,
            Error::Status {
                status: 404,
                retry_after: None
            }
        ));
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_status_error_carries_retry_after() {
        let (base_url, hits) = serve(vec![http_response(
            "429 Too Many Requests",
            "Retry-After: 7\r\n",
            "",
        )])
        .await;
        let client = client_for(base_url)
            .retry_policy(RetryPolicy::new(0, Duration::ZERO))
            .build()
            .unwrap();

        let err = client.quote_info("YPF").await.unwrap_err();

        assert!(matches!(
            err,
            Error::Status {
                status: 429,
                retry_after: Some(delay)
            } if delay == Duration::from_secs(7)
        ));
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_chart_url() {
        let config = ProviderConfig {
            base_url: "https://query2.finance.yahoo.com/".to_string(),
            ..ProviderConfig::default()
        };
        let client = ApiClientBuilder::new().config(config).build().unwrap();

        assert_eq!(
            client.chart_url("EURARS=X"),
            "https://query2.finance.yahoo.com/v8/finance/chart/EURARS=X"
        );
    }

    #[test]
    fn test_builder_uses_config_retry_policy() {
        let config = ProviderConfig {
            max_retries: 5,
            backoff_base_ms: 250,
            ..ProviderConfig::default()
        };
        let client = ApiClientBuilder::new().config(config).build().unwrap();

        assert_eq!(client.retry.max_retries, 5);
        assert_eq!(client.retry.base_delay, Duration::from_millis(250));
    }
}
