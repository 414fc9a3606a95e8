use crate::domain::model::{LookupOutcome, LookupRequest};
use crate::domain::ports::{ConfigProvider, OrderSource};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// `OrderSource` backed by the order service's `GET /order/{uid}` endpoint.
#[derive(Debug, Clone)]
pub struct HttpOrderSource {
    client: Client,
    base_url: String,
}

impl HttpOrderSource {
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: base_url.into(),
        })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::new(config.base_url(), config.request_timeout())
    }

    pub fn order_url(&self, request: &LookupRequest) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), request.path())
    }
}

#[async_trait]
impl OrderSource for HttpOrderSource {
    async fn fetch(&self, request: &LookupRequest) -> LookupOutcome {
        let url = self.order_url(request);
        tracing::debug!("Making API request to: {}", url);

        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => return LookupOutcome::TransportFailure(describe(&e)),
        };

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            return LookupOutcome::HttpFailure(status.as_u16());
        }

        match response.json::<serde_json::Value>().await {
            Ok(payload) => LookupOutcome::Success(payload),
            Err(e) => LookupOutcome::TransportFailure(describe(&e)),
        }
    }
}

// reqwest keeps the useful part ("Connection refused", "operation timed out")
// in the source chain, so flatten it into one line.
fn describe(error: &reqwest::Error) -> String {
    let mut message = error.to_string();
    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
