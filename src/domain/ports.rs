use crate::domain::model::{LookupOutcome, LookupRequest};
use async_trait::async_trait;
use std::time::Duration;

/// Where order records come from. Implementations never fail: every exchange
/// is folded into a `LookupOutcome`.
#[async_trait]
pub trait OrderSource: Send + Sync {
    async fn fetch(&self, request: &LookupRequest) -> LookupOutcome;
}

/// The read-only output region. Each call replaces whatever was shown before.
pub trait OutputSurface: Send + Sync {
    fn replace(&self, rendered: &str);
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn request_timeout(&self) -> Option<Duration>;
}
