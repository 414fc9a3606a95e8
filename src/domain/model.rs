use crate::utils::error::Result;
use crate::utils::validation::validate_non_empty_input;

/// One operator activation that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub order_uid: String,
}

impl LookupRequest {
    /// Builds a request from raw operator input, trimming surrounding whitespace.
    pub fn parse(raw_input: &str) -> Result<Self> {
        let order_uid = validate_non_empty_input("OrderUID", raw_input)?;
        Ok(Self {
            order_uid: order_uid.to_string(),
        })
    }

    /// Path of the order resource, relative to the service base URL.
    pub fn path(&self) -> String {
        format!("/order/{}", self.order_uid)
    }
}

/// Classified result of a single lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    /// 2xx with a decodable body; the payload is never interpreted.
    Success(serde_json::Value),
    HttpFailure(u16),
    /// The exchange did not complete or the body could not be decoded.
    TransportFailure(String),
}

impl LookupOutcome {
    pub fn kind(&self) -> &'static str {
        match self {
            LookupOutcome::Success(_) => "success",
            LookupOutcome::HttpFailure(_) => "http_failure",
            LookupOutcome::TransportFailure(_) => "transport_failure",
        }
    }
}
