use crate::domain::model::LookupOutcome;

pub const VALIDATION_MESSAGE: &str = "OrderUID required";
pub const HTTP_FAILURE_PREFIX: &str = "Error: ";
pub const TRANSPORT_FAILURE_PREFIX: &str = "Request error: ";

/// Turns an outcome into the text shown to the operator.
///
/// Success payloads are pretty-printed JSON with two-space indentation, fields
/// in the order the service sent them. Failure renderings carry only the status
/// code or the transport message.
pub fn render_outcome(outcome: &LookupOutcome) -> String {
    match outcome {
        LookupOutcome::Success(payload) => format!("{:#}", payload),
        LookupOutcome::HttpFailure(status) => format!("{}{}", HTTP_FAILURE_PREFIX, status),
        LookupOutcome::TransportFailure(message) => {
            format!("{}{}", TRANSPORT_FAILURE_PREFIX, message)
        }
    }
}
