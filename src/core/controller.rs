use crate::core::render::{render_outcome, VALIDATION_MESSAGE};
use crate::domain::model::{LookupOutcome, LookupRequest};
use crate::domain::ports::{OrderSource, OutputSurface};
use std::sync::atomic::{AtomicU64, Ordering};

/// Drives one lookup per activation: validate, fetch, classify, render.
///
/// Every activation takes a fresh generation number. A result is only written
/// to the surface if no later activation has started while it was in flight,
/// so overlapping activations resolve to "last activation wins".
pub struct LookupController<S: OrderSource, O: OutputSurface> {
    source: S,
    surface: O,
    generation: AtomicU64,
}

impl<S: OrderSource, O: OutputSurface> LookupController<S, O> {
    pub fn new(source: S, surface: O) -> Self {
        Self {
            source,
            surface,
            generation: AtomicU64::new(0),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn surface(&self) -> &O {
        &self.surface
    }

    /// Runs one activation and replaces the surface contents with its rendering.
    pub async fn perform_lookup(&self, raw_input: &str) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::debug!(generation, input = raw_input, "lookup activated");

        let rendered = self.resolve(raw_input).await;

        let latest = self.generation.load(Ordering::SeqCst);
        if latest != generation {
            tracing::debug!(generation, latest, "discarding stale lookup result");
            return;
        }

        self.surface.replace(&rendered);
    }

    /// Input in, rendered text out. Issues at most one request.
    pub async fn resolve(&self, raw_input: &str) -> String {
        let request = match LookupRequest::parse(raw_input) {
            Ok(request) => request,
            Err(e) => {
                tracing::debug!("lookup rejected: {}", e);
                return VALIDATION_MESSAGE.to_string();
            }
        };

        let outcome = self.source.fetch(&request).await;
        match &outcome {
            LookupOutcome::Success(_) => {
                tracing::info!("✅ order {} found", request.order_uid)
            }
            LookupOutcome::HttpFailure(status) => {
                tracing::info!("order {} lookup failed with status {}", request.order_uid, status)
            }
            LookupOutcome::TransportFailure(message) => {
                tracing::warn!("❌ order {} lookup did not complete: {}", request.order_uid, message)
            }
        }
        tracing::debug!(kind = outcome.kind(), "lookup classified");

        render_outcome(&outcome)
    }
}
